//! Navigation surface: library, document summary, and check review routes

use std::fmt;

use crate::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Library,
    /// `/documents/{id}`
    Document { id: String },
    /// `/documents/{id}/review?check={check_id}`
    Review { id: String, check: Option<String> },
}

impl Route {
    pub fn document(id: &str) -> Self {
        Route::Document { id: id.to_string() }
    }

    pub fn review(id: &str, check: Option<&str>) -> Self {
        Route::Review {
            id: id.to_string(),
            check: check.map(str::to_string),
        }
    }

    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let (path_part, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };

        let segments: Vec<&str> = path_part.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Ok(Route::Library),
            ["documents"] => Err(RouteError::MissingDocumentId(path.to_string())),
            ["documents", id] => Ok(Route::Document {
                id: decode(id)?,
            }),
            ["documents", id, "review"] => {
                let check = match query {
                    Some(q) => query_param(q, "check")?,
                    None => None,
                };
                Ok(Route::Review {
                    id: decode(id)?,
                    check,
                })
            }
            _ => Err(RouteError::UnknownRoute(path.to_string())),
        }
    }

    /// Document the route refers to, if any
    pub fn document_id(&self) -> Option<&str> {
        match self {
            Route::Library => None,
            Route::Document { id } | Route::Review { id, .. } => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Library => f.write_str("/"),
            Route::Document { id } => write!(f, "/documents/{}", urlencoding::encode(id)),
            Route::Review { id, check: None } => {
                write!(f, "/documents/{}/review", urlencoding::encode(id))
            }
            Route::Review {
                id,
                check: Some(check),
            } => write!(
                f,
                "/documents/{}/review?check={}",
                urlencoding::encode(id),
                urlencoding::encode(check)
            ),
        }
    }
}

fn decode(raw: &str) -> Result<String, RouteError> {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .map_err(|_| RouteError::MalformedQuery(raw.to_string()))
}

fn query_param(query: &str, name: &str) -> Result<Option<String>, RouteError> {
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if decode(key)? == name {
            let value = decode(&value.replace('+', " "))?;
            return Ok(if value.is_empty() { None } else { Some(value) });
        }
    }
    Ok(None)
}
