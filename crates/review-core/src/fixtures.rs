//! Sample documents used to seed an empty store

use shared_types::Document;

/// Sample documents - loaded from fixtures/sample_documents.json
const SAMPLE_DOCUMENTS: &str = include_str!("../fixtures/sample_documents.json");

/// The embedded sample documents, most recent first.
///
/// Returns an empty list if the embedded JSON ever fails to parse.
pub fn sample_documents() -> Vec<Document> {
    serde_json::from_str(SAMPLE_DOCUMENTS).unwrap_or_else(|e| {
        tracing::warn!("Embedded sample documents are invalid: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_parse() {
        let docs = sample_documents();
        assert_eq!(docs.len(), 5);
        assert_eq!(docs[0].filename, "rock_creek_generator_sld.pdf");

        let filenames: Vec<&str> = docs.iter().map(|d| d.filename.as_str()).collect();
        assert!(filenames.contains(&"panel_schedule_B.pdf"));
        assert!(filenames.contains(&"grounding_plan.dwg"));
    }

    #[test]
    fn test_samples_most_recent_first() {
        let docs = sample_documents();
        for pair in docs.windows(2) {
            assert!(pair[0].uploaded_at >= pair[1].uploaded_at);
        }
    }

    #[test]
    fn test_sample_summaries_match_checks() {
        for doc in sample_documents() {
            assert_eq!(doc.summary_mismatch(), None, "summary of {}", doc.id);
        }
    }

    #[test]
    fn test_sample_check_ids_unique() {
        for doc in sample_documents() {
            let mut ids: Vec<&str> = doc.checks.iter().map(|c| c.id.as_str()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), doc.checks.len());
        }
    }
}
