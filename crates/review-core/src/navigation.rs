//! Check filtering, severity ordering and the review session state machine
//!
//! The visible sequence is always recomputed from `(checks, filter)`; the
//! session only stores the filter, the active check id and the view mode.

use shared_types::{Check, CheckStatus, Document};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFilter {
    #[default]
    All,
    Only(CheckStatus),
}

impl CheckFilter {
    pub fn matches(self, status: CheckStatus) -> bool {
        match self {
            CheckFilter::All => true,
            CheckFilter::Only(wanted) => wanted == status,
        }
    }

    /// Parse `"all"` or any status name
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Some(CheckFilter::All)
        } else {
            CheckStatus::parse(s).map(CheckFilter::Only)
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CheckFilter::All => "all",
            CheckFilter::Only(status) => status.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CheckFilter::All => "All",
            CheckFilter::Only(CheckStatus::Fail) => "Failed",
            CheckFilter::Only(CheckStatus::Warning) => "Warnings",
            CheckFilter::Only(CheckStatus::Pass) => "Passed",
            CheckFilter::Only(CheckStatus::NotApplicable) => "N/A",
        }
    }
}

/// Checks retained by `filter`, in their original order
pub fn filter_checks(checks: &[Check], filter: CheckFilter) -> Vec<&Check> {
    checks
        .iter()
        .filter(|check| filter.matches(check.status))
        .collect()
}

/// Stable sort, most severe first; ties keep their relative order
pub fn sort_by_severity(checks: &mut [&Check]) {
    checks.sort_by_key(|check| check.status.severity_rank());
}

/// The sequence the check list shows: filtered, then severity-sorted
pub fn visible_checks(checks: &[Check], filter: CheckFilter) -> Vec<&Check> {
    let mut visible = filter_checks(checks, filter);
    sort_by_severity(&mut visible);
    visible
}

/// A filter choice on the document summary page together with its count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub filter: CheckFilter,
    pub label: &'static str,
    pub count: u32,
}

/// Filter choices with counts; "All" counts the checks, the rest use the
/// reported summary.
pub fn filter_options(document: &Document) -> Vec<FilterOption> {
    let mut options = vec![FilterOption {
        filter: CheckFilter::All,
        label: CheckFilter::All.label(),
        count: document.checks.len() as u32,
    }];

    options.extend(CheckStatus::ALL.iter().map(|&status| {
        let filter = CheckFilter::Only(status);
        FilterOption {
            filter,
            label: filter.label(),
            count: document.summary.count_for(status),
        }
    }));

    options
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Detail,
}

/// Transient selection state of the two-pane review screen
#[derive(Debug, Clone)]
pub struct ReviewSession {
    document_id: String,
    checks: Vec<Check>,
    filter: CheckFilter,
    active_id: Option<String>,
    view: ViewMode,
}

impl ReviewSession {
    /// Enter the review screen for `document`.
    ///
    /// `requested_check` (the route's `check` parameter) becomes active when
    /// it names one of the document's checks; otherwise the first visible
    /// check does.
    pub fn open(document: &Document, requested_check: Option<&str>) -> Self {
        let mut session = Self {
            document_id: document.id.clone(),
            checks: document.checks.clone(),
            filter: CheckFilter::All,
            active_id: None,
            view: ViewMode::List,
        };

        session.active_id = match requested_check {
            Some(id) if session.contains(id) => Some(id.to_string()),
            _ => session.first_visible_id(),
        };

        debug!(
            "Opened review of {} with active check {:?}",
            session.document_id, session.active_id
        );
        session
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn filter(&self) -> CheckFilter {
        self.filter
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn visible(&self) -> Vec<&Check> {
        visible_checks(&self.checks, self.filter)
    }

    /// The active check if it belongs to the document, else the first
    /// visible one.
    pub fn displayed_check(&self) -> Option<&Check> {
        self.active_id
            .as_deref()
            .and_then(|id| self.checks.iter().find(|check| check.id == id))
            .or_else(|| self.visible().into_iter().next())
    }

    /// Index of the active check within the visible sequence
    pub fn position(&self) -> Option<usize> {
        let active = self.active_id.as_deref()?;
        self.visible().iter().position(|check| check.id == active)
    }

    pub fn select(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active_id = Some(id.to_string());
        true
    }

    pub fn set_filter(&mut self, filter: CheckFilter) {
        self.filter = filter;
        if self.active_id.is_none() {
            self.active_id = self.first_visible_id();
        }
        debug!("Filter set to {}", filter.as_str());
    }

    /// Open the detail view for the active check. Only checks that carry a
    /// description have one.
    pub fn view_more(&mut self) -> bool {
        let has_description = self
            .active_id
            .as_deref()
            .and_then(|id| self.checks.iter().find(|check| check.id == id))
            .is_some_and(|check| check.description.is_some());
        if !has_description || self.view == ViewMode::Detail {
            return false;
        }
        self.view = ViewMode::Detail;
        true
    }

    pub fn back(&mut self) -> bool {
        if self.view == ViewMode::List {
            return false;
        }
        self.view = ViewMode::List;
        true
    }

    pub fn has_prev(&self) -> bool {
        matches!(self.position(), Some(index) if index > 0)
    }

    /// An active check missing from the sequence sits at index -1, so Next
    /// leads to the first element.
    pub fn has_next(&self) -> bool {
        let len = self.visible().len();
        match self.position() {
            Some(index) => index + 1 < len,
            None => len > 0,
        }
    }

    pub fn prev(&mut self) -> bool {
        let target = match self.position() {
            Some(index) if index > 0 => self.visible()[index - 1].id.clone(),
            _ => return false,
        };
        self.active_id = Some(target);
        true
    }

    pub fn next(&mut self) -> bool {
        let visible = self.visible();
        let next_index = match self.position() {
            Some(index) => index + 1,
            None => 0,
        };
        let target = match visible.get(next_index) {
            Some(check) => check.id.clone(),
            None => return false,
        };
        self.active_id = Some(target);
        true
    }

    fn contains(&self, id: &str) -> bool {
        self.checks.iter().any(|check| check.id == id)
    }

    fn first_visible_id(&self) -> Option<String> {
        self.visible().first().map(|check| check.id.clone())
    }
}
