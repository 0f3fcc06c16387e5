//! Screens of the review CLI rendered as text
//!
//! Every function here takes the store and returns what would be printed,
//! so the screens can be tested without a terminal.

use std::fmt::Write as _;

use review_core::display::{self, DOCUMENT_NOT_FOUND_MESSAGE};
use review_core::{
    filter_options, fixtures, CheckFilter, Document, DocumentStore, DrawingViewer, ReviewSession,
    Route, StorageBackend, ViewMode,
};

/// One press of the review screen's Prev/Next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Step {
    Next,
    Prev,
}

/// What to show on the review screen
#[derive(Debug, Clone, Default)]
pub struct ReviewRequest {
    pub check: Option<String>,
    pub filter: CheckFilter,
    pub steps: Vec<Step>,
    pub detail: bool,
}

/// `--filter` values: all, fail, warning, pass, not_applicable and aliases
pub fn parse_filter(s: &str) -> Result<CheckFilter, String> {
    CheckFilter::parse(s).ok_or_else(|| format!("unknown filter '{}'", s))
}

/// Library screen
pub fn list<S: StorageBackend>(store: &DocumentStore<S>) -> String {
    let cards = display::library(store.documents());
    if store.is_empty() {
        return cards.join("\n");
    }

    store
        .documents()
        .iter()
        .zip(cards)
        .map(|(doc, card)| format!("[{}]\n{}", doc.id, card))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Document summary screen, with the check list narrowed to `filter`
pub fn show<S: StorageBackend>(store: &DocumentStore<S>, id: &str, filter: CheckFilter) -> String {
    match store.get_by_id(id) {
        Some(document) => render_summary(document, filter),
        None => DOCUMENT_NOT_FOUND_MESSAGE.to_string(),
    }
}

fn render_summary(document: &Document, filter: CheckFilter) -> String {
    let mut out = display::document_card(document).join("\n");

    let context: Vec<&str> = [
        document.nec_version.as_deref(),
        document.system_type.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !context.is_empty() {
        let _ = write!(out, "\nNEC {}", context.join(" • "));
    }
    if let Some(score) = document.summary.compliance_score {
        let _ = write!(out, "\nCompliance score: {:.1}", score);
    }
    if let Some(description) = &document.diagram_description {
        let _ = write!(out, "\n\n{}", description);
    }

    let filters: Vec<String> = filter_options(document)
        .iter()
        .map(|option| {
            let marker = if option.filter == filter { "*" } else { "" };
            format!("{}{} ({})", marker, option.label, option.count)
        })
        .collect();
    let _ = write!(out, "\n\nFilters: {}", filters.join("  "));

    let _ = write!(out, "\n\nChecks ({}):", filter.label());
    for check in review_core::visible_checks(&document.checks, filter) {
        let link = Route::review(&document.id, Some(&check.id));
        let _ = write!(out, "\n{}\n      {}", display::check_line(check, false), link);
    }
    out
}

/// Review screen after replaying `request` against a fresh session
pub fn review<S: StorageBackend>(
    store: &DocumentStore<S>,
    id: &str,
    request: &ReviewRequest,
) -> String {
    let Some(document) = store.get_by_id(id) else {
        return DOCUMENT_NOT_FOUND_MESSAGE.to_string();
    };

    let mut session = ReviewSession::open(document, request.check.as_deref());
    session.set_filter(request.filter);
    for step in &request.steps {
        match step {
            Step::Next => session.next(),
            Step::Prev => session.prev(),
        };
    }
    let detail_missing = request.detail && !session.view_more();

    let mut out = render_review(document, &session);
    if detail_missing {
        out.push_str("\nNo further detail for this check");
    }
    out
}

fn render_review(document: &Document, session: &ReviewSession) -> String {
    let mut out = format!(
        "Review: {} ({})",
        document.filename,
        session.filter().label()
    );

    let visible = session.visible();
    let displayed = session.displayed_check();

    if session.view() == ViewMode::Detail {
        if let Some(check) = displayed {
            let _ = write!(out, "\n\n{}", display::check_detail(check));
        }
    } else if visible.is_empty() {
        out.push_str("\n\nNo checks match this filter");
    } else {
        for check in &visible {
            let active = displayed.is_some_and(|d| d.id == check.id);
            let _ = write!(out, "\n{}", display::check_line(check, active));
        }
    }

    if let Some(index) = session.position() {
        let _ = write!(out, "\n\nCheck {} of {}", index + 1, visible.len());
    }
    let nav = [
        (session.has_prev(), "prev"),
        (session.has_next(), "next"),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, name)| *name)
    .collect::<Vec<_>>();
    if !nav.is_empty() {
        let _ = write!(out, "\nAvailable: {}", nav.join(", "));
    }

    let viewer = DrawingViewer::for_check(displayed, sheet_count(document));
    let _ = write!(
        out,
        "\nDrawing: sheet {} of {} at {}%",
        viewer.sheet(),
        viewer.total_sheets(),
        viewer.zoom()
    );
    out
}

/// Highest sheet any check points at
fn sheet_count(document: &Document) -> u32 {
    document
        .checks
        .iter()
        .filter_map(|check| check.location.as_ref().map(|loc| loc.sheet))
        .max()
        .unwrap_or(1)
}

/// Render whatever screen a route path points at
pub fn open<S: StorageBackend>(store: &DocumentStore<S>, path: &str) -> anyhow::Result<String> {
    let route = Route::parse(path)?;
    Ok(match route {
        Route::Library => list(store),
        Route::Document { id } => show(store, &id, CheckFilter::All),
        Route::Review { id, check } => review(
            store,
            &id,
            &ReviewRequest {
                check,
                ..ReviewRequest::default()
            },
        ),
    })
}

pub fn seed<S: StorageBackend>(store: &mut DocumentStore<S>) -> String {
    if store.seed(fixtures::sample_documents()) {
        format!("Seeded {} sample documents", store.len())
    } else {
        format!("Store already holds {} documents; not seeding", store.len())
    }
}

pub fn clear<S: StorageBackend>(store: &mut DocumentStore<S>) -> String {
    let count = store.len();
    store.clear();
    format!("Removed {} documents", count)
}
