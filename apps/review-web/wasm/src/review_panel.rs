use review_core::{CheckFilter, Document, DrawingViewer, ReviewSession, Route, ViewMode};
use serde::Serialize;
use shared_types::Check;
use wasm_bindgen::prelude::*;

/// Row of the check list
#[derive(Debug, Clone, Serialize)]
pub struct CheckRow<'a> {
    #[serde(flatten)]
    pub check: &'a Check,
    pub is_active: bool,
    pub link: String,
}

/// Two-pane review screen: check list or detail on the left, drawing on the
/// right
#[wasm_bindgen]
pub struct ReviewPanel {
    session: ReviewSession,
    viewer: DrawingViewer,
}

impl ReviewPanel {
    pub fn open(document: &Document, requested_check: Option<&str>) -> Self {
        let session = ReviewSession::open(document, requested_check);
        let sheets = document
            .checks
            .iter()
            .filter_map(|check| check.location.as_ref().map(|loc| loc.sheet))
            .max()
            .unwrap_or(1);
        let viewer = DrawingViewer::for_check(session.displayed_check(), sheets);
        Self { session, viewer }
    }

    pub fn session(&self) -> &ReviewSession {
        &self.session
    }

    pub fn rows(&self) -> Vec<CheckRow<'_>> {
        let active = self.session.displayed_check().map(|check| check.id.as_str());
        self.session
            .visible()
            .into_iter()
            .map(|check| CheckRow {
                check,
                is_active: Some(check.id.as_str()) == active,
                link: Route::review(self.session.document_id(), Some(&check.id)).to_string(),
            })
            .collect()
    }

    /// Keep the drawing on the active check's sheet
    fn refocus(&mut self, moved: bool) -> bool {
        if moved {
            if let Some(check) = self.session.displayed_check() {
                self.viewer.focus(check);
            }
        }
        moved
    }
}

#[wasm_bindgen]
impl ReviewPanel {
    #[wasm_bindgen(js_name = getDocumentId)]
    pub fn get_document_id(&self) -> String {
        self.session.document_id().to_string()
    }

    #[wasm_bindgen(js_name = getChecksJson)]
    pub fn get_checks_json(&self) -> String {
        serde_json::to_string(&self.rows()).unwrap_or_default()
    }

    #[wasm_bindgen(js_name = getDisplayedCheckJson)]
    pub fn get_displayed_check_json(&self) -> Option<String> {
        self.session
            .displayed_check()
            .and_then(|check| serde_json::to_string(check).ok())
    }

    #[wasm_bindgen(js_name = activeId)]
    pub fn active_id(&self) -> Option<String> {
        self.session.active_id().map(str::to_string)
    }

    /// 1-based position in the visible list, for "Check 2 of 5"
    #[wasm_bindgen(js_name = getPosition)]
    pub fn get_position(&self) -> Option<u32> {
        self.session.position().map(|index| index as u32 + 1)
    }

    #[wasm_bindgen(js_name = getVisibleCount)]
    pub fn get_visible_count(&self) -> u32 {
        self.session.visible().len() as u32
    }

    #[wasm_bindgen(js_name = getFilter)]
    pub fn get_filter(&self) -> String {
        self.session.filter().as_str().to_string()
    }

    /// Returns false for an unknown filter name
    #[wasm_bindgen(js_name = setFilter)]
    pub fn set_filter(&mut self, filter: &str) -> bool {
        match CheckFilter::parse(filter) {
            Some(filter) => {
                self.session.set_filter(filter);
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = selectCheck)]
    pub fn select_check(&mut self, id: &str) -> bool {
        let moved = self.session.select(id);
        self.refocus(moved)
    }

    #[wasm_bindgen(js_name = hasPrev)]
    pub fn has_prev(&self) -> bool {
        self.session.has_prev()
    }

    #[wasm_bindgen(js_name = hasNext)]
    pub fn has_next(&self) -> bool {
        self.session.has_next()
    }

    pub fn prev(&mut self) -> bool {
        let moved = self.session.prev();
        self.refocus(moved)
    }

    pub fn next(&mut self) -> bool {
        let moved = self.session.next();
        self.refocus(moved)
    }

    #[wasm_bindgen(js_name = viewMore)]
    pub fn view_more(&mut self) -> bool {
        self.session.view_more()
    }

    pub fn back(&mut self) -> bool {
        self.session.back()
    }

    #[wasm_bindgen(js_name = isDetail)]
    pub fn is_detail(&self) -> bool {
        self.session.view() == ViewMode::Detail
    }

    #[wasm_bindgen(js_name = zoomIn)]
    pub fn zoom_in(&mut self) {
        self.viewer.zoom_in();
    }

    #[wasm_bindgen(js_name = zoomOut)]
    pub fn zoom_out(&mut self) {
        self.viewer.zoom_out();
    }

    #[wasm_bindgen(js_name = fitToScreen)]
    pub fn fit_to_screen(&mut self) {
        self.viewer.fit();
    }

    #[wasm_bindgen(js_name = getZoom)]
    pub fn get_zoom(&self) -> u16 {
        self.viewer.zoom()
    }

    #[wasm_bindgen(js_name = getSheet)]
    pub fn get_sheet(&self) -> u32 {
        self.viewer.sheet()
    }

    #[wasm_bindgen(js_name = getTotalSheets)]
    pub fn get_total_sheets(&self) -> u32 {
        self.viewer.total_sheets()
    }

    #[wasm_bindgen(js_name = nextSheet)]
    pub fn next_sheet(&mut self) -> bool {
        self.viewer.next_sheet()
    }

    #[wasm_bindgen(js_name = prevSheet)]
    pub fn prev_sheet(&mut self) -> bool {
        self.viewer.prev_sheet()
    }
}
