//! Zoom and sheet state of the drawing pane

use shared_types::Check;

pub const MIN_ZOOM: u16 = 25;
pub const MAX_ZOOM: u16 = 300;
pub const ZOOM_STEP: u16 = 25;
pub const FIT_ZOOM: u16 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingViewer {
    zoom: u16, // percent
    sheet: u32,
    total_sheets: u32,
}

impl DrawingViewer {
    pub fn new(total_sheets: u32) -> Self {
        Self {
            zoom: FIT_ZOOM,
            sheet: 1,
            total_sheets: total_sheets.max(1),
        }
    }

    /// Viewer opened on the sheet the check points at
    pub fn for_check(check: Option<&Check>, total_sheets: u32) -> Self {
        let mut viewer = Self::new(total_sheets);
        if let Some(check) = check {
            viewer.focus(check);
        }
        viewer
    }

    pub fn zoom(&self) -> u16 {
        self.zoom
    }

    /// Zoom as a scale factor (1.0 at fit)
    pub fn scale(&self) -> f32 {
        self.zoom as f32 / 100.0
    }

    pub fn sheet(&self) -> u32 {
        self.sheet
    }

    pub fn total_sheets(&self) -> u32 {
        self.total_sheets
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + ZOOM_STEP).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.saturating_sub(ZOOM_STEP).max(MIN_ZOOM);
    }

    pub fn fit(&mut self) {
        self.zoom = FIT_ZOOM;
    }

    pub fn next_sheet(&mut self) -> bool {
        if self.sheet >= self.total_sheets {
            return false;
        }
        self.sheet += 1;
        true
    }

    pub fn prev_sheet(&mut self) -> bool {
        if self.sheet <= 1 {
            return false;
        }
        self.sheet -= 1;
        true
    }

    /// Jump to the check's sheet. A sheet beyond the known count grows it;
    /// sheet 0 is treated as 1.
    pub fn focus(&mut self, check: &Check) {
        if let Some(location) = &check.location {
            let sheet = location.sheet.max(1);
            self.total_sheets = self.total_sheets.max(sheet);
            self.sheet = sheet;
        }
    }
}

impl Default for DrawingViewer {
    fn default() -> Self {
        Self::new(1)
    }
}
