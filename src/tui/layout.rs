use ratatui::layout::{Constraint, Layout, Rect};

/// Query box on top, record list beside its preview, one-line status bar
pub struct AppLayout {
    pub search_area: Rect,
    pub results_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        let [search_area, body, status_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(3), Constraint::Length(1)])
                .areas(area);
        let [results_area, preview_area] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(body);

        Self { search_area, results_area, preview_area, status_area }
    }
}
