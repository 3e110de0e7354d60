use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed vertical arrangement of the single-window UI.
pub(crate) struct AppLayout {
    pub input: Rect,
    pub config: Rect,
    pub stages: Rect,
    pub notice: Rect,
    pub results: Rect,
    pub status: Rect,
}

pub(crate) fn compute(area: Rect) -> AppLayout {
    let [input, config, stages, notice, results, status] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Min(9),
        Constraint::Length(1),
    ])
    .areas(area);

    AppLayout {
        input,
        config,
        stages,
        notice,
        results,
        status,
    }
}
