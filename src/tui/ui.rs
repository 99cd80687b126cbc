use crate::SplitDirection;
use crate::core::host::HostWindowAdapter;
use crate::tui::component::Component;
use crate::tui::components::{PaneView, StatusBar, TitleBar};
use crate::tui::workspace::Workspace;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

pub fn draw_ui(frame: &mut Frame, workspace: &mut Workspace, breadcrumbs: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, status_area] = layout.areas(frame.area());

    let mut title_bar = TitleBar::new(
        workspace.current_document_path().display().to_string(),
        workspace.current_cursor_position().to_string(),
        breadcrumbs,
    );
    title_bar.render(frame, title_area);

    draw_panes(frame, main_area, workspace);

    let mut status_bar = StatusBar {
        notice: workspace.notice().map(str::to_string),
    };
    status_bar.render(frame, status_area);
}

/// Panes share the main area evenly, side by side or stacked.
fn draw_panes(frame: &mut Frame, area: Rect, workspace: &mut Workspace) {
    let count = workspace.panes().len() as u32;
    let constraints = (0..count).map(|_| Constraint::Ratio(1, count));
    let layout = match workspace.split() {
        SplitDirection::Vertical => Layout::horizontal(constraints),
        SplitDirection::Horizontal => Layout::vertical(constraints),
    };
    let areas = layout.split(area);

    let focused = workspace.focused_index();
    for (index, (pane, pane_area)) in workspace
        .panes_mut()
        .iter_mut()
        .zip(areas.iter())
        .enumerate()
    {
        let mut view = PaneView {
            pane,
            focused: index == focused,
        };
        view.render(frame, *pane_area);
    }
}
