use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

mod detail_dialog;
mod jobs_view;
mod profile_view;
mod status_dialog;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_stats_bar(frame, root[0], app);

    let body = root[1];
    match app.current_view {
        View::Jobs => jobs_view::render_jobs_view(frame, app, body),
        View::Profile => profile_view::render_profile_view(frame, app, body),
        View::JobDetail => detail_dialog::render_job_detail_dialog(frame, app, body),
        View::UpdateStatus => status_dialog::render_status_dialog(frame, app, body),
    }
}

/// Top bar: app title on the left, the three aggregate counts on the right.
fn render_stats_bar(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // top padding
            Constraint::Length(1), // content
        ])
        .split(area);
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: content_row.height,
    };

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);
    let yellow = Style::default().fg(Color::Yellow);

    let stats = Line::from(vec![
        Span::styled("Today:", yellow),
        Span::styled(format!(" {}", app.counts.today), white),
        Span::styled("  |  ", muted),
        Span::styled("Pending:", yellow),
        Span::styled(format!(" {}", app.counts.pending), white),
        Span::styled("  |  ", muted),
        Span::styled("Completed:", yellow),
        Span::styled(format!(" {} ", app.counts.completed), white),
    ]);
    let stats_width = stats.width() as u16;

    let title = Line::from(vec![
        Span::styled(
            "Sitewatch",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.employee.name), muted),
    ]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(stats_width)])
        .split(area);

    frame.render_widget(Paragraph::new(title), cols[0]);
    frame.render_widget(Paragraph::new(stats), cols[1]);
}
