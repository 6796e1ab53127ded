use super::*;
use crate::app::JobTab;
use crate::store::{Job, JobStatus};
use crate::time_utils::format_date;

pub fn render_jobs_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(1), // Tabs
            Constraint::Length(1), // spacing
            Constraint::Min(0),    // Job list
            Constraint::Length(3), // Status message + controls
        ])
        .split(body);

    render_tabs(frame, chunks[0], app);
    render_job_list(frame, chunks[2], app);
    render_footer(frame, chunks[3], app);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let assigned = tab_span(JobTab::Assigned, app.assigned_jobs.len(), app.job_tab);
    let completed = tab_span(JobTab::Completed, app.completed_jobs.len(), app.job_tab);
    let line = Line::from(vec![assigned, Span::raw("    "), completed]);
    frame.render_widget(Paragraph::new(line), area);
}

fn tab_span(tab: JobTab, count: usize, active: JobTab) -> Span<'static> {
    let text = format!("[{}] {} ({})", if tab == JobTab::Assigned { 1 } else { 2 }, tab.title(), count);
    let style = if tab == active {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Span::styled(text, style)
}

fn render_job_list(frame: &mut Frame, area: Rect, app: &App) {
    let jobs = app.visible_jobs();
    let title = format!(" {} Jobs ({}) ", app.job_tab.title(), jobs.len());

    if jobs.is_empty() {
        let message = match app.job_tab {
            JobTab::Assigned => "No assigned jobs at the moment",
            JobTab::Completed => "No completed jobs yet",
        };
        let empty = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = jobs.iter().map(job_card).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(app.selected_index()));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One job as a multi-line card: client, date, status, address, camera
/// count and type, phone.
fn job_card(job: &Job) -> ListItem<'static> {
    let muted = Style::default().fg(Color::DarkGray);

    let mut title = vec![
        Span::styled(
            job.client_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[{}]", job.status.label()),
            Style::default().fg(status_color(job.status)),
        ),
    ];
    if job.status == JobStatus::InProgress {
        if let Some(progress) = job.progress {
            title.push(Span::styled(
                format!(" {progress}%"),
                Style::default().fg(Color::Cyan),
            ));
        }
    }

    let lines = vec![
        Line::from(title),
        Line::from(Span::styled(
            format!(
                "  {} · {} cameras · {}",
                format_date(job.date),
                job.camera_count,
                job.job_type
            ),
            muted,
        )),
        Line::from(Span::styled(
            format!("  {} · {}", job.address, job.phone),
            muted,
        )),
        Line::from(""),
    ];
    ListItem::new(lines)
}

pub(super) fn status_color(status: JobStatus) -> Color {
    match status {
        JobStatus::Upcoming => Color::Yellow,
        JobStatus::InProgress => Color::Cyan,
        JobStatus::Completed => Color::Green,
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status message
            Constraint::Length(1), // spacing
            Constraint::Length(1), // controls
        ])
        .split(area);

    if let Some(message) = &app.status_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Green),
            )),
            rows[0],
        );
    }

    let hints = match app.job_tab {
        JobTab::Assigned => {
            "j/k: Move  Enter: Details  u: Update status  Tab: Switch tab  p: Profile  r: Refresh  q: Quit"
        }
        JobTab::Completed => {
            "j/k: Move  Enter: Details  Tab: Switch tab  p: Profile  r: Refresh  q: Quit"
        }
    };
    frame.render_widget(
        Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray))),
        rows[2],
    );
}
