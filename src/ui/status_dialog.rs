use super::utils::centered_rect;
use super::*;
use crate::app::StatusField;
use crate::store::JobStatus;

pub fn render_status_dialog(frame: &mut Frame, app: &mut App, body: Rect) {
    // Take owned copies before the background render borrows `app` mutably.
    let form = app.status_form.clone();
    let client_name = app
        .dialog_job()
        .map(|job| job.client_name.clone())
        .unwrap_or_default();
    super::jobs_view::render_jobs_view(frame, app, body);
    let Some(form) = form else { return };

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);
    let yellow = Style::default().fg(Color::Yellow);

    let status_focused = form.focused_field == StatusField::Status;
    let notes_focused = form.focused_field == StatusField::Notes;

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Status",
            if status_focused { yellow } else { muted },
        )),
    ];
    for status in JobStatus::ALL {
        let selected = status == form.status;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            white
        };
        lines.push(Line::from(Span::styled(
            format!("  {marker}{}", status.label()),
            style,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Work notes",
        if notes_focused { yellow } else { muted },
    )));
    let notes_line = if notes_focused {
        let (before, after) = form.notes.split_at_cursor();
        format!("  {before}█{after}")
    } else {
        format!("  {}", form.notes.value)
    };
    lines.push(Line::from(Span::styled(notes_line, white)));

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Tab", yellow),
        Span::raw(": Switch field  "),
        Span::styled("j/k", yellow),
        Span::raw(": Choose status  "),
        Span::styled("Enter", yellow),
        Span::raw(": Save  "),
        Span::styled("Esc", yellow),
        Span::raw(": Cancel"),
    ]));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(56, height, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" Update Status: {client_name} "))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}
