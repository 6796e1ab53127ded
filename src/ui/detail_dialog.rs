use super::jobs_view::status_color;
use super::utils::{centered_rect, format_rupees};
use super::*;
use crate::store::JobStatus;
use crate::time_utils::format_date;

pub fn render_job_detail_dialog(frame: &mut Frame, app: &mut App, body: Rect) {
    // Take an owned copy before the background render borrows `app` mutably.
    let job = app.dialog_job().cloned();
    super::jobs_view::render_jobs_view(frame, app, body);
    let Some(job) = job else { return };

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);
    let heading = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Client:   ", muted),
            Span::styled(job.client_name.clone(), white),
        ]),
        Line::from(vec![
            Span::styled("Phone:    ", muted),
            Span::styled(job.phone.clone(), white),
        ]),
        Line::from(vec![
            Span::styled("Address:  ", muted),
            Span::styled(job.address.clone(), white),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type: ", muted),
            Span::styled(job.job_type.clone(), white),
            Span::styled("    Cameras: ", muted),
            Span::styled(job.camera_count.to_string(), white),
        ]),
        Line::from(vec![
            Span::styled("Date: ", muted),
            Span::styled(format_date(job.date), white),
            Span::styled("    Estimated cost: ", muted),
            Span::styled(format_rupees(job.estimated_cost), white),
        ]),
        Line::from(vec![
            Span::styled("Status: ", muted),
            Span::styled(
                job.status.label(),
                Style::default().fg(status_color(job.status)),
            ),
        ]),
    ];

    if job.status == JobStatus::InProgress {
        if let Some(progress) = job.progress {
            lines.push(Line::from(vec![
                Span::styled("Progress: ", muted),
                Span::styled(format!("{progress}%"), white),
            ]));
        }
    }
    if let Some(completed_date) = job.completed_date {
        lines.push(Line::from(vec![
            Span::styled("Completed: ", muted),
            Span::styled(format_date(completed_date), white),
        ]));
    }

    if let Some(tools) = &job.tools {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Required tools", heading)));
        for tool in tools {
            lines.push(Line::from(Span::styled(format!("  • {tool}"), white)));
        }
    }

    if let Some(notes) = &job.notes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Notes", heading)));
        lines.push(Line::from(Span::styled(format!("  {notes}"), white)));
    }

    if let Some(work_notes) = &job.work_notes {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Work notes", heading)));
        lines.push(Line::from(Span::styled(format!("  {work_notes}"), white)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Esc: Close", muted)));

    let height = lines.len() as u16 + 2;
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", job.client_name))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}
