use super::*;
use crate::time_utils::format_date;

pub fn render_profile_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Length(7), // Profile
            Constraint::Length(3), // Performance
            Constraint::Min(0),
            Constraint::Length(1), // Controls
        ])
        .split(body);

    let muted = Style::default().fg(Color::DarkGray);
    let white = Style::default().fg(Color::White);

    let emp = &app.employee;
    let field = |label: &'static str, value: String| {
        Line::from(vec![Span::styled(label, muted), Span::styled(value, white)])
    };

    let profile = Paragraph::new(vec![
        field("Name:    ", emp.name.clone()),
        field("Role:    ", emp.role.clone()),
        field("Email:   ", emp.email.clone()),
        field("Phone:   ", emp.phone.clone()),
        field("Joined:  ", format_date(emp.join_date)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Profile ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(profile, chunks[0]);

    let performance = Paragraph::new(Line::from(vec![
        Span::styled("Completed works:", muted),
        Span::styled(format!(" {}", emp.completed_works), white),
        Span::styled("  |  ", muted),
        Span::styled("Rating:", muted),
        Span::styled(format!(" {:.1}", emp.rating), white),
        Span::styled("  |  ", muted),
        Span::styled("Active works:", muted),
        Span::styled(format!(" {}", emp.active_works), white),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Performance ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(performance, chunks[1]);

    frame.render_widget(
        Paragraph::new(Span::styled("Esc: Back  q: Quit", muted)),
        chunks[3],
    );
}
