use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const LOGO: &str = r#"
 ____    _    ____ _____ ___  _  __
| __ )  / \  |  _ \_   _/ _ \| |/ /
|  _ \ / _ \ | |_) || || | | | ' / 
| |_) / ___ \|  _ < | || |_| | . \ 
|____/_/   \_\_| \_\|_| \___/|_|\_\
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 70, f.area());
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("bartok-rs").borders(Borders::ALL), area);

    let logo_lines: Vec<Line> = LOGO
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Green))))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));
    f.render_widget(Paragraph::new(logo_lines).alignment(Alignment::Center), rows[0]);

    let mut lines = vec![Line::from(Span::styled(
        "New game:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(item, style)));
    }
    lines.push(Line::from(""));
    if let Some(err) = app.action_error() {
        lines.push(Line::from(Span::styled(err.to_string(), Style::default().fg(Color::Red))));
    }
    lines.push(Line::from(Span::styled(
        "[Enter] Start  [Esc] Back  [↑/↓] Move  [←/→] Adjust  [Q] Quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center),
        rows[1],
    );
}
