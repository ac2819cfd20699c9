mod layout;
mod menu;
mod table;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use self::layout::{centered_rect, inner};

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Table => {
            table::draw_table(f, app);
            if app.help_open() {
                draw_help(f);
            }
        }
    }
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space: deal"),
        Line::from("- N: new game (next seed)"),
        Line::from("- Left / Right: select card"),
        Line::from("- Enter or P: play selected card"),
        Line::from("- D: draw a card"),
        Line::from(""),
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- Play a card matching the target's rank or suit"),
        Line::from("- Draw when nothing matches"),
        Line::from("- First empty hand wins"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move, Left / Right: adjust"),
        Line::from("- Enter: apply, Esc: cancel, Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("Help").borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}
