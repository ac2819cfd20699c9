use crate::cards::{Card, Suit};
use crate::engine::TurnPhase;
use crate::entity::CardId;
use crate::layout::fan_start_rotation;
use crate::participant::Participant;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{inner, side_of, Side};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(4), // top seat
            Constraint::Min(5),    // left seat, piles, right seat
            Constraint::Length(4), // bottom seat
            Constraint::Length(4), // status bar
        ])
        .split(f.area());
    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Min(20), Constraint::Percentage(25)])
        .split(chunks[2]);

    draw_header(f, chunks[0], app);
    for (side, area) in [
        (Side::Top, chunks[1]),
        (Side::Left, middle[0]),
        (Side::Right, middle[2]),
        (Side::Bottom, chunks[3]),
    ] {
        let seats: Vec<&Participant> = app
            .game
            .participants()
            .iter()
            .filter(|p| side_of(p.layout().position) == side)
            .collect();
        draw_side(f, area, app, &seats);
    }
    draw_piles(f, middle[1], app);
    draw_status(f, chunks[4], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let game = &app.game;
    let turn = game.current().map(|s| format!("P{}", s + 1)).unwrap_or_else(|| "--".into());
    let line = Line::from(format!(
        "Seed: {}   Phase: {:?}   Turn: {}   Draw: {}   Discard: {}",
        game.seed(),
        game.phase(),
        turn,
        game.draw_pile_len(),
        game.discard_pile_len(),
    ));
    let header =
        Paragraph::new(line).block(Block::default().title("bartok-rs").borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_side(f: &mut Frame, area: Rect, app: &AppState, seats: &[&Participant]) {
    if seats.is_empty() {
        return;
    }
    let share = Constraint::Ratio(1, seats.len() as u32);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![share; seats.len()])
        .split(area);
    for (p, row) in seats.iter().zip(rows.iter()) {
        draw_seat(f, *row, app, p);
    }
}

fn draw_seat(f: &mut Frame, area: Rect, app: &AppState, p: &Participant) {
    let seat = p.index();
    let mut title = format!("P{}", seat + 1);
    if p.is_human() {
        title.push_str(" (You)");
    }
    let fan_degrees = app.game.config().fan_degrees;
    let spread = fan_start_rotation(p.len(), p.layout(), fan_degrees) - p.layout().rotation;
    title.push_str(&format!(" [{} cards, fan ±{spread:.0}°]", p.len()));
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if app.game.winner() == Some(seat) {
        block = block
            .title(Line::from(" WINNER ").right_aligned())
            .border_style(Style::default().fg(Color::Green));
    } else if app.game.current() == Some(seat) {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }

    let selected = if p.is_human() { app.selected_card() } else { None };
    let spans: Vec<Span> = p
        .hand()
        .iter()
        .flat_map(|&id| [hand_card_span(app, id, selected == Some(id)), Span::raw(" ")])
        .collect();
    let para = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, area);
}

fn hand_card_span(app: &AppState, id: CardId, selected: bool) -> Span<'static> {
    let entity = app.game.card(id);
    if !entity.face_up() {
        return Span::styled("[▒▒]", Style::default().fg(Color::Blue));
    }
    let (text, mut style) = card_text(entity.card());
    if entity.is_moving() {
        style = style.add_modifier(Modifier::DIM);
    } else if app.can_act() && app.game.is_valid_play(id) {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("[{text}]"), style)
}

fn draw_piles(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().title("Table").borders(Borders::ALL), area);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
        .split(inner(area));

    let table = app.game.table();
    let draw_top = table.draw_pile().last().copied();
    render_card_widget(f, slots[0], "Draw", draw_top.map(|_| None), None);

    let target = table.target().map(|id| app.game.card(id));
    let target_card = target.filter(|c| c.face_up()).map(|c| Some(c.card()));
    render_card_widget(f, slots[1], "Target", target_card, Some(Color::Yellow));

    let discard_top = table.discard_pile().last().map(|&id| Some(app.game.card(id).card()));
    render_card_widget(f, slots[2], "Discard", discard_top, Some(Color::DarkGray));
}

/// `card` is `None` for an empty slot and `Some(None)` for a face-down card.
fn render_card_widget(
    f: &mut Frame,
    area: Rect,
    title: &str,
    card: Option<Option<Card>>,
    border: Option<Color>,
) {
    let mut block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .title_alignment(Alignment::Center);
    if let Some(color) = border {
        block = block.border_style(Style::default().fg(color));
    }
    let content = match card {
        Some(Some(c)) => {
            let (text, style) = card_text(c);
            Line::from(Span::styled(text, style))
        }
        Some(None) => Line::from(Span::styled("▒▒▒", Style::default().fg(Color::Blue))),
        None => Line::from("[  ]"),
    };
    f.render_widget(Paragraph::new(content).alignment(Alignment::Center).block(block), area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(inner(area));

    let game = &app.game;
    let mut left = vec![if !game.is_dealt() {
        Line::from("Press Space to deal.")
    } else if let Some(w) = game.winner() {
        Line::from(format!("P{} wins. Press N for a new game.", w + 1))
    } else if !game.is_playing() {
        Line::from("Dealing...")
    } else if app.can_act() {
        Line::from("Your turn: play a matching card or draw.")
    } else if game.phase() == TurnPhase::Waiting {
        Line::from("Waiting for the move to finish...")
    } else {
        Line::from(format!("P{} is thinking.", game.current().map_or(0, |s| s + 1)))
    }];
    if let Some(err) = app.action_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let keys = Line::from("? help • M menu • Q quit");
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(Paragraph::new(keys).alignment(Alignment::Right), cols[1]);
}

fn card_text(c: Card) -> (String, Style) {
    let glyph = match c.suit() {
        Suit::Clubs => '♣',
        Suit::Diamonds => '♦',
        Suit::Hearts => '♥',
        Suit::Spades => '♠',
    };
    let color = if c.suit().is_red() { Color::Red } else { Color::White };
    (format!("{}{}", c.rank(), glyph), Style::default().fg(color))
}
