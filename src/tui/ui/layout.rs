use crate::geometry::Vec3;
use ratatui::layout::Constraint;
use ratatui::prelude::{Layout, Rect};

/// Where a seat's panel goes on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Side {
    Bottom,
    Left,
    Top,
    Right,
}

/// Pick the screen edge closest to a hand anchor. World `y` grows upwards.
pub(super) fn side_of(position: Vec3) -> Side {
    if position.y.abs() >= position.x.abs() {
        if position.y <= 0.0 { Side::Bottom } else { Side::Top }
    } else if position.x < 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

pub(super) fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

pub(super) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(ratatui::prelude::Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    let area = Layout::default()
        .direction(ratatui::prelude::Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);
    area[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_hand_layouts;

    #[test]
    fn default_seats_land_on_each_edge() {
        let sides: Vec<Side> = default_hand_layouts().iter().map(|l| side_of(l.position)).collect();
        assert_eq!(sides, vec![Side::Bottom, Side::Left, Side::Top, Side::Right]);
    }
}
