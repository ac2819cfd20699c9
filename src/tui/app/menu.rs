use crate::config::{MAX_PLAYERS, MIN_PLAYERS};
use crate::game::Game;

use super::AppState;

const MAX_HAND_SIZE: usize = 12;
const MAX_FAN_DEGREES: f32 = 30.0;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    Players,
    HandSize,
    FanDegrees,
    Seat,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::Players, MenuItem::HandSize, MenuItem::FanDegrees, MenuItem::Seat];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::Players => format!("Players: {}", app.cfg_num_players),
            MenuItem::HandSize => format!("Hand Size: {}", app.cfg_hand_size),
            MenuItem::FanDegrees => format!("Fan Angle: {:.0}°", app.cfg_fan_degrees),
            MenuItem::Seat => {
                format!("Seat: {}", if app.cfg_watch { "Watch" } else { "Play" })
            }
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players < MAX_PLAYERS {
                    app.cfg_num_players += 1;
                }
            }
            MenuItem::HandSize => {
                if app.cfg_hand_size < MAX_HAND_SIZE {
                    app.cfg_hand_size += 1;
                }
            }
            MenuItem::FanDegrees => {
                app.cfg_fan_degrees = (app.cfg_fan_degrees + 1.0).min(MAX_FAN_DEGREES);
            }
            MenuItem::Seat => app.cfg_watch = !app.cfg_watch,
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::Players => {
                if app.cfg_num_players > MIN_PLAYERS {
                    app.cfg_num_players -= 1;
                }
            }
            MenuItem::HandSize => {
                if app.cfg_hand_size > 1 {
                    app.cfg_hand_size -= 1;
                }
            }
            MenuItem::FanDegrees => {
                app.cfg_fan_degrees = (app.cfg_fan_degrees - 1.0).max(0.0);
            }
            MenuItem::Seat => app.cfg_watch = !app.cfg_watch,
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        let cfg = self.game.config();
        self.menu_index = 0;
        self.cfg_num_players = cfg.num_players;
        self.cfg_hand_size = cfg.hand_size;
        self.cfg_fan_degrees = cfg.fan_degrees;
        self.cfg_watch = cfg.human_seat.is_none();
        self.scene = super::Scene::Menu;
    }

    /// Rebuild the game from the edited settings. An invalid combination
    /// keeps the menu open and reports the reason.
    pub fn apply_menu(&mut self) {
        let n = self.cfg_num_players;
        let mut cfg = self.base_config.clone();
        cfg.num_players = n;
        cfg.hand_size = self.cfg_hand_size;
        cfg.fan_degrees = self.cfg_fan_degrees;
        cfg.human_seat = if self.cfg_watch {
            None
        } else {
            Some(self.base_config.human_seat.filter(|&s| s < n).unwrap_or(0))
        };
        match Game::new(cfg) {
            Ok(game) => {
                self.game = game;
                self.selected = 0;
                self.scene = super::Scene::Table;
            }
            Err(err) => self.set_action_error(err.to_string()),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
