use crate::config::{ConfigError, GameConfig};
use crate::engine::TurnPhase;
use crate::entity::CardId;
use crate::game::Game;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    Deal,
    NewGame,
    SelectNext,
    SelectPrev,
    Play,
    Draw,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    /// Index into the human hand of the highlighted card.
    pub selected: usize,
    // settings shown in the menu, applied on Enter
    pub menu_index: usize,
    pub cfg_num_players: usize,
    pub cfg_hand_size: usize,
    pub cfg_fan_degrees: f32,
    pub cfg_watch: bool,
    pub(crate) base_config: GameConfig,
    help_open: bool,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let game = Game::new(config.clone())?;
        Ok(Self {
            scene: Scene::Menu,
            game,
            selected: 0,
            menu_index: 0,
            cfg_num_players: config.num_players,
            cfg_hand_size: config.hand_size,
            cfg_fan_degrees: config.fan_degrees,
            cfg_watch: config.human_seat.is_none(),
            base_config: config,
            help_open: false,
            action_error: None,
            action_error_at: None,
        })
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub(crate) fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    /// Cards of the human seat in display order, empty when watching.
    pub fn human_hand(&self) -> &[CardId] {
        self.game
            .human_seat()
            .and_then(|seat| self.game.participant(seat))
            .map(|p| p.hand())
            .unwrap_or(&[])
    }

    pub fn selected_card(&self) -> Option<CardId> {
        self.human_hand().get(self.selected).copied()
    }

    /// Whether the human seat may act right now.
    pub fn can_act(&self) -> bool {
        self.scene == Scene::Table
            && self.game.is_playing()
            && self.game.human_seat().is_some()
            && self.game.current() == self.game.human_seat()
            && !matches!(self.game.phase(), TurnPhase::Waiting | TurnPhase::GameOver)
    }

    fn clamp_selection(&mut self) {
        let n = self.human_hand().len();
        if n == 0 {
            self.selected = 0;
        } else if self.selected >= n {
            self.selected = n - 1;
        }
    }

    fn select_next(&mut self) {
        let n = self.human_hand().len();
        if n > 0 {
            self.selected = (self.selected + 1) % n;
        }
    }

    fn select_prev(&mut self) {
        let n = self.human_hand().len();
        if n > 0 {
            self.selected = (self.selected + n - 1) % n;
        }
    }

    fn play_selected(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        let Some(card) = self.selected_card() else {
            return false;
        };
        match self.game.human_play(card) {
            Ok(()) => {
                self.clear_action_error();
                self.clamp_selection();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    fn draw_card(&mut self) -> bool {
        if !self.can_act() {
            return false;
        }
        match self.game.human_draw() {
            Ok(drawn) => {
                self.clear_action_error();
                // keep the highlight on the card that just arrived
                let pos = drawn.and_then(|id| self.human_hand().iter().position(|&c| c == id));
                if let Some(pos) = pos {
                    self.selected = pos;
                }
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                false
            }
        }
    }

    /// Apply one input. Returns `true` when the game itself changed (a deal,
    /// a new game or a move by the human seat).
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        use InputAction::*;
        match (self.scene, action) {
            (_, ToggleMenu) => self.toggle_menu(),
            (Scene::Table, ToggleHelp) => self.help_open = !self.help_open,
            (Scene::Menu, MenuNext) => self.menu_next(),
            (Scene::Menu, MenuPrev) => self.menu_prev(),
            (Scene::Menu, MenuInc) => self.menu_inc(),
            (Scene::Menu, MenuDec) => self.menu_dec(),
            (Scene::Menu, MenuApply) => self.apply_menu(),
            (Scene::Menu, MenuCancel) => self.cancel_menu(),
            (Scene::Table, Deal) if !self.game.is_dealt() => {
                self.game.deal();
                return true;
            }
            (Scene::Table, NewGame) => {
                self.new_game();
                return true;
            }
            (Scene::Table, SelectNext) => self.select_next(),
            (Scene::Table, SelectPrev) => self.select_prev(),
            (Scene::Table, Play) => return self.play_selected(),
            (Scene::Table, Draw) => return self.draw_card(),
            _ => {}
        }
        false
    }

    /// Throw away the current game and deal a fresh one with the next seed.
    pub fn new_game(&mut self) {
        self.game.restart();
        self.game.deal();
        self.selected = 0;
        self.clear_action_error();
    }

    /// Advance the game clock; called once per controller tick.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if self.scene != Scene::Table {
            return;
        }
        self.game.update(elapsed.as_secs_f32());
        self.clamp_selection();
    }
}
