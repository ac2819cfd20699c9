//! Bartok table and game driver.
//!
//! [`Table`] is the shared state every participant plays against: the card
//! store, draw pile, discard pile, target card, turn phase and clock. It
//! implements [`GameController`]. [`Game`] owns the table plus the seats and
//! runs the loop: tick card moves, route each landing to its listener, and
//! hand the turn on when a participant reports in.

use crate::cards::Card;
use crate::config::{ConfigError, GameConfig};
use crate::deck::Deck;
use crate::engine::{GameController, TurnPhase};
use crate::entity::{CardEntity, CardId, CardState, MoveComplete, MoveListener};
use crate::geometry::{Pose, Vec3};
use crate::participant::{Participant, ParticipantKind, TurnOutcome, IN_MOTION_LAYER};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

pub const DRAW_LAYER: &str = "Draw";
pub const TARGET_LAYER: &str = "Target";
pub const DISCARD_LAYER: &str = "Discard";

/// Depth step between stacked cards in a pile.
const PILE_Z_STEP: f32 = -0.05;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("the game is over")]
    GameOver,
    #[error("cards have not been dealt yet")]
    NotDealt,
    #[error("no human seat at this table")]
    NoHumanSeat,
    #[error("it is not seat {0}'s turn")]
    NotYourTurn(usize),
    #[error("waiting for a card to finish moving")]
    Waiting,
    #[error("card {0} is not in the hand")]
    NotInHand(CardId),
    #[error("{0} does not match the target card")]
    InvalidPlay(Card),
}

/// Where the deal/start sequence is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Setup,
    Dealing,
    FlippingTarget,
    Playing,
}

#[derive(Debug)]
pub struct Table {
    cards: Vec<CardEntity>,
    draw_pile: Vec<CardId>,
    discard_pile: Vec<CardId>,
    target: Option<CardId>,
    phase: TurnPhase,
    current: Option<usize>,
    pending_pass: bool,
    winner: Option<usize>,
    now: f32,
    fan_degrees: f32,
    draw_pos: Vec3,
    target_pos: Vec3,
    discard_pos: Vec3,
    rng: ChaCha8Rng,
}

impl Table {
    fn new(config: &GameConfig, deck: Deck, seed: u64) -> Self {
        let cards: Vec<CardEntity> = deck
            .into_cards()
            .into_iter()
            .enumerate()
            .map(|(i, card)| {
                let mut entity = CardEntity::new(CardId(i), card, Pose::new(config.draw_pile, 0.0));
                entity.set_move_duration(config.move_duration);
                entity
            })
            .collect();
        let draw_pile = cards.iter().map(CardEntity::id).collect();
        let mut table = Self {
            cards,
            draw_pile,
            discard_pile: Vec::new(),
            target: None,
            phase: TurnPhase::Idle,
            current: None,
            pending_pass: false,
            winner: None,
            now: 0.0,
            fan_degrees: config.fan_degrees,
            draw_pos: config.draw_pile,
            target_pos: config.target,
            discard_pos: config.discard,
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(2)),
        };
        table.arrange_draw_pile(false);
        table
    }

    pub fn cards(&self) -> &[CardEntity] {
        &self.cards
    }

    /// Draw pile from bottom to top.
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard_pile
    }

    pub fn target(&self) -> Option<CardId> {
        self.target
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn winner(&self) -> Option<usize> {
        self.winner
    }

    /// Stack the draw pile face down on its slot, top card drawn last.
    fn arrange_draw_pile(&mut self, animate: bool) {
        let now = self.now;
        for (i, &id) in self.draw_pile.iter().enumerate() {
            let mut pos = self.draw_pos;
            pos.z += PILE_Z_STEP * i as f32;
            let pose = Pose::new(pos, 0.0);
            let entity = &mut self.cards[id.0];
            if animate {
                entity.move_to(pose, now, true);
            } else {
                entity.place(pose);
            }
            entity.set_state(CardState::DrawPile);
            entity.set_face_up(false);
            entity.set_sorting_layer(DRAW_LAYER);
            entity.set_eventual_sort_layer(DRAW_LAYER);
            entity.set_sort_order(i as i32);
            entity.set_eventual_sort_order(i as i32);
        }
    }

    fn reshuffle_discards(&mut self) {
        let mut cards = std::mem::take(&mut self.discard_pile);
        cards.shuffle(&mut self.rng);
        debug!(cards = cards.len(), "reshuffling discard pile into draw pile");
        self.draw_pile = cards;
        self.arrange_draw_pile(true);
    }

    fn move_to_discard(&mut self, id: CardId) {
        let height = self.discard_pile.len();
        let mut pos = self.discard_pos;
        pos.z += PILE_Z_STEP * height as f32;
        let now = self.now;
        let entity = &mut self.cards[id.0];
        entity.move_to(Pose::new(pos, 0.0), now, true);
        entity.set_state(CardState::Discard);
        entity.set_face_up(true);
        entity.set_sorting_layer(DISCARD_LAYER);
        entity.set_eventual_sort_layer(DISCARD_LAYER);
        entity.set_sort_order(height as i32 * 4);
        entity.set_eventual_sort_order(height as i32 * 4);
        self.discard_pile.push(id);
    }
}

impl GameController for Table {
    fn phase(&self) -> TurnPhase {
        self.phase
    }

    fn begin_waiting(&mut self) {
        self.phase = TurnPhase::Waiting;
    }

    fn fan_degrees(&self) -> f32 {
        self.fan_degrees
    }

    fn now(&self) -> f32 {
        self.now
    }

    fn is_valid_play(&self, card: CardId) -> bool {
        match self.target {
            Some(t) => self.cards[card.0].card().matches(self.cards[t.0].card()),
            None => false,
        }
    }

    fn draw(&mut self) -> Option<CardId> {
        if self.draw_pile.is_empty() {
            self.reshuffle_discards();
        }
        let drawn = self.draw_pile.pop();
        if drawn.is_none() {
            warn!("draw pile and discard pile are both empty");
        }
        drawn
    }

    fn move_to_target(&mut self, card: CardId) {
        if let Some(prev) = self.target.take() {
            self.move_to_discard(prev);
        }
        let now = self.now;
        let pose = Pose::new(self.target_pos, 0.0);
        let entity = &mut self.cards[card.0];
        entity.move_to(pose, now, true);
        entity.set_state(CardState::ToTarget);
        entity.set_face_up(true);
        entity.set_sorting_layer(IN_MOTION_LAYER);
        entity.set_eventual_sort_layer(TARGET_LAYER);
        entity.set_eventual_sort_order(0);
        self.target = Some(card);
    }

    fn pass_turn(&mut self) {
        self.pending_pass = true;
    }

    fn card(&self, id: CardId) -> &CardEntity {
        &self.cards[id.0]
    }

    fn card_mut(&mut self, id: CardId) -> &mut CardEntity {
        &mut self.cards[id.0]
    }
}

/// A Bartok game: table, seats and the decision RNG.
#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    stage: Stage,
    table: Table,
    players: Vec<Participant>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Build a game from a validated config. Without a configured seed one is
    /// taken from the OS.
    ///
    /// ```
    /// use bartok_rs::config::GameConfig;
    /// use bartok_rs::engine::TurnPhase;
    /// use bartok_rs::game::Game;
    ///
    /// let mut game = Game::new(GameConfig::default().with_seed(3)).unwrap();
    /// game.deal();
    /// assert_eq!(game.phase(), TurnPhase::Idle);
    /// assert_eq!(game.participants()[1].len(), 7);
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let deck = Deck::shuffled(seed);
        let table = Table::new(&config, deck, seed);
        let players = (0..config.num_players)
            .map(|i| {
                let kind = if config.human_seat == Some(i) {
                    ParticipantKind::Human
                } else {
                    ParticipantKind::Automated
                };
                Participant::new(kind, i, config.hand_layouts[i].clone())
            })
            .collect();
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed.wrapping_add(1)),
            config,
            seed,
            stage: Stage::Setup,
            table,
            players,
        }
    }

    /// Start over with the next seed.
    pub fn restart(&mut self) {
        let seed = self.seed.wrapping_add(1);
        let config = self.config.clone();
        *self = Self::build(config, seed);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn phase(&self) -> TurnPhase {
        self.table.phase
    }
    pub fn now(&self) -> f32 {
        self.table.now
    }
    /// Seat whose turn it is, once play has started.
    pub fn current(&self) -> Option<usize> {
        self.table.current
    }
    pub fn winner(&self) -> Option<usize> {
        self.table.winner
    }
    pub fn participants(&self) -> &[Participant] {
        &self.players
    }
    pub fn participant(&self, seat: usize) -> Option<&Participant> {
        self.players.get(seat)
    }
    pub fn human_seat(&self) -> Option<usize> {
        self.config.human_seat
    }
    pub fn card(&self, id: CardId) -> &CardEntity {
        self.table.card(id)
    }
    pub fn target(&self) -> Option<CardId> {
        self.table.target
    }
    pub fn draw_pile_len(&self) -> usize {
        self.table.draw_pile.len()
    }
    pub fn discard_pile_len(&self) -> usize {
        self.table.discard_pile.len()
    }
    pub fn is_dealt(&self) -> bool {
        self.stage != Stage::Setup
    }
    pub fn is_playing(&self) -> bool {
        self.stage == Stage::Playing
    }
    pub fn is_valid_play(&self, card: CardId) -> bool {
        self.table.is_valid_play(card)
    }

    /// Deal the starting hands, seat 1 first. Cards leave the draw pile
    /// staggered; play starts once the first target card has landed.
    pub fn deal(&mut self) {
        if self.stage != Stage::Setup {
            return;
        }
        let n = self.players.len();
        let start = self.table.now;
        let mut last = None;
        let mut k = 0;
        for _ in 0..self.config.hand_size {
            for j in 0..n {
                let seat = (j + 1) % n;
                let Some(id) = self.table.draw() else {
                    break;
                };
                self.table.cards[id.0].set_time_start(start + self.config.deal_stagger * k as f32);
                self.players[seat].add_card(&mut self.table, id);
                last = Some(id);
                k += 1;
            }
        }
        info!(seed = self.seed, cards = k, seats = n, "dealt");
        self.stage = Stage::Dealing;
        match last {
            Some(id) => self.table.cards[id.0].set_callback(MoveListener::Table),
            None => self.flip_first_target(),
        }
    }

    /// Advance the clock by `dt` seconds and process everything that lands.
    pub fn update(&mut self, dt: f32) {
        self.table.now += dt;
        let now = self.table.now;
        let events: Vec<MoveComplete> =
            self.table.cards.iter_mut().filter_map(|c| c.tick(now)).collect();
        for event in events {
            self.dispatch(event);
        }
        self.resolve_passes();
    }

    fn dispatch(&mut self, event: MoveComplete) {
        match event.listener {
            MoveListener::Participant(seat) => {
                if let Some(p) = self.players.get(seat) {
                    p.on_card_move_complete(&mut self.table, event.card);
                }
            }
            MoveListener::Table => self.on_table_move_complete(),
        }
    }

    fn on_table_move_complete(&mut self) {
        match self.stage {
            Stage::Dealing => self.flip_first_target(),
            Stage::FlippingTarget => {
                self.stage = Stage::Playing;
                info!("game started");
                self.table.pass_turn();
            }
            Stage::Setup | Stage::Playing => {}
        }
    }

    fn flip_first_target(&mut self) {
        self.stage = Stage::FlippingTarget;
        match self.table.draw() {
            Some(id) => {
                self.table.move_to_target(id);
                self.table.cards[id.0].set_callback(MoveListener::Table);
            }
            None => self.on_table_move_complete(),
        }
    }

    fn resolve_passes(&mut self) {
        while self.table.pending_pass {
            self.table.pending_pass = false;
            self.advance_turn();
        }
    }

    fn advance_turn(&mut self) {
        if self.table.phase == TurnPhase::GameOver {
            return;
        }
        let n = self.players.len();
        if let Some(cur) = self.table.current {
            if self.players[cur].is_empty() {
                self.table.phase = TurnPhase::GameOver;
                self.table.winner = Some(cur);
                info!(winner = cur, at = self.table.now, "game over");
                return;
            }
        }
        let next = self.table.current.map_or(1 % n, |cur| (cur + 1) % n);
        self.table.current = Some(next);
        self.table.phase = TurnPhase::Pre;
        debug!(seat = next, "turn passed");
        let outcome = self.players[next].take_turn(&mut self.table, &mut self.rng);
        if outcome == TurnOutcome::Exhausted {
            debug!(seat = next, "seat could neither play nor draw");
        }
    }

    fn human_turn(&self) -> Result<usize, ActionError> {
        let seat = self.config.human_seat.ok_or(ActionError::NoHumanSeat)?;
        match self.table.phase {
            TurnPhase::GameOver => return Err(ActionError::GameOver),
            TurnPhase::Waiting => return Err(ActionError::Waiting),
            _ => {}
        }
        if self.stage != Stage::Playing {
            return Err(ActionError::NotDealt);
        }
        if self.table.current != Some(seat) {
            return Err(ActionError::NotYourTurn(seat));
        }
        Ok(seat)
    }

    /// Draw a card for the human seat. Returns `None` when nothing is left to
    /// draw, in which case the turn is passed.
    pub fn human_draw(&mut self) -> Result<Option<CardId>, ActionError> {
        let seat = self.human_turn()?;
        let Some(id) = self.table.draw() else {
            self.table.pass_turn();
            self.resolve_passes();
            return Ok(None);
        };
        self.players[seat].add_card(&mut self.table, id);
        self.table.cards[id.0].set_callback(MoveListener::Participant(seat));
        self.table.begin_waiting();
        Ok(Some(id))
    }

    /// Play `card` from the human seat onto the target.
    pub fn human_play(&mut self, card: CardId) -> Result<(), ActionError> {
        let seat = self.human_turn()?;
        if !self.players[seat].contains(card) {
            return Err(ActionError::NotInHand(card));
        }
        if !self.table.is_valid_play(card) {
            return Err(ActionError::InvalidPlay(self.table.cards[card.0].card()));
        }
        self.players[seat].remove_card(&mut self.table, card);
        self.table.move_to_target(card);
        self.table.cards[card.0].set_callback(MoveListener::Participant(seat));
        self.table.begin_waiting();
        Ok(())
    }
}
