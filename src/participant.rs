//! Participants: one seat at the table, human or automated.
//!
//! A participant owns the membership of its hand and nothing else. Card
//! entities live in the controller's store; the participant only requests
//! moves, flips and sort changes on them, and reports back through the
//! [`GameController`] when a move it started has landed.

use crate::engine::{GameController, TurnPhase};
use crate::entity::{CardId, CardState, MoveListener};
use crate::layout::{fan_slots, fan_start_rotation, HandLayout};
use rand::Rng;
use tracing::{debug, trace, warn};

/// Sorting layer a card sits on while travelling into a hand.
pub const IN_MOTION_LAYER: &str = "10";

/// Who drives a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParticipantKind {
    Human,
    Automated,
}

/// What an automated turn did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum TurnOutcome {
    /// Human seats are driven by input, not by `take_turn`.
    Skipped,
    /// No legal card; this card was drawn into the hand.
    Drew(CardId),
    /// This card was played onto the target.
    Played(CardId),
    /// No legal card and nothing left to draw; the turn was passed directly.
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct Participant {
    kind: ParticipantKind,
    index: usize,
    hand: Vec<CardId>,
    layout: HandLayout,
}

impl Participant {
    pub fn new(kind: ParticipantKind, index: usize, layout: HandLayout) -> Self {
        debug_assert!(layout.is_finite(), "hand layout for seat {index} must be finite");
        Self { kind, index, hand: Vec::new(), layout }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_human(&self) -> bool {
        self.kind == ParticipantKind::Human
    }

    /// Cards in display order.
    pub fn hand(&self) -> &[CardId] {
        &self.hand
    }

    pub fn len(&self) -> usize {
        self.hand.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn contains(&self, card: CardId) -> bool {
        self.hand.contains(&card)
    }

    pub fn layout(&self) -> &HandLayout {
        &self.layout
    }

    /// Put `card` into the hand and re-fan.
    ///
    /// Human hands are re-sorted by rank on every add. The card travels on
    /// [`IN_MOTION_LAYER`] and comes to rest on this hand's layer.
    pub fn add_card<C>(&mut self, ctl: &mut C, card: CardId) -> CardId
    where
        C: GameController + ?Sized,
    {
        debug_assert!(!self.contains(card), "seat {} already holds card {card}", self.index);
        self.hand.push(card);
        if self.is_human() {
            let mut sorted = self.hand.clone();
            sorted.sort_by_key(|&id| ctl.card(id).rank());
            self.hand = sorted;
        }

        let entity = ctl.card_mut(card);
        entity.set_sorting_layer(IN_MOTION_LAYER);
        entity.set_eventual_sort_layer(&self.layout.layer_name);

        self.fan_hand(ctl);
        card
    }

    /// Take `card` out of the hand and re-fan. Removing a card that is not
    /// held leaves the hand unchanged.
    pub fn remove_card<C>(&mut self, ctl: &mut C, card: CardId) -> CardId
    where
        C: GameController + ?Sized,
    {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
        }
        self.fan_hand(ctl);
        card
    }

    /// Send every held card to its slot in the fan.
    pub fn fan_hand<C>(&self, ctl: &mut C)
    where
        C: GameController + ?Sized,
    {
        let fan_degrees = ctl.fan_degrees();
        let slots = fan_slots(self.hand.len(), &self.layout, fan_degrees);
        trace!(
            seat = self.index,
            cards = self.hand.len(),
            start_rotation = fan_start_rotation(self.hand.len(), &self.layout, fan_degrees),
            "fan hand"
        );

        // outside the initial deal, moves start right away
        let immediate = ctl.phase() != TurnPhase::Idle;
        let now = ctl.now();
        let face_up = self.is_human();
        for (&id, slot) in self.hand.iter().zip(&slots) {
            let entity = ctl.card_mut(id);
            entity.move_to(slot.pose, now, immediate);
            entity.set_state(CardState::ToHand);
            entity.set_face_up(face_up);
            entity.set_eventual_sort_order(slot.sort_order);
        }
    }

    /// Decide and start this seat's play. Never advances the turn itself
    /// while a card is in flight; [`Participant::on_card_move_complete`] does.
    pub fn take_turn<C, R>(&mut self, ctl: &mut C, rng: &mut R) -> TurnOutcome
    where
        C: GameController + ?Sized,
        R: Rng + ?Sized,
    {
        if self.is_human() {
            return TurnOutcome::Skipped;
        }
        debug!(seat = self.index, hand = self.hand.len(), "take turn");
        ctl.begin_waiting();

        let legal: Vec<CardId> =
            self.hand.iter().copied().filter(|&id| ctl.is_valid_play(id)).collect();
        debug!(seat = self.index, legal = legal.len(), "legal plays");

        if legal.is_empty() {
            let Some(drawn) = ctl.draw() else {
                warn!(seat = self.index, "nothing left to draw, passing");
                ctl.pass_turn();
                return TurnOutcome::Exhausted;
            };
            let card = self.add_card(ctl, drawn);
            ctl.card_mut(card).set_callback(MoveListener::Participant(self.index));
            debug!(seat = self.index, card = %ctl.card(card).card(), "drew");
            return TurnOutcome::Drew(card);
        }

        let card = legal[rng.random_range(0..legal.len())];
        self.remove_card(ctl, card);
        ctl.move_to_target(card);
        ctl.card_mut(card).set_callback(MoveListener::Participant(self.index));
        debug!(seat = self.index, card = %ctl.card(card).card(), "played");
        TurnOutcome::Played(card)
    }

    /// A move this seat started has landed: hand the turn on.
    pub fn on_card_move_complete<C>(&self, ctl: &mut C, card: CardId)
    where
        C: GameController + ?Sized,
    {
        debug!(seat = self.index, %card, "move complete, passing turn");
        ctl.pass_turn();
    }
}
