// Controller boundary seen by participants. A participant never touches the
// deck, the discard pile or the turn order directly; it goes through this
// trait so the same decision code runs against the real table or a test
// double. Implemented for the Bartok `Table`.

use crate::entity::{CardEntity, CardId};

/// Global turn phase, owned and written by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum TurnPhase {
    /// Before play starts; the initial deal runs in this phase.
    #[default]
    Idle,
    /// A participant is about to act.
    Pre,
    /// A decision or its animation is in flight.
    Waiting,
    GameOver,
}

pub trait GameController {
    // Phase
    fn phase(&self) -> TurnPhase;
    /// Ask the controller to enter `TurnPhase::Waiting`.
    fn begin_waiting(&mut self);

    // Layout
    fn fan_degrees(&self) -> f32;
    /// Controller clock in seconds, used to schedule moves.
    fn now(&self) -> f32;

    // Rules and piles
    fn is_valid_play(&self, card: CardId) -> bool;
    /// Take the top card of the draw pile, or `None` when no card is left anywhere.
    fn draw(&mut self) -> Option<CardId>;
    fn move_to_target(&mut self, card: CardId);

    // Turn handoff
    fn pass_turn(&mut self);

    // Card entities
    fn card(&self, id: CardId) -> &CardEntity;
    fn card_mut(&mut self, id: CardId) -> &mut CardEntity;
}
