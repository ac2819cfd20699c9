//! Movable card entities.
//!
//! A `CardEntity` is one physical card on the table. It owns its animation:
//! callers request a move with [`CardEntity::move_to`], the host loop calls
//! [`CardEntity::tick`] with the current clock, and the tick that lands the
//! card returns a [`MoveComplete`] event for whoever registered as listener.

use crate::cards::{Card, Rank, Suit};
use crate::geometry::Pose;
use std::fmt;

/// Default duration of one move, in seconds.
pub const MOVE_DURATION: f32 = 0.5;

/// Index of a card entity in the table's card store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(pub usize);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a card is, or where it is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardState {
    DrawPile,
    ToHand,
    Hand,
    ToTarget,
    Target,
    Discard,
    To,
    Idle,
}

impl CardState {
    /// The resting state a card in motion enters when its move lands.
    pub fn arrived(self) -> CardState {
        match self {
            CardState::ToHand => CardState::Hand,
            CardState::ToTarget => CardState::Target,
            CardState::To => CardState::Idle,
            other => other,
        }
    }
}

/// Who is told when a card's move lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveListener {
    Participant(usize),
    Table,
}

/// Emitted exactly once per registered listener when the card lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveComplete {
    pub card: CardId,
    pub listener: MoveListener,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    from: Pose,
    to: Pose,
    start: f32,
}

#[derive(Debug, Clone)]
pub struct CardEntity {
    id: CardId,
    card: Card,
    state: CardState,
    pose: Pose,
    motion: Option<Motion>,
    time_start: Option<f32>,
    duration: f32,
    face_up: bool,
    sort_order: i32,
    sorting_layer: String,
    eventual_sort_order: i32,
    eventual_sort_layer: String,
    callback: Option<MoveListener>,
}

impl CardEntity {
    pub fn new(id: CardId, card: Card, pose: Pose) -> Self {
        Self {
            id,
            card,
            state: CardState::DrawPile,
            pose,
            motion: None,
            time_start: None,
            duration: MOVE_DURATION,
            face_up: false,
            sort_order: 0,
            sorting_layer: String::from("Draw"),
            eventual_sort_order: 0,
            eventual_sort_layer: String::from("Draw"),
            callback: None,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn rank(&self) -> Rank {
        self.card.rank()
    }
    pub fn suit(&self) -> Suit {
        self.card.suit()
    }
    pub fn state(&self) -> CardState {
        self.state
    }
    pub fn pose(&self) -> Pose {
        self.pose
    }
    pub fn face_up(&self) -> bool {
        self.face_up
    }
    pub fn sort_order(&self) -> i32 {
        self.sort_order
    }
    pub fn sorting_layer(&self) -> &str {
        &self.sorting_layer
    }
    pub fn eventual_sort_order(&self) -> i32 {
        self.eventual_sort_order
    }
    pub fn eventual_sort_layer(&self) -> &str {
        &self.eventual_sort_layer
    }
    pub fn callback(&self) -> Option<MoveListener> {
        self.callback
    }
    pub fn time_start(&self) -> Option<f32> {
        self.time_start
    }

    /// Pose the card is heading to, or its resting pose when still.
    pub fn target_pose(&self) -> Pose {
        self.motion.map(|m| m.to).unwrap_or(self.pose)
    }

    pub fn is_moving(&self) -> bool {
        self.motion.is_some()
    }

    pub fn set_state(&mut self, state: CardState) {
        self.state = state;
    }
    pub fn set_face_up(&mut self, face_up: bool) {
        self.face_up = face_up;
    }
    pub fn set_sort_order(&mut self, order: i32) {
        self.sort_order = order;
    }
    pub fn set_sorting_layer(&mut self, layer: &str) {
        layer.clone_into(&mut self.sorting_layer);
    }
    pub fn set_eventual_sort_order(&mut self, order: i32) {
        self.eventual_sort_order = order;
    }
    pub fn set_eventual_sort_layer(&mut self, layer: &str) {
        layer.clone_into(&mut self.eventual_sort_layer);
    }
    pub fn set_callback(&mut self, listener: MoveListener) {
        self.callback = Some(listener);
    }
    pub fn set_move_duration(&mut self, seconds: f32) {
        self.duration = seconds;
    }

    /// Schedule the next move to begin no earlier than `at`.
    pub fn set_time_start(&mut self, at: f32) {
        self.time_start = Some(at);
    }

    /// Place the card without animating.
    pub fn place(&mut self, pose: Pose) {
        self.pose = pose;
        self.motion = None;
    }

    /// Begin an eased move from the current pose to `to`.
    ///
    /// With `immediate` the move ignores any scheduled start and begins at
    /// `now`. Re-issuing a move mid-flight restarts from where the card is.
    pub fn move_to(&mut self, to: Pose, now: f32, immediate: bool) {
        if immediate {
            self.time_start = None;
        }
        let start = self.time_start.map_or(now, |t| t.max(now));
        self.motion = Some(Motion { from: self.pose, to, start });
        self.state = CardState::To;
    }

    /// Advance the animation to `now`.
    pub fn tick(&mut self, now: f32) -> Option<MoveComplete> {
        let motion = self.motion?;
        if now < motion.start {
            return None;
        }
        let u = if self.duration > 0.0 { (now - motion.start) / self.duration } else { 1.0 };
        if u < 1.0 {
            self.pose = motion.from.lerp(motion.to, ease_in_out(u));
            return None;
        }
        self.pose = motion.to;
        self.motion = None;
        self.time_start = None;
        self.state = self.state.arrived();
        self.sort_order = self.eventual_sort_order;
        self.sorting_layer.clone_from(&self.eventual_sort_layer);
        self.callback.take().map(|listener| MoveComplete { card: self.id, listener })
    }
}

fn ease_in_out(u: f32) -> f32 {
    let u = u.clamp(0.0, 1.0);
    u * u * (3.0 - 2.0 * u)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    fn mk() -> CardEntity {
        CardEntity::new(CardId(3), Card::new(Rank::Seven, Suit::Clubs), Pose::default())
    }

    #[test]
    fn move_lands_after_duration() {
        let mut c = mk();
        let to = Pose::new(Vec3::new(4.0, 2.0, 0.0), 30.0);
        c.move_to(to, 0.0, true);
        c.set_state(CardState::ToHand);
        assert!(c.tick(0.25).is_none());
        assert!(c.is_moving());
        assert_ne!(c.pose(), to);
        assert!(c.tick(MOVE_DURATION).is_none(), "no listener registered");
        assert_eq!(c.pose(), to);
        assert_eq!(c.state(), CardState::Hand);
        assert!(!c.is_moving());
    }

    #[test]
    fn listener_fires_exactly_once() {
        let mut c = mk();
        c.move_to(Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0), 0.0, true);
        c.set_callback(MoveListener::Participant(2));
        let ev = c.tick(1.0).unwrap();
        assert_eq!(ev, MoveComplete { card: CardId(3), listener: MoveListener::Participant(2) });
        assert!(c.callback().is_none());
        assert!(c.tick(2.0).is_none());
    }

    #[test]
    fn reissued_move_keeps_listener_until_final_arrival() {
        let mut c = mk();
        c.move_to(Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0), 0.0, true);
        c.set_callback(MoveListener::Table);
        assert!(c.tick(0.2).is_none());
        let dest = Pose::new(Vec3::new(-3.0, 1.0, 0.0), 5.0);
        c.move_to(dest, 0.2, true);
        assert!(c.tick(0.6).is_none(), "restarted move has not landed yet");
        let ev = c.tick(0.8).unwrap();
        assert_eq!(ev.listener, MoveListener::Table);
        assert_eq!(c.pose(), dest);
    }

    #[test]
    fn scheduled_start_delays_move_unless_immediate() {
        let mut c = mk();
        c.set_time_start(1.0);
        c.move_to(Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0), 0.0, false);
        c.tick(0.9);
        assert_eq!(c.pose(), Pose::default());
        c.tick(1.5);
        assert!(!c.is_moving());

        let mut d = mk();
        d.set_time_start(1.0);
        d.move_to(Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0), 0.0, true);
        assert!(d.time_start().is_none());
        d.tick(0.5);
        assert!(!d.is_moving());
    }

    #[test]
    fn landing_applies_eventual_sorting() {
        let mut c = mk();
        c.set_sorting_layer("10");
        c.set_eventual_sort_layer("Hand 1");
        c.set_eventual_sort_order(8);
        c.move_to(Pose::default(), 0.0, true);
        assert_eq!(c.sorting_layer(), "10");
        c.tick(1.0);
        assert_eq!(c.sorting_layer(), "Hand 1");
        assert_eq!(c.sort_order(), 8);
    }
}
