use bartok_rs::cards::Rank;
use bartok_rs::deck::Deck;
use bartok_rs::engine::{GameController, TurnPhase};
use bartok_rs::entity::{CardEntity, CardId, CardState};
use bartok_rs::geometry::{Pose, Vec3};
use bartok_rs::layout::HandLayout;
use bartok_rs::participant::{Participant, ParticipantKind, IN_MOTION_LAYER};
use proptest::prelude::*;

/// A full deck with no rules attached; enough to drive hand bookkeeping.
struct DeckTable {
    cards: Vec<CardEntity>,
    phase: TurnPhase,
}

impl DeckTable {
    fn new(phase: TurnPhase) -> Self {
        let cards = Deck::standard()
            .into_cards()
            .into_iter()
            .enumerate()
            .map(|(i, c)| CardEntity::new(CardId(i), c, Pose::default()))
            .collect();
        Self { cards, phase }
    }
}

impl GameController for DeckTable {
    fn phase(&self) -> TurnPhase {
        self.phase
    }
    fn begin_waiting(&mut self) {
        self.phase = TurnPhase::Waiting;
    }
    fn fan_degrees(&self) -> f32 {
        10.0
    }
    fn now(&self) -> f32 {
        0.0
    }
    fn is_valid_play(&self, _card: CardId) -> bool {
        false
    }
    fn draw(&mut self) -> Option<CardId> {
        None
    }
    fn move_to_target(&mut self, _card: CardId) {}
    fn pass_turn(&mut self) {}
    fn card(&self, id: CardId) -> &CardEntity {
        &self.cards[id.0]
    }
    fn card_mut(&mut self, id: CardId) -> &mut CardEntity {
        &mut self.cards[id.0]
    }
}

fn seat(kind: ParticipantKind) -> Participant {
    Participant::new(kind, 2, HandLayout::new(Vec3::new(0.0, 11.0, 0.0), 180.0, "Hand 2"))
}

fn ranks(p: &Participant, t: &DeckTable) -> Vec<Rank> {
    p.hand().iter().map(|&id| t.card(id).rank()).collect()
}

#[test]
fn added_card_travels_on_motion_layer_toward_hand_layer() {
    let mut t = DeckTable::new(TurnPhase::Pre);
    let mut p = seat(ParticipantKind::Automated);
    let id = p.add_card(&mut t, CardId(12));
    let c = t.card(id);
    assert_eq!(c.sorting_layer(), IN_MOTION_LAYER);
    assert_eq!(c.eventual_sort_layer(), "Hand 2");
    assert_eq!(c.state(), CardState::ToHand);
    assert!(!c.face_up());
}

#[test]
fn human_cards_face_up_automated_face_down() {
    let mut t = DeckTable::new(TurnPhase::Pre);
    let mut human = seat(ParticipantKind::Human);
    let mut bot = seat(ParticipantKind::Automated);
    human.add_card(&mut t, CardId(0));
    bot.add_card(&mut t, CardId(1));
    assert!(t.card(CardId(0)).face_up());
    assert!(!t.card(CardId(1)).face_up());
}

#[test]
fn equal_ranks_keep_arrival_order_in_human_hand() {
    let mut t = DeckTable::new(TurnPhase::Pre);
    let mut p = seat(ParticipantKind::Human);
    // find the four aces in deck order
    let aces: Vec<CardId> =
        t.cards.iter().filter(|c| c.rank() == Rank::Ace).map(CardEntity::id).collect();
    let king = t.cards.iter().find(|c| c.rank() == Rank::King).map(CardEntity::id).unwrap();
    p.add_card(&mut t, king);
    for &a in aces.iter().rev() {
        p.add_card(&mut t, a);
    }
    let expected: Vec<CardId> = aces.iter().rev().copied().chain([king]).collect();
    assert_eq!(p.hand(), expected.as_slice());
}

#[test]
fn fanning_empty_hand_touches_no_card() {
    let mut t = DeckTable::new(TurnPhase::Pre);
    let p = seat(ParticipantKind::Human);
    p.fan_hand(&mut t);
    for c in &t.cards {
        assert!(!c.is_moving(), "card {} was sent somewhere", c.id());
        assert_eq!(c.state(), CardState::DrawPile);
        assert_eq!(c.target_pose(), Pose::default());
        assert!(!c.face_up());
    }
}

#[test]
fn removing_last_card_leaves_empty_hand() {
    let mut t = DeckTable::new(TurnPhase::Pre);
    let mut p = seat(ParticipantKind::Automated);
    p.add_card(&mut t, CardId(3));
    assert_eq!(p.remove_card(&mut t, CardId(3)), CardId(3));
    assert!(p.is_empty());
}

proptest! {
    #[test]
    fn hand_tracks_adds_and_removes(
        human in any::<bool>(),
        ops in prop::collection::vec((any::<bool>(), 0usize..52), 0..80),
    ) {
        let kind = if human { ParticipantKind::Human } else { ParticipantKind::Automated };
        let mut t = DeckTable::new(TurnPhase::Pre);
        let mut p = seat(kind);
        let mut model: Vec<CardId> = Vec::new();
        for (add, i) in ops {
            let id = CardId(i);
            if add {
                if !model.contains(&id) {
                    p.add_card(&mut t, id);
                    model.push(id);
                }
            } else {
                p.remove_card(&mut t, id);
                model.retain(|&c| c != id);
            }
        }
        prop_assert_eq!(p.len(), model.len());
        for id in &model {
            prop_assert!(p.contains(*id));
        }
        let mut seen = p.hand().to_vec();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), p.len());
        if human {
            let r = ranks(&p, &t);
            prop_assert!(r.windows(2).all(|w| w[0] <= w[1]));
        }
        let orders: Vec<i32> =
            p.hand().iter().map(|&id| t.card(id).eventual_sort_order()).collect();
        let expected: Vec<i32> = (0..p.len() as i32).map(|i| i * 4).collect();
        prop_assert_eq!(orders, expected);
    }
}
