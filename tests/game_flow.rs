use bartok_rs::config::GameConfig;
use bartok_rs::engine::TurnPhase;
use bartok_rs::game::{ActionError, Game};
use bartok_rs::logging::CaptureLayer;
use tracing::Level;

const MAX_STEPS: usize = 100_000;

fn watch_game(seed: u64) -> Game {
    let cfg = GameConfig::default().with_seed(seed).with_human_seat(None);
    let mut game = Game::new(cfg).unwrap();
    game.deal();
    game
}

fn cards_on_table(game: &Game) -> usize {
    let in_hands: usize = game.participants().iter().map(|p| p.len()).sum();
    in_hands + game.draw_pile_len() + game.discard_pile_len() + usize::from(game.target().is_some())
}

fn play_out(game: &mut Game) {
    for _ in 0..MAX_STEPS {
        if game.phase() == TurnPhase::GameOver {
            return;
        }
        game.update(0.1);
        assert_eq!(cards_on_table(game), 52);
    }
    panic!("game did not finish");
}

#[test]
fn automated_game_ends_with_empty_hand() {
    for seed in [1, 2, 3, 99] {
        let mut game = watch_game(seed);
        play_out(&mut game);
        let winner = game.winner().expect("winner");
        assert!(game.participants()[winner].is_empty());
        assert!(game.participants().iter().filter(|p| p.is_empty()).count() == 1);
    }
}

#[test]
fn same_seed_same_game() {
    let mut a = watch_game(42);
    let mut b = watch_game(42);
    play_out(&mut a);
    play_out(&mut b);
    assert_eq!(a.winner(), b.winner());
    assert_eq!(a.discard_pile_len(), b.discard_pile_len());
    let hand = |g: &Game, s: usize| -> Vec<String> {
        g.participants()[s].hand().iter().map(|&id| g.card(id).card().to_string()).collect()
    };
    for seat in 0..4 {
        assert_eq!(hand(&a, seat), hand(&b, seat));
    }
}

#[test]
fn two_player_game_finishes() {
    let cfg = GameConfig::default().with_seed(8).with_players(2).with_human_seat(None);
    let mut game = Game::new(cfg).unwrap();
    game.deal();
    play_out(&mut game);
    assert!(game.winner().is_some());
}

#[test]
fn human_seat_plays_through_api() {
    let cfg = GameConfig::default().with_seed(21).with_hand_size(5);
    let mut game = Game::new(cfg).unwrap();
    game.deal();
    for _ in 0..MAX_STEPS {
        if game.phase() == TurnPhase::GameOver {
            break;
        }
        if game.current() == Some(0) && game.phase() == TurnPhase::Pre {
            let me = &game.participants()[0];
            assert!(me.hand().iter().all(|&id| game.card(id).face_up()));
            let playable = me.hand().iter().copied().find(|&id| game.is_valid_play(id));
            match playable {
                Some(card) => {
                    game.human_play(card).unwrap();
                    assert_eq!(game.phase(), TurnPhase::Waiting);
                    assert_eq!(game.human_play(card), Err(ActionError::Waiting));
                    assert_eq!(game.target(), Some(card));
                }
                None => {
                    let unplayable = me.hand().first().copied();
                    if let Some(card) = unplayable {
                        assert!(matches!(
                            game.human_play(card),
                            Err(ActionError::InvalidPlay(_))
                        ));
                    }
                    game.human_draw().unwrap();
                }
            }
        }
        game.update(0.1);
    }
    assert_eq!(game.phase(), TurnPhase::GameOver);
    assert_eq!(game.human_draw(), Err(ActionError::GameOver));
}

#[test]
fn human_action_without_human_seat_is_rejected() {
    let mut game = watch_game(5);
    assert_eq!(game.human_draw(), Err(ActionError::NoHumanSeat));
}

#[test]
fn each_turn_passes_once() {
    let capture = CaptureLayer::new();
    tracing::subscriber::with_default(capture.subscriber(), || {
        let mut game = watch_game(13);
        play_out(&mut game);
    });
    let entries = capture.entries();
    let turns = entries.iter().filter(|e| e.message == "take turn").count();
    let passes = entries.iter().filter(|e| e.message == "turn passed").count();
    assert_eq!(turns, passes);
    let over: Vec<_> = entries.iter().filter(|e| e.message == "game over").collect();
    assert_eq!(over.len(), 1);
    assert_eq!(over[0].level, Level::INFO);
    assert!(over[0].fields.iter().any(|(k, _)| k == "winner"));
}
