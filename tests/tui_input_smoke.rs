use bartok_rs::config::GameConfig;
use bartok_rs::engine::TurnPhase;
use bartok_rs::tui::app::{AppState, InputAction, Scene};
use bartok_rs::tui::controller::handle_key;
use crossterm::event::KeyCode;
use std::time::Duration;

fn new_app() -> AppState {
    AppState::new(GameConfig::default().with_seed(17)).unwrap()
}

fn setup_table_app() -> AppState {
    let mut app = new_app();
    app.apply_menu();
    app
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = new_app();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
}

#[test]
fn help_toggles_on_table_only() {
    let mut app = new_app();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(!app.help_open());
    app.apply_menu();
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleMenu);
    assert!(!app.help_open());
    assert!(matches!(app.scene, Scene::Menu));
}

#[test]
fn keys_map_to_actions() {
    let mut app = new_app();
    assert!(!handle_key(&mut app, KeyCode::Enter));
    assert!(matches!(app.scene, Scene::Table));
    assert!(!handle_key(&mut app, KeyCode::Char(' ')));
    assert!(app.game.is_dealt());
    assert!(!handle_key(&mut app, KeyCode::Char('?')));
    assert!(app.help_open());
    // table keys are swallowed while help is open
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    assert!(!handle_key(&mut app, KeyCode::Esc));
    assert!(!app.help_open());
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}

#[test]
fn human_turn_through_inputs() {
    let mut app = setup_table_app();
    assert!(app.handle_input(InputAction::Deal));
    let mut acted = false;
    for _ in 0..2_000 {
        app.tick(Duration::from_millis(100));
        if app.can_act() {
            let valid = app.human_hand().iter().position(|&id| app.game.is_valid_play(id));
            match valid {
                Some(pos) => {
                    app.selected = pos;
                    assert!(app.handle_input(InputAction::Play));
                }
                None => {
                    let _ = app.handle_input(InputAction::Play);
                    assert!(app.action_error().is_some());
                    assert!(app.handle_input(InputAction::Draw));
                }
            }
            assert!(!app.can_act());
            acted = true;
            break;
        }
    }
    assert!(acted);
    assert_ne!(app.game.phase(), TurnPhase::GameOver);
}

#[test]
fn new_game_redeals_with_next_seed() {
    let mut app = setup_table_app();
    let seed = app.game.seed();
    assert!(app.handle_input(InputAction::NewGame));
    assert_eq!(app.game.seed(), seed + 1);
    assert!(app.game.is_dealt());
    assert_eq!(app.human_hand().len(), 7);
}
