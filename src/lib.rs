//! bartok-rs: participants for the Bartok card game.
//!
//! Each seat at the table is a [`participant::Participant`]. It owns its
//! hand, lays the hand out as a fan, and plays automatically when it is not
//! the human seat. Participants talk to the table through the
//! [`engine::GameController`] trait; [`game::Game`] is the Bartok table that
//! implements it and drives the turn loop.
//!
//! ## Quick start: play an all-automated game
//! ```
//! use bartok_rs::config::GameConfig;
//! use bartok_rs::engine::TurnPhase;
//! use bartok_rs::game::Game;
//!
//! let cfg = GameConfig::default().with_seed(7).with_human_seat(None);
//! let mut game = Game::new(cfg).unwrap();
//! game.deal();
//! while game.phase() != TurnPhase::GameOver {
//!     game.update(0.1);
//! }
//! let winner = game.winner().unwrap();
//! assert!(game.participants()[winner].is_empty());
//! ```
//!
//! ## TUI
//! Play against three automated seats with:
//! ```sh
//! cargo run --bin bartok-rs
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod entity;
pub mod game;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod participant;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
