//! Core lectern library (board model, config, logging, interrupts).

pub mod board;
pub mod card;
pub mod config;
pub mod interrupt;
pub mod logging;

pub use board::{Board, BoardChange};
pub use card::{Card, CardKind};
pub use config::Config;
