//! Invaders Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Spielzustand und Pure Functions.
//! Pins und Delays kommen über embedded-hal.

#![no_std]

pub mod board;
pub mod dial;
pub mod game;
pub mod invaders;
pub mod logic;
pub mod missile;
pub mod sounds;
pub mod tone;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use board::HalBoard;
pub use dial::{HueDial, quadrature_step};
pub use game::{Events, Game, GameError};
pub use invaders::{InvaderQueue, QueueFull};
pub use logic::{hsv_to_rgb, random_hue};
pub use missile::{Missile, MissileKind, MissileState};
pub use sounds::Note;
pub use tone::{ToneError, ToneGenerator};
pub use traits::{Board, Clock, LedError, LedStrip};
pub use types::{GameConfig, GameEvent, Hsv, Hue, PALETTE, STRIP_LEN};
