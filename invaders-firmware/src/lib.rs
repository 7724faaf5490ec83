// Library-Root: Hardware-Anbindung und Tasks für Color Invaders
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von invaders-core
pub use invaders_core::{Game, GameConfig, GameEvent, HueDial, LedError};

/// Hue Index des Spielers
///
/// Einziger Zustand den Interrupt und Game Loop teilen: der Drehgeber-Interrupt
/// schreibt, der Game Loop liest einmal pro Tick.
pub static DIAL: HueDial = HueDial::new();
