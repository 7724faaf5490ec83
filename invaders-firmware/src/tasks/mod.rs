// Task-Modul: Enthält die Embassy Tasks
//
// Der Game Task läuft allein; der Drehgeber kommt über den GPIO-Interrupt.

pub mod game;

// Re-export Tasks für einfachen Import
pub use game::{game_logic, game_task};
