//! Hue Index des Drehgebers
//!
//! Wird aus dem GPIO-Interrupt geschrieben und vom Spiel-Loop gelesen.
//! Ein einzelnes `AtomicU8` reicht: es gibt genau einen Schreiber (den Interrupt).

use core::sync::atomic::{AtomicU8, Ordering};

use crate::types::{Hue, PALETTE};

const LAST_INDEX: u8 = PALETTE.len() as u8 - 1;

/// Aktuell gewählte Spielfarbe (Index 0..=5)
pub struct HueDial {
    index: AtomicU8,
}

impl HueDial {
    pub const fn new() -> Self {
        Self {
            index: AtomicU8::new(0),
        }
    }

    /// Einen Rastschritt drehen: positiv = +1, negativ = -1, 0 = nichts
    ///
    /// O(1) und nicht blockierend, darf aus dem Interrupt aufgerufen werden.
    pub fn rotate(&self, direction: i8) {
        let current = self.index.load(Ordering::Relaxed);
        let next = match direction.signum() {
            1 if current >= LAST_INDEX => 0,
            1 => current + 1,
            -1 if current == 0 || current > LAST_INDEX => LAST_INDEX,
            -1 => current - 1,
            _ => return,
        };
        self.index.store(next, Ordering::Relaxed);
    }

    pub fn index(&self) -> u8 {
        self.index.load(Ordering::Relaxed).min(LAST_INDEX)
    }

    pub fn hue(&self) -> Hue {
        PALETTE[self.index() as usize]
    }
}

impl Default for HueDial {
    fn default() -> Self {
        Self::new()
    }
}

/// Dekodiert einen Quadratur-Schritt bei einer Flanke auf Kanal A
///
/// Gleicher Pegel auf A und B = im Uhrzeigersinn (+1), sonst -1.
pub fn quadrature_step(a_high: bool, b_high: bool) -> i8 {
    if a_high == b_high { 1 } else { -1 }
}
