//! Invader-Queue
//!
//! Die Invader sitzen immer am Ende des Strips: bei `len` Invadern belegen
//! sie die Positionen `STRIP_LEN - len .. STRIP_LEN`. Jeder Vorstoß schiebt
//! alle Farben eine Position Richtung 0 und hängt hinten einen neuen Invader an.

use crate::types::{Hue, STRIP_LEN};

/// Queue ist voll (Invader stehen auf Position 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFull;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvaderQueue {
    slots: [Hue; STRIP_LEN],
    len: usize,
}

impl InvaderQueue {
    pub const fn new() -> Self {
        Self {
            slots: [Hue::RED; STRIP_LEN],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STRIP_LEN
    }

    /// Position des vordersten Invaders (`STRIP_LEN` wenn leer)
    pub fn front_position(&self) -> usize {
        STRIP_LEN - self.len
    }

    pub fn front(&self) -> Option<Hue> {
        (!self.is_empty()).then(|| self.slots[self.front_position()])
    }

    /// Farbe des Invaders an `position`, falls dort einer steht
    pub fn get(&self, position: usize) -> Option<Hue> {
        (self.front_position()..STRIP_LEN)
            .contains(&position)
            .then(|| self.slots[position])
    }

    /// Alle Invader vorrücken lassen und `hue` hinten anhängen
    pub fn advance(&mut self, hue: Hue) -> Result<(), QueueFull> {
        if self.is_full() {
            return Err(QueueFull);
        }
        self.len += 1;
        let front = self.front_position();
        self.slots.copy_within(front + 1.., front);
        self.slots[STRIP_LEN - 1] = hue;
        Ok(())
    }

    /// Vordersten Invader entfernen (Treffer)
    pub fn pop_front(&mut self) -> Option<Hue> {
        let hue = self.front()?;
        self.len -= 1;
        Some(hue)
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// `(Position, Farbe)` von vorne nach hinten
    pub fn iter(&self) -> impl Iterator<Item = (usize, Hue)> + '_ {
        let front = self.front_position();
        self.slots[front..]
            .iter()
            .enumerate()
            .map(move |(offset, &hue)| (front + offset, hue))
    }
}

impl Default for InvaderQueue {
    fn default() -> Self {
        Self::new()
    }
}
