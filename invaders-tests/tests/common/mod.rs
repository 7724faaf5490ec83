//! Gemeinsame Mocks für die Host-Tests
//!
//! Simulierte Zeit: jede Pause und jeder Ton stellt die Uhr vor.

#![allow(dead_code)]

use std::collections::VecDeque;

use invaders_core::tone::half_period_us;
use invaders_core::{
    Board, Events, Game, GameConfig, GameEvent, Hsv, Hue, HueDial, LedError, LedStrip, PALETTE,
    STRIP_LEN, ToneError,
};

// ============================================================================
// Mock LED Strip
// ============================================================================

#[derive(Default)]
pub struct MockStrip {
    pub frame: [Option<Hsv>; STRIP_LEN],
    pub flush_count: usize,
    pub fail_next_flush: bool,
}

impl MockStrip {
    /// Leuchtende Pixel vor Position `end`
    pub fn lit_before(&self, end: usize) -> Vec<usize> {
        (0..end.min(STRIP_LEN))
            .filter(|&i| self.frame[i].is_some())
            .collect()
    }
}

impl LedStrip for MockStrip {
    fn set_pixel(&mut self, index: usize, color: Hsv) {
        if let Some(px) = self.frame.get_mut(index) {
            *px = Some(color);
        }
    }

    fn clear_pixel(&mut self, index: usize) {
        if let Some(px) = self.frame.get_mut(index) {
            *px = None;
        }
    }

    fn clear_all(&mut self) {
        self.frame = [None; STRIP_LEN];
    }

    fn flush(&mut self) -> Result<(), LedError> {
        if self.fail_next_flush {
            self.fail_next_flush = false;
            return Err(LedError::WriteFailed);
        }
        self.flush_count += 1;
        Ok(())
    }
}

// ============================================================================
// Mock Board
// ============================================================================

#[derive(Default)]
pub struct MockBoard {
    pub strip: MockStrip,
    pub now: u32,
    /// Pegel des Tasters pro Lesevorgang, danach "nicht gedrückt"
    pub button: VecDeque<bool>,
    pub tones: Vec<(f32, u32)>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Taster einmal drücken und loslassen
    pub fn press(&mut self) {
        self.button.extend([true, false]);
    }
}

impl Board for MockBoard {
    type Strip = MockStrip;

    fn strip(&mut self) -> &mut MockStrip {
        &mut self.strip
    }

    fn fire_pressed(&mut self) -> bool {
        self.button.pop_front().unwrap_or(false)
    }

    fn now_ms(&self) -> u32 {
        self.now
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now += ms;
    }

    fn play_tone(&mut self, frequency_hz: f32, duration_ms: u32) -> Result<(), ToneError> {
        half_period_us(frequency_hz)?;
        self.tones.push((frequency_hz, duration_ms));
        self.now += duration_ms;
        Ok(())
    }
}

// ============================================================================
// Helpers
// ============================================================================

pub fn quiet() -> GameConfig {
    GameConfig {
        sound_enabled: false,
        ..GameConfig::default()
    }
}

/// Drehgeber so lange drehen bis `hue` gewählt ist
pub fn aim_at(dial: &HueDial, hue: Hue) {
    for _ in 0..PALETTE.len() {
        if dial.hue() == hue {
            return;
        }
        dial.rotate(1);
    }
    panic!("hue {:?} not on the dial", hue);
}

/// Irgendeine Spielfarbe außer `hue`
pub fn other_than(hue: Hue) -> Hue {
    PALETTE.into_iter().find(|&h| h != hue).unwrap()
}

pub fn tick(game: &mut Game<'_>, board: &mut MockBoard, step_ms: u32) -> Events {
    board.now += step_ms;
    game.tick(board).unwrap()
}

/// Tickt bis ein passendes Event kommt
pub fn run_until(
    game: &mut Game<'_>,
    board: &mut MockBoard,
    step_ms: u32,
    max_ticks: usize,
    wanted: impl Fn(&GameEvent) -> bool,
) -> GameEvent {
    for _ in 0..max_ticks {
        let events = tick(game, board, step_ms);
        if let Some(event) = events.iter().find(|e| wanted(*e)) {
            return *event;
        }
    }
    panic!("event not reached after {} ticks", max_ticks);
}

/// Wartet bis ein geladenes Missile bereitsteht
pub fn wait_until_charged(game: &mut Game<'_>, board: &mut MockBoard) {
    let charge_ms = game.config().charge_ms;
    for _ in 0..10_000 {
        let ready = game
            .missile()
            .is_some_and(|m| !m.is_in_flight() && m.is_charged(board.now, charge_ms));
        if ready {
            return;
        }
        tick(game, board, 5);
    }
    panic!("missile never charged");
}

/// Wartet bis mindestens ein Invader auf dem Strip ist
pub fn wait_for_invader(game: &mut Game<'_>, board: &mut MockBoard) -> Hue {
    for _ in 0..10_000 {
        if let Some(front) = game.invaders().front() {
            return front;
        }
        tick(game, board, 20);
    }
    panic!("no invader appeared");
}

/// Zielen, feuern und bis zum Ende des Flugs ticken
pub fn shoot(game: &mut Game<'_>, board: &mut MockBoard, dial: &HueDial, color: Hue) -> GameEvent {
    wait_until_charged(game, board);
    aim_at(dial, color);
    board.press();
    run_until(game, board, 5, 10_000, |e| {
        matches!(
            e,
            GameEvent::Hit { .. } | GameEvent::Miss { .. } | GameEvent::MissileLost
        )
    })
}
