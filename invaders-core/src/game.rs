//! Game Core: kompletter Spielzustand und Tick
//!
//! Der Tick läuft einmal pro Loop-Durchlauf. Reihenfolge ist wichtig:
//! spätere Schritte sehen die Änderungen der früheren.
//!
//! 1. Missile-Farbe aktualisieren (ladend oder Super-Missile)
//! 2. Zielfarbe vom Drehgeber übernehmen
//! 3. Neues Missile erzeugen falls keins existiert
//! 4. Abfeuern (Taster + geladen + noch nicht im Flug)
//! 5. Missile weiterbewegen
//! 6. Kontakt mit dem vordersten Invader prüfen
//! 7. Invader vorrücken lassen
//! 8. Game Over wenn Invader Position 0 erreichen
//! 9. Kontakt erneut prüfen (Schritt 7 kann den Invader auf das Missile schieben)
//! 10. Frame an den Strip senden

use heapless::Vec;

use crate::dial::HueDial;
use crate::invaders::InvaderQueue;
use crate::logic::random_hue;
use crate::missile::{Missile, MissileKind};
use crate::sounds::{self, Note};
use crate::tone::ToneError;
use crate::traits::{Board, LedError, LedStrip};
use crate::types::{
    EXPLOSION_FLASH, GameConfig, GameEvent, Hsv, Hue, READY_SAT, READY_VAL, STRIP_LEN,
};

/// Ereignisse eines Ticks
pub type Events = Vec<GameEvent, 8>;

/// Anzahl Pixel für das rote Game-Over-Glühen
const LOSE_GLOW_PIXELS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameError {
    Led(LedError),
    Tone(ToneError),
}

impl From<LedError> for GameError {
    fn from(e: LedError) -> Self {
        GameError::Led(e)
    }
}

impl From<ToneError> for GameError {
    fn from(e: ToneError) -> Self {
        GameError::Tone(e)
    }
}

/// Kompletter Spielzustand
///
/// Einziger Schreiber aller Spieldaten. Nur der Hue Index kommt von außen
/// (über den `HueDial`, geschrieben vom Drehgeber-Interrupt).
pub struct Game<'d> {
    config: GameConfig,
    dial: &'d HueDial,
    missile: Option<Missile>,
    invaders: InvaderQueue,
    streak: u32,
    advance_interval_ms: u32,
    last_advance_ms: u32,
    aim: Hue,
    charge_blips: u32,
    fire_blips: u32,
}

impl<'d> Game<'d> {
    pub fn new(dial: &'d HueDial, config: GameConfig) -> Self {
        Self {
            config,
            dial,
            missile: None,
            invaders: InvaderQueue::new(),
            streak: 0,
            advance_interval_ms: config.advance_interval_ms,
            last_advance_ms: 0,
            aim: dial.hue(),
            charge_blips: 0,
            fire_blips: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn missile(&self) -> Option<&Missile> {
        self.missile.as_ref()
    }

    pub fn invaders(&self) -> &InvaderQueue {
        &self.invaders
    }

    /// Treffer in Folge
    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn invader_count(&self) -> usize {
        self.invaders.len()
    }

    pub fn advance_interval_ms(&self) -> u32 {
        self.advance_interval_ms
    }

    /// Zuletzt gelesene Zielfarbe des Spielers
    pub fn aim(&self) -> Hue {
        self.aim
    }

    /// Startaufstellung: ladendes Missile auf 0, ein Invader am Ende
    pub fn start<B: Board>(&mut self, board: &mut B) -> Result<(), GameError> {
        let now = board.now_ms();
        self.aim = self.dial.hue();

        self.missile = Some(Missile::charging(now));
        self.charge_blips = 0;
        self.fire_blips = 0;
        board.strip().set_pixel(0, Hsv::charging(self.aim));

        let hue = random_hue(now);
        self.invaders.clear();
        if self.invaders.advance(hue).is_ok() {
            board.strip().set_pixel(STRIP_LEN - 1, Hsv::ready(hue));
        }
        self.last_advance_ms = now;

        board.strip().flush()?;
        Ok(())
    }

    /// Ein Durchlauf der Spiel-Logik
    pub fn tick<B: Board>(&mut self, board: &mut B) -> Result<Events, GameError> {
        let mut events = Events::new();

        // Schritt 1 liest die Zielfarbe; während des Flugs wird sie nur
        // gemerkt, damit der Spieler schon für den nächsten Invader zielen kann
        self.aim = self.dial.hue();

        if self
            .missile
            .is_some_and(|m| !m.is_in_flight() || m.is_super())
        {
            self.refresh_missile(board)?;
        }

        if self.missile.is_none() {
            self.spawn_missile(board, &mut events)?;
        }

        if self.ready_to_fire(board) {
            self.fire(board, &mut events)?;
        }

        let now = board.now_ms();
        if self
            .missile
            .is_some_and(|m| m.due_to_move(now, self.config.missile_step_ms))
        {
            self.move_missile(board)?;
        }

        self.check_contact(board, &mut events)?;

        if board.now_ms().wrapping_sub(self.last_advance_ms) >= self.advance_interval_ms {
            self.advance_invaders(board, &mut events);
        }

        if self.invaders.is_full() {
            self.game_over(board, &mut events)?;
        }

        self.check_contact(board, &mut events)?;

        board.strip().flush()?;
        Ok(events)
    }

    // ========================================================================
    // Missile
    // ========================================================================

    fn refresh_missile<B: Board>(&mut self, board: &mut B) -> Result<(), GameError> {
        let now = board.now_ms();
        let Some(missile) = self.missile.as_mut() else {
            return Ok(());
        };
        let position = missile.position;

        match missile.kind {
            MissileKind::Super { hue } => {
                let next = hue.rotate(self.config.super_hue_step);
                missile.kind = MissileKind::Super { hue: next };
                board.strip().set_pixel(position, Hsv::ready(next));
            }
            MissileKind::Normal if missile.is_charged(now, self.config.charge_ms) => {
                board.strip().set_pixel(position, Hsv::ready(self.aim));
            }
            MissileKind::Normal => {
                if self.config.sound_enabled {
                    if let Some(note) = sounds::charge_blip(self.charge_blips) {
                        sounds::play(board, [note])?;
                        self.charge_blips += 1;
                    }
                }
                board.strip().set_pixel(position, Hsv::charging(self.aim));
            }
        }
        Ok(())
    }

    fn spawn_missile<B: Board>(
        &mut self,
        board: &mut B,
        events: &mut Events,
    ) -> Result<(), GameError> {
        let super_due = self.config.super_streak != 0
            && self.streak != 0
            && self.streak % self.config.super_streak == 0;

        if super_due {
            self.missile = Some(Missile::super_charged(self.aim));
            board.strip().set_pixel(0, Hsv::ready(self.aim));
            self.sound(board, SoundCue::Notes(&sounds::SUPER_READY))?;
        } else {
            self.missile = Some(Missile::charging(board.now_ms()));
            board.strip().set_pixel(0, Hsv::charging(self.aim));
            self.charge_blips = 0;
            self.fire_blips = 0;
        }

        events
            .push(GameEvent::MissileCreated {
                super_missile: super_due,
            })
            .ok();
        Ok(())
    }

    fn ready_to_fire<B: Board>(&self, board: &mut B) -> bool {
        let now = board.now_ms();
        let ready = self
            .missile
            .is_some_and(|m| !m.is_in_flight() && m.is_charged(now, self.config.charge_ms));
        ready && board.fire_pressed()
    }

    fn fire<B: Board>(&mut self, board: &mut B, events: &mut Events) -> Result<(), GameError> {
        // Entprellen: warten bis der Taster wieder losgelassen ist
        while board.fire_pressed() {}
        board.delay_ms(1);

        // Farbe erst nach dem Loslassen lesen, wie beim Zielen gedreht wurde
        self.aim = self.dial.hue();
        let now = board.now_ms();
        let Some(missile) = self.missile.as_mut() else {
            return Ok(());
        };
        missile.launch(self.aim, now);
        let position = missile.position;
        let color = missile.flight_color().unwrap_or(self.aim);

        let strip = board.strip();
        strip.set_pixel(position, Hsv::ready(color));
        strip.clear_pixel(position - 1);
        strip.flush()?;
        board.delay_ms(1);

        self.fire_blip(board)?;
        events.push(GameEvent::Fired { color }).ok();
        Ok(())
    }

    fn move_missile<B: Board>(&mut self, board: &mut B) -> Result<(), GameError> {
        let now = board.now_ms();
        let Some(missile) = self.missile.as_mut() else {
            return Ok(());
        };
        missile.step(now);
        let position = missile.position;
        let color = missile.flight_color().unwrap_or(self.aim);

        let strip = board.strip();
        strip.set_pixel(position, Hsv::ready(color));
        strip.clear_pixel(position - 1);

        self.fire_blip(board)
    }

    fn fire_blip<B: Board>(&mut self, board: &mut B) -> Result<(), GameError> {
        if self.config.sound_enabled {
            if let Some(note) = sounds::fire_blip(self.fire_blips) {
                sounds::play(board, [note])?;
                self.fire_blips += 1;
            }
        }
        Ok(())
    }

    // ========================================================================
    // Kontakt
    // ========================================================================

    fn check_contact<B: Board>(
        &mut self,
        board: &mut B,
        events: &mut Events,
    ) -> Result<(), GameError> {
        let Some(missile) = self.missile else {
            return Ok(());
        };
        if !missile.is_in_flight() {
            return Ok(());
        }
        let position = missile.position;

        match self.invaders.front() {
            Some(front) if position >= self.invaders.front_position() => {
                if missile.is_super() || missile.flight_color() == Some(front) {
                    self.explode(board, position, events)
                } else {
                    self.miss(board, front, events)
                }
            }
            None if position >= STRIP_LEN => self.lose_missile(board, events),
            _ => Ok(()),
        }
    }

    fn explode<B: Board>(
        &mut self,
        board: &mut B,
        position: usize,
        events: &mut Events,
    ) -> Result<(), GameError> {
        self.missile = None;
        self.invaders.pop_front();
        self.streak += 1;
        self.advance_interval_ms = self
            .advance_interval_ms
            .saturating_sub(self.config.advance_decrement_ms)
            .max(self.config.min_advance_interval_ms);

        // Sequenz läuft auch bei Fehlern zu Ende, gemeldet wird der erste
        let mut outcome = Ok(());
        board.strip().set_pixel(position, EXPLOSION_FLASH);
        keep_first(&mut outcome, board.strip().flush());
        keep_first(&mut outcome, self.sound(board, SoundCue::Explosion));

        self.last_advance_ms = board.now_ms();
        board.strip().clear_pixel(position);
        keep_first(&mut outcome, board.strip().flush());
        board.delay_ms(1);

        events
            .push(GameEvent::Hit {
                position,
                streak: self.streak,
            })
            .ok();
        outcome
    }

    fn miss<B: Board>(
        &mut self,
        board: &mut B,
        front: Hue,
        events: &mut Events,
    ) -> Result<(), GameError> {
        let position = self.invaders.front_position();
        self.missile = None;
        self.streak = 0;

        board.strip().set_pixel(position, Hsv::ready(front));
        board.strip().flush()?;

        events.push(GameEvent::Miss { position }).ok();
        Ok(())
    }

    /// Missile ist über das Strip-Ende hinaus geflogen ohne Invader zu treffen
    fn lose_missile<B: Board>(
        &mut self,
        board: &mut B,
        events: &mut Events,
    ) -> Result<(), GameError> {
        self.missile = None;
        self.streak = 0;

        board.strip().clear_all();
        board.strip().flush()?;

        events.push(GameEvent::MissileLost).ok();
        Ok(())
    }

    // ========================================================================
    // Invader
    // ========================================================================

    fn advance_invaders<B: Board>(&mut self, board: &mut B, events: &mut Events) {
        let now = board.now_ms();
        if self.invaders.advance(random_hue(now)).is_ok() {
            let strip = board.strip();
            for (position, hue) in self.invaders.iter() {
                strip.set_pixel(position, Hsv::ready(hue));
            }
        }
        self.last_advance_ms = now;

        events
            .push(GameEvent::InvadersAdvanced {
                invaders: self.invaders.len(),
            })
            .ok();
    }

    fn game_over<B: Board>(&mut self, board: &mut B, events: &mut Events) -> Result<(), GameError> {
        let streak = self.streak;

        self.missile = None;
        self.streak = 0;
        self.invaders.clear();
        self.advance_interval_ms = self.config.advance_interval_ms;
        self.charge_blips = 0;
        self.fire_blips = 0;

        // Rotes Glühen, nach hinten schwächer
        let strip = board.strip();
        strip.clear_all();
        for position in 0..LOSE_GLOW_PIXELS {
            strip.set_pixel(
                position,
                Hsv {
                    hue: Hue::RED,
                    sat: READY_SAT,
                    val: READY_VAL.saturating_sub(position as u8 * 5),
                },
            );
        }
        // Neustart auch wenn ein Frame oder Ton fehlschlägt
        let mut outcome = Ok(());
        keep_first(&mut outcome, strip.flush());
        keep_first(&mut outcome, self.sound(board, SoundCue::Lose));

        board.strip().clear_all();
        keep_first(&mut outcome, board.strip().flush());

        keep_first(&mut outcome, self.start(board));

        events.push(GameEvent::GameOver { streak }).ok();
        outcome
    }

    // ========================================================================
    // Sound
    // ========================================================================

    /// Spielt einen Sound; ohne Sound gibt es bei Explosion und Game Over
    /// stattdessen eine feste Pause
    fn sound<B: Board>(&self, board: &mut B, cue: SoundCue) -> Result<(), ToneError> {
        if !self.config.sound_enabled {
            match cue {
                SoundCue::Notes(_) => {}
                SoundCue::Explosion | SoundCue::Lose => board.delay_ms(sounds::SILENT_PAUSE_MS),
            }
            return Ok(());
        }

        match cue {
            SoundCue::Notes(notes) => sounds::play(board, notes.iter().copied()),
            SoundCue::Explosion => {
                sounds::play(board, sounds::EXPLOSION_BURST)?;
                board.delay_ms(sounds::EXPLOSION_TAIL_MS);
                Ok(())
            }
            SoundCue::Lose => {
                board.delay_ms(sounds::LOSE_PAUSE_MS);
                sounds::play(board, sounds::LOSE_PHRASES)?;
                board.delay_ms(sounds::LOSE_PAUSE_MS);
                Ok(())
            }
        }
    }
}

/// Merkt sich den ersten Fehler einer Sequenz
fn keep_first<E: Into<GameError>>(outcome: &mut Result<(), GameError>, result: Result<(), E>) {
    if let Err(e) = result {
        if outcome.is_ok() {
            *outcome = Err(e.into());
        }
    }
}

#[derive(Clone, Copy)]
enum SoundCue {
    Notes(&'static [Note]),
    Explosion,
    Lose,
}
