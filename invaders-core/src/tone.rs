//! Ton-Generator für einen Piezo-Buzzer
//!
//! Erzeugt ein blockierendes Rechtecksignal (50% Duty Cycle) per Bit-Banging
//! auf einem digitalen Ausgang.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::sounds::Note;

/// Höchste spielbare Frequenz (Halbperiode muss mindestens 1 µs sein)
pub const MAX_FREQUENCY_HZ: f32 = 500_000.0;

/// Fehler-Typ für Ton-Ausgabe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    /// Frequenz ist nicht endlich, <= 0 oder zu hoch
    InvalidFrequency,
    /// Ausgangs-Pin konnte nicht geschaltet werden
    Pin,
}

/// Halbperiode in Mikrosekunden: `1_000_000 / f / 2`
pub fn half_period_us(frequency_hz: f32) -> Result<u32, ToneError> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 || frequency_hz > MAX_FREQUENCY_HZ {
        return Err(ToneError::InvalidFrequency);
    }
    Ok((1_000_000.0 / frequency_hz / 2.0) as u32)
}

/// Anzahl voller Perioden bis die Dauer erreicht ist
///
/// Entspricht "Pin toggeln solange vergangene Zeit < Dauer":
/// die letzte angefangene Periode wird noch komplett gespielt.
pub fn cycle_count(half_period_us: u32, duration_ms: u32) -> u64 {
    let period_us = 2 * half_period_us as u64;
    (duration_ms as u64 * 1000).div_ceil(period_us)
}

/// Buzzer an einem digitalen Ausgang
pub struct ToneGenerator<P> {
    pin: P,
}

impl<P: OutputPin> ToneGenerator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Gibt den Pin wieder frei
    pub fn release(self) -> P {
        self.pin
    }

    /// Spielt `frequency_hz` für `duration_ms` und blockiert so lange
    ///
    /// Die Halbperiode wird einmal pro Aufruf berechnet.
    /// Ungültige Frequenzen werden abgelehnt bevor der Pin angefasst wird.
    pub fn play<D: DelayNs>(
        &mut self,
        delay: &mut D,
        frequency_hz: f32,
        duration_ms: u32,
    ) -> Result<(), ToneError> {
        let half = half_period_us(frequency_hz)?;

        for _ in 0..cycle_count(half, duration_ms) {
            self.pin.set_high().map_err(|_| ToneError::Pin)?;
            delay.delay_us(half);
            self.pin.set_low().map_err(|_| ToneError::Pin)?;
            delay.delay_us(half);
        }
        Ok(())
    }

    /// Spielt eine Note aus einer Sound-Tabelle (Pausen = stilles Warten)
    pub fn play_note<D: DelayNs>(&mut self, delay: &mut D, note: Note) -> Result<(), ToneError> {
        match note {
            Note::Tone { hz, ms } => self.play(delay, hz, ms),
            Note::Rest { ms } => {
                delay.delay_ms(ms);
                Ok(())
            }
        }
    }
}
