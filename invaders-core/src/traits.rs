//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use crate::tone::ToneError;
use crate::types::Hsv;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    /// Hardware konnte nicht initialisiert werden
    InitFailed,
    WriteFailed,
}

/// Trait für einen adressierbaren LED-Strip (WS2812/Neopixel)
///
/// Pixel werden im Framebuffer gesetzt und erst mit `flush()`
/// an die Hardware übertragen. Indizes außerhalb des Strips werden ignoriert.
///
/// # Implementierungen
/// - **Production:** RmtLedStrip (ESP32 RMT Peripheral)
/// - **Testing:** MockStrip (in-memory Mock)
pub trait LedStrip {
    fn set_pixel(&mut self, index: usize, color: Hsv);

    fn clear_pixel(&mut self, index: usize);

    fn clear_all(&mut self);

    /// Überträgt den kompletten Framebuffer an die LEDs
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn flush(&mut self) -> Result<(), LedError>;
}

/// Millisekunden-Zeitquelle (läuft nach ~49 Tagen über, Vergleiche mit `wrapping_sub`)
pub trait Clock {
    fn now_ms(&self) -> u32;
}

/// Alles was der Game Core von der Hardware braucht
///
/// Alle Operationen blockieren: während ein Ton spielt wird
/// weder Taster noch Drehgeber vom Spiel ausgewertet.
pub trait Board {
    type Strip: LedStrip;

    fn strip(&mut self) -> &mut Self::Strip;

    /// Feuer-Taster gedrückt?
    fn fire_pressed(&mut self) -> bool;

    fn now_ms(&self) -> u32;

    fn delay_ms(&mut self, ms: u32);

    /// Spielt einen Rechteck-Ton und blockiert für die volle Dauer
    fn play_tone(&mut self, frequency_hz: f32, duration_ms: u32) -> Result<(), ToneError>;
}
