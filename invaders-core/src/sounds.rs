//! Sound-Effekte als Noten-Tabellen
//!
//! Frequenzen in Hz, Dauer in Millisekunden.

use crate::tone::ToneError;
use crate::traits::Board;

/// Ein Eintrag einer Sound-Tabelle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Note {
    Tone { hz: f32, ms: u32 },
    Rest { ms: u32 },
}

const fn tone(hz: f32, ms: u32) -> Note {
    Note::Tone { hz, ms }
}

const fn rest(ms: u32) -> Note {
    Note::Rest { ms }
}

/// Maximale Anzahl Lade-Töne pro Missile
pub const CHARGE_BLIPS: u32 = 100;

/// Maximale Anzahl Flug-Töne pro Missile
pub const FIRE_BLIPS: u32 = 10;

/// Fallback-Pause wenn Sound aus ist (Explosion und Game Over)
pub const SILENT_PAUSE_MS: u32 = 1000;

/// Aufsteigender Dreiklang E5-G5-C6 wenn ein Super-Missile bereit ist
pub const SUPER_READY: [Note; 3] = [tone(659.255, 75), tone(783.991, 75), tone(1046.5, 75)];

/// 18 Töne "Rauschen" beim Treffer (9 Frequenzen, zweimal)
pub const EXPLOSION_BURST: [Note; 18] = [
    tone(550.0, 40),
    tone(404.0, 40),
    tone(315.0, 40),
    tone(494.0, 40),
    tone(182.0, 40),
    tone(260.0, 40),
    tone(455.0, 40),
    tone(387.0, 40),
    tone(340.0, 40),
    tone(550.0, 40),
    tone(404.0, 40),
    tone(315.0, 40),
    tone(494.0, 40),
    tone(182.0, 40),
    tone(260.0, 40),
    tone(455.0, 40),
    tone(387.0, 40),
    tone(340.0, 40),
];

/// Nachklang nach der Explosion
pub const EXPLOSION_TAIL_MS: u32 = 250;

/// "Wah wah wah wahwahwah": vier Phrasen, jede einen Halbton tiefer
pub const LOSE_PHRASES: [Note; 25] = [
    // A4 → A#4
    tone(440.0, 50),
    tone(466.164, 100),
    rest(80),
    // Ab4 → A4
    tone(415.305, 50),
    tone(420.244, 50),
    tone(440.0, 100),
    rest(80),
    // G4 → Ab4
    tone(391.995, 50),
    tone(396.657, 50),
    tone(415.305, 100),
    rest(80),
    // G4/Ab4 Triller
    tone(391.995, 70),
    tone(415.305, 70),
    tone(391.995, 70),
    tone(415.305, 70),
    tone(391.995, 70),
    tone(415.305, 70),
    tone(391.995, 70),
    tone(415.305, 70),
    tone(391.995, 70),
    tone(415.305, 70),
    tone(391.995, 70),
    tone(415.305, 70),
    tone(391.995, 70),
    tone(415.305, 70),
];

/// Stille vor und nach den Game-Over-Phrasen
pub const LOSE_PAUSE_MS: u32 = 400;

/// Lade-Ton Nummer `n`: steigt um 8 Hz pro Tick, nach 100 Tönen ist Ruhe
pub fn charge_blip(n: u32) -> Option<Note> {
    (n < CHARGE_BLIPS).then(|| tone(300.0 + (n * 8) as f32, 10))
}

/// Flug-Ton Nummer `n`: fällt um 20 Hz pro Schritt, nach 10 Tönen ist Ruhe
pub fn fire_blip(n: u32) -> Option<Note> {
    (n < FIRE_BLIPS).then(|| tone(800.0 - (n * 20) as f32, 15))
}

/// Komplette Sequenz der Sound-Demo (ohne Spiel)
///
/// Laden, Abfeuern, Explosion und Game-Over-Jingle hintereinander.
pub fn demo_sequence() -> impl Iterator<Item = Note> {
    let charging = (0..50u32).map(|n| tone(300.251 + (n * 15) as f32, 15));
    let firing = (0..20u32).map(|n| tone(800.251 - (n * 15) as f32, 10));

    charging
        .chain(core::iter::once(rest(500)))
        .chain(firing)
        .chain(core::iter::once(rest(1000)))
        .chain(EXPLOSION_BURST)
        .chain(LOSE_PHRASES)
}

/// Spielt eine Noten-Folge auf dem Board ab (blockierend)
pub fn play<B: Board>(board: &mut B, notes: impl IntoIterator<Item = Note>) -> Result<(), ToneError> {
    for note in notes {
        match note {
            Note::Tone { hz, ms } => board.play_tone(hz, ms)?,
            Note::Rest { ms } => board.delay_ms(ms),
        }
    }
    Ok(())
}
