//! Core Types für Color Invaders
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Anzahl der LEDs im Strip (= Kapazität der Invader-Queue)
pub const STRIP_LEN: usize = 30;

/// Umfang des Farbrads: 6 Sektoren à 256 Schritte
pub const HUE_WHEEL: u16 = 1536;

/// Sättigung/Helligkeit für Invader und geladene Missiles
pub const READY_SAT: u8 = 255;
pub const READY_VAL: u8 = 60;

/// Gedimmte Darstellung während das Missile lädt
pub const CHARGING_SAT: u8 = 125;
pub const CHARGING_VAL: u8 = 20;

/// Farbton auf dem 1536-Schritte-Farbrad
///
/// Werte außerhalb von `0..1536` werden beim Erzeugen umgebrochen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u16", into = "u16"))]
pub struct Hue(u16);

impl Hue {
    pub const RED: Hue = Hue(0);
    pub const MAGENTA: Hue = Hue(1280);
    pub const GREEN: Hue = Hue(555);
    pub const ORANGE: Hue = Hue(111);
    pub const BLUE: Hue = Hue(981);
    pub const CYAN: Hue = Hue(751);

    pub const fn new(raw: u16) -> Self {
        Self(raw % HUE_WHEEL)
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Dreht den Farbton um `step` weiter (mit Umbruch am Ende des Rads)
    pub const fn rotate(self, step: u16) -> Self {
        Self(((self.0 as u32 + step as u32) % HUE_WHEEL as u32) as u16)
    }
}

/// Rohwert wird beim Umwandeln (auch beim Deserialisieren) umgebrochen
impl From<u16> for Hue {
    fn from(raw: u16) -> Self {
        Hue::new(raw)
    }
}

impl From<Hue> for u16 {
    fn from(hue: Hue) -> Self {
        hue.0
    }
}

/// Die sechs festen Spielfarben, Index = Hue Index des Drehgebers
pub const PALETTE: [Hue; 6] = [
    Hue::RED,
    Hue::MAGENTA,
    Hue::GREEN,
    Hue::ORANGE,
    Hue::BLUE,
    Hue::CYAN,
];

/// HSV-Farbe wie sie an den LED-Strip übergeben wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub hue: Hue,
    pub sat: u8,
    pub val: u8,
}

impl Hsv {
    /// Volle Darstellung (Invader, geladenes oder fliegendes Missile)
    pub const fn ready(hue: Hue) -> Self {
        Self {
            hue,
            sat: READY_SAT,
            val: READY_VAL,
        }
    }

    /// Gedimmte Darstellung eines ladenden Missiles
    pub const fn charging(hue: Hue) -> Self {
        Self {
            hue,
            sat: CHARGING_SAT,
            val: CHARGING_VAL,
        }
    }
}

/// Fast weißer Blitz beim Treffer
pub const EXPLOSION_FLASH: Hsv = Hsv {
    hue: Hue::BLUE,
    sat: 1,
    val: 125,
};

/// Ereignisse eines Ticks (für Logging in der Firmware)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Neues Missile an Position 0
    MissileCreated { super_missile: bool },
    /// Missile abgefeuert
    Fired { color: Hue },
    /// Farbe passt: Invader zerstört
    Hit { position: usize, streak: u32 },
    /// Falsche Farbe: Missile weg, Streak zurückgesetzt
    Miss { position: usize },
    /// Missile ist ohne Invader über das Strip-Ende geflogen
    MissileLost,
    /// Invader sind eine Position vorgerückt
    InvadersAdvanced { invaders: usize },
    /// Invader haben Position 0 erreicht, Spiel neu gestartet
    GameOver { streak: u32 },
}

/// Spiel-Parameter
///
/// `Default` liefert die festen Werte des Spiels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Ladezeit eines normalen Missiles
    pub charge_ms: u32,
    /// Flugzeit pro Pixel
    pub missile_step_ms: u32,
    /// Start-Intervall zwischen zwei Invader-Vorstößen
    pub advance_interval_ms: u32,
    /// Verkürzung des Intervalls pro Treffer
    pub advance_decrement_ms: u32,
    /// Untergrenze für das Intervall
    pub min_advance_interval_ms: u32,
    /// Jeder n-te Treffer in Folge gibt ein Super-Missile
    pub super_streak: u32,
    /// Farbrad-Schritt pro Tick beim Super-Missile
    pub super_hue_step: u16,
    /// Sound ein/aus (ohne Sound gibt es feste Pausen)
    pub sound_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            charge_ms: 750,
            missile_step_ms: 25,
            advance_interval_ms: 3000,
            advance_decrement_ms: 100,
            min_advance_interval_ms: 250,
            super_streak: 10,
            super_hue_step: 15,
            sound_enabled: true,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Hue {
    fn format(&self, fmt: defmt::Formatter) {
        let name = match *self {
            Hue::RED => "Rot",
            Hue::MAGENTA => "Magenta",
            Hue::GREEN => "Grün",
            Hue::ORANGE => "Orange",
            Hue::BLUE => "Blau",
            Hue::CYAN => "Cyan",
            _ => "Regenbogen",
        };
        defmt::write!(fmt, "{} ({})", name, self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for GameEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            GameEvent::MissileCreated { super_missile } => {
                defmt::write!(fmt, "MissileCreated {{ super: {} }}", super_missile)
            }
            GameEvent::Fired { color } => defmt::write!(fmt, "Fired {{ color: {} }}", color),
            GameEvent::Hit { position, streak } => {
                defmt::write!(fmt, "Hit {{ position: {}, streak: {} }}", position, streak)
            }
            GameEvent::Miss { position } => defmt::write!(fmt, "Miss {{ position: {} }}", position),
            GameEvent::MissileLost => defmt::write!(fmt, "MissileLost"),
            GameEvent::InvadersAdvanced { invaders } => {
                defmt::write!(fmt, "InvadersAdvanced {{ invaders: {} }}", invaders)
            }
            GameEvent::GameOver { streak } => defmt::write!(fmt, "GameOver {{ streak: {} }}", streak),
        }
    }
}
