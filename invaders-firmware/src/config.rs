// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Pins werden in main.rs direkt über `peripherals.GPIOx` vergeben,
// die Nummern hier dienen der Dokumentation und dem Boot-Log.

use invaders_core::{GameConfig, STRIP_LEN};

// ============================================================================
// LED Strip Konfiguration
// ============================================================================

/// GPIO-Pin für die Datenleitung des WS2812 Strips
pub const LED_GPIO_PIN: u8 = 4;

/// Anzahl der LEDs im Strip
pub const LED_COUNT: usize = STRIP_LEN;

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

/// RMT Buffer-Größe: 24 Bits pro LED + 1 Reset-Puls
pub const RMT_BUFFER_SIZE: usize = LED_COUNT * 24 + 1;

// ============================================================================
// Eingabe und Sound
// ============================================================================

/// GPIO-Pin für den Piezo-Buzzer
pub const BUZZER_GPIO_PIN: u8 = 5;

/// GPIO-Pin für den Feuer-Taster (high-aktiv, Pull-Down)
pub const FIRE_GPIO_PIN: u8 = 6;

/// Drehgeber Kanal A (Interrupt auf beide Flanken)
pub const ENCODER_A_GPIO_PIN: u8 = 2;

/// Drehgeber Kanal B (nur gelesen)
pub const ENCODER_B_GPIO_PIN: u8 = 3;

/// Sound an/aus; ohne Sound gibt es feste Pausen statt Explosion und Jingle
pub const SOUND_ENABLED: bool = true;

// ============================================================================
// Game Loop
// ============================================================================

/// Pause am Ende jedes Ticks
pub const TICK_PAUSE_MS: u64 = 1;

/// Spiel-Parameter für die Firmware
pub fn game_config() -> GameConfig {
    GameConfig {
        sound_enabled: SOUND_ENABLED,
        ..GameConfig::default()
    }
}

/// Pause zwischen zwei Durchläufen der Sound-Demo
pub const DEMO_REPEAT_PAUSE_SECS: u64 = 3;
