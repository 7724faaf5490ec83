// Zeitquelle für den Game Core

use embassy_time::Instant;
use invaders_core::Clock;

/// Millisekunden seit Boot aus dem embassy-time Treiber
///
/// Läuft nach ~49 Tagen über; der Game Core rechnet mit `wrapping_sub`.
#[derive(Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}
