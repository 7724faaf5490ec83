//! Board aus embedded-hal Bausteinen
//!
//! Verbindet LED-Strip, Feuer-Taster, Buzzer, Delay und Zeitquelle
//! zu einem `Board` für den Game Core.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::tone::{ToneError, ToneGenerator};
use crate::traits::{Board, Clock, LedStrip};

pub struct HalBoard<S, B, P, D, C> {
    strip: S,
    button: B,
    buzzer: ToneGenerator<P>,
    delay: D,
    clock: C,
}

impl<S, B, P, D, C> HalBoard<S, B, P, D, C>
where
    S: LedStrip,
    B: InputPin,
    P: OutputPin,
    D: DelayNs,
    C: Clock,
{
    pub fn new(strip: S, button: B, buzzer: ToneGenerator<P>, delay: D, clock: C) -> Self {
        Self {
            strip,
            button,
            buzzer,
            delay,
            clock,
        }
    }
}

impl<S, B, P, D, C> Board for HalBoard<S, B, P, D, C>
where
    S: LedStrip,
    B: InputPin,
    P: OutputPin,
    D: DelayNs,
    C: Clock,
{
    type Strip = S;

    fn strip(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Taster ist high-aktiv; Lesefehler zählen als "nicht gedrückt"
    fn fire_pressed(&mut self) -> bool {
        self.button.is_high().unwrap_or(false)
    }

    fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn play_tone(&mut self, frequency_hz: f32, duration_ms: u32) -> Result<(), ToneError> {
        self.buzzer.play(&mut self.delay, frequency_hz, duration_ms)
    }
}
