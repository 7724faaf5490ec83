// WS2812 LED Strip über das RMT Peripheral
//
// Der Game Core zeichnet in HSV, der Strip hält einen RGB-Framebuffer
// und schreibt ihn erst bei `flush()` auf die Datenleitung.

use esp_hal::Blocking;
use esp_hal::rmt::{PulseCode, Rmt};
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use invaders_core::{Hsv, LedError, LedStrip, hsv_to_rgb};
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::config::{LED_COUNT, RMT_BUFFER_SIZE};

/// Real Hardware LED Strip
///
/// Nutzt ESP32 RMT Peripheral um WS2812 LEDs anzusteuern.
///
/// Hinweis: Der Buffer muss länger leben als der Strip, daher wird er im Task
/// erstellt (`smart_led_buffer!`) und als Parameter übergeben.
pub struct RmtLedStrip<'a> {
    led: SmartLedsAdapter<'a, RMT_BUFFER_SIZE>,
    frame: [RGB8; LED_COUNT],
}

impl<'a> RmtLedStrip<'a> {
    /// Erstellt einen neuen RmtLedStrip
    ///
    /// # Parameter
    /// - `data_pin`: GPIO für die LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer! Macro)
    pub fn new(
        data_pin: esp_hal::peripherals::GPIO4<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut [PulseCode; RMT_BUFFER_SIZE],
    ) -> Result<Self, LedError> {
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| LedError::InitFailed)?;

        let led = SmartLedsAdapter::new(rmt.channel0, data_pin, buffer);

        Ok(Self {
            led,
            frame: [RGB8::default(); LED_COUNT],
        })
    }
}

impl LedStrip for RmtLedStrip<'_> {
    fn set_pixel(&mut self, index: usize, color: Hsv) {
        if let Some(px) = self.frame.get_mut(index) {
            *px = hsv_to_rgb(color);
        }
    }

    fn clear_pixel(&mut self, index: usize) {
        if let Some(px) = self.frame.get_mut(index) {
            *px = RGB8::default();
        }
    }

    fn clear_all(&mut self) {
        self.frame = [RGB8::default(); LED_COUNT];
    }

    fn flush(&mut self) -> Result<(), LedError> {
        self.led
            .write(self.frame.iter().copied())
            .map_err(|_| LedError::WriteFailed)
    }
}
