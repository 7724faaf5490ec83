// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul verbindet die ESP32-C6 Peripherie mit den Traits aus
// invaders-core (LedStrip, Clock) und dem Drehgeber-Interrupt.

pub mod clock;
pub mod encoder;
pub mod led_strip;

pub use clock::EmbassyClock;
pub use encoder::{EncoderPins, install_encoder};
pub use led_strip::RmtLedStrip;
