// Drehgeber (Quadratur-Encoder) per GPIO-Interrupt
//
// Kanal A löst auf beiden Flanken aus, Kanal B gibt die Richtung.
// Der Interrupt schreibt nur in den `HueDial`, alles andere macht der Game Loop.

use core::cell::RefCell;

use critical_section::Mutex;
use esp_hal::gpio::{Event, Input, Io};
use esp_hal::handler;
use invaders_core::quadrature_step;

use crate::DIAL;

/// Beide Encoder-Kanäle
pub struct EncoderPins {
    pub a: Input<'static>,
    pub b: Input<'static>,
}

/// Pins für den Interrupt-Handler
static ENCODER: Mutex<RefCell<Option<EncoderPins>>> = Mutex::new(RefCell::new(None));

/// Registriert den GPIO-Interrupt und übergibt die Pins an den Handler
pub fn install_encoder(io: &mut Io<'_>, mut pins: EncoderPins) {
    io.set_interrupt_handler(encoder_handler);

    critical_section::with(|cs| {
        pins.a.listen(Event::AnyEdge);
        ENCODER.borrow_ref_mut(cs).replace(pins);
    });
}

#[handler]
fn encoder_handler() {
    critical_section::with(|cs| {
        let mut encoder = ENCODER.borrow_ref_mut(cs);
        let Some(pins) = encoder.as_mut() else {
            return;
        };

        if pins.a.is_interrupt_set() {
            DIAL.rotate(quadrature_step(pins.a.is_high(), pins.b.is_high()));
            pins.a.clear_interrupt();
        }
    });
}
