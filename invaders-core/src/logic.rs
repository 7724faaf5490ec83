//! Pure Business Logic Functions
//!
//! Farbrad-Umrechnung und Zufallsfarben, ohne Hardware-Dependencies (testbar!)

use rgb::RGB8;

use crate::types::{Hsv, Hue, PALETTE};

/// Rechnet eine HSV-Farbe (Farbrad mit 1536 Schritten) in RGB8 um
///
/// Das Rad besteht aus 6 Sektoren à 256 Schritten:
/// Rot → Gelb → Grün → Cyan → Blau → Magenta → Rot.
/// Sättigung mischt Richtung Weiß, Helligkeit skaliert linear.
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use invaders_core::{Hsv, Hue, hsv_to_rgb};
/// let red = hsv_to_rgb(Hsv { hue: Hue::RED, sat: 255, val: 255 });
/// assert_eq!(red, RGB8 { r: 255, g: 0, b: 0 });
/// ```
pub fn hsv_to_rgb(color: Hsv) -> RGB8 {
    let hue = color.hue.raw();
    let ramp = hue % 256;

    let (r, g, b) = match hue / 256 {
        0 => (255, ramp, 0),
        1 => (255 - ramp, 255, 0),
        2 => (0, 255, ramp),
        3 => (0, 255 - ramp, 255),
        4 => (ramp, 0, 255),
        _ => (255, 0, 255 - ramp),
    };

    let sat = color.sat as u16;
    let val = color.val as u16;
    // Kanal: erst Richtung Weiß entsättigen, dann mit der Helligkeit skalieren
    let channel = |c: u16| -> u8 { (((c * sat / 255) + (255 - sat)) * val / 255) as u8 };

    RGB8 {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Wählt eine der sechs Spielfarben zufällig aus
///
/// Wird bei jedem Aufruf neu aus `seed` (aktuelle Zeit) geseedet.
/// Schwacher xorshift-Zufall, für das Spiel ausreichend.
pub fn random_hue(seed: u32) -> Hue {
    let mut x = seed.wrapping_mul(0x9E37_79B9) ^ 0x2545_F491;
    if x == 0 {
        x = 1;
    }
    for _ in 0..3 {
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
    }
    PALETTE[(x % PALETTE.len() as u32) as usize]
}
