//! Helligkeit der RGB LED
//!
//! Gedimmt wird wie beim DotStar-Treiber der Referenz-Hardware: die
//! APA102-Helligkeit bleibt auf Maximum, jeder Farbkanal wird skaliert
//! (`c * prozent / 100`, abgeschnitten).

use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

use crate::traits::{LedError, SmartLedWriter};

/// Skaliert einen Farbkanal auf `percent` (0-100, größere Werte = 100)
///
/// ```
/// # use esp_core::brightness::scale_channel;
/// assert_eq!(scale_channel(255, 10), 25);
/// assert_eq!(scale_channel(129, 10), 12);
/// ```
pub fn scale_channel(value: u8, percent: u8) -> u8 {
    let percent = u16::from(percent.min(100));
    (u16::from(value) * percent / 100) as u8
}

/// Skaliert alle drei Kanäle
pub fn scale_color(color: RGB8, percent: u8) -> RGB8 {
    RGB8 {
        r: scale_channel(color.r, percent),
        g: scale_channel(color.g, percent),
        b: scale_channel(color.b, percent),
    }
}

/// SmartLedWriter für eine einzelne LED hinter einem `SmartLedsWrite` Treiber
///
/// Jede Farbe wird vor dem Schreiben auf die eingestellte Helligkeit skaliert.
pub struct ScaledLedWriter<W> {
    driver: W,
    brightness_percent: u8,
}

impl<W> ScaledLedWriter<W>
where
    W: SmartLedsWrite<Color = RGB8> + Send,
{
    pub fn new(driver: W, brightness_percent: u8) -> Self {
        Self {
            driver,
            brightness_percent: brightness_percent.min(100),
        }
    }

    pub fn brightness(&self) -> u8 {
        self.brightness_percent
    }

    pub fn set_brightness(&mut self, percent: u8) {
        self.brightness_percent = percent.min(100);
    }

    /// Gibt den Treiber wieder frei
    pub fn release(self) -> W {
        self.driver
    }
}

impl<W> SmartLedWriter for ScaledLedWriter<W>
where
    W: SmartLedsWrite<Color = RGB8> + Send,
{
    fn write(&mut self, color: RGB8) -> Result<(), LedError> {
        let scaled = scale_color(color, self.brightness_percent);
        self.driver
            .write([scaled].into_iter())
            .map_err(|_| LedError::WriteFailed)
    }
}
