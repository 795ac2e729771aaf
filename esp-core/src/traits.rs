//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.
//!
//! Digitale Pins, I2C, SPI und Delay kommen direkt aus `embedded-hal`;
//! hier stehen nur die Schnittstellen, für die es dort keinen Trait gibt.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Trait für SmartLED Hardware-Zugriff
///
/// Abstrahiert den Zugriff auf die adressierbare RGB LED (APA102/DotStar).
///
/// # Implementierungen
/// - **Production:** Apa102LedWriter (apa102-spi Treiber auf ESP32 SPI2, gedimmt)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait SmartLedWriter: Send {
    /// Schreibt eine RGB-Farbe auf die LED
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, color: RGB8) -> Result<(), LedError>;
}

/// Gemeinsam genutzter Bus mit exklusivem Zugriff
///
/// `try_with` blockiert nie: ist der Bus gerade belegt, kommt `None` zurück
/// und der Aufrufer entscheidet, ob und wie lange er es erneut versucht.
///
/// # Implementierungen
/// - **Production:** SharedI2cBus (embassy Mutex um den esp-hal I2C Treiber)
/// - **Testing:** MockSharedBus
pub trait SharedBus {
    /// Bus-Treiber, der während des Locks exklusiv benutzt wird
    type Bus;

    /// Führt `f` mit exklusivem Bus-Zugriff aus, falls der Bus frei ist
    fn try_with<R>(&self, f: impl FnOnce(&mut Self::Bus) -> R) -> Option<R>;
}
