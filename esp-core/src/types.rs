//! Core Types für Sensor-Probe und LED-Schleife
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

/// Anzahl Bytes, die beim Boot vom Sensor gelesen werden
pub const SENSOR_READ_LEN: usize = 32;

/// Rohdaten des Sensors nach dem Boot-Read
///
/// Die Bytes werden nicht interpretiert, nur ausgegeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorReading {
    pub bytes: [u8; SENSOR_READ_LEN],
}

impl SensorReading {
    /// Leerer Buffer (alle Bytes 0), wird vom Read komplett überschrieben
    pub const fn zeroed() -> Self {
        Self {
            bytes: [0; SENSOR_READ_LEN],
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Ausgabe einer Schleifen-Iteration
///
/// Wird aus dem Zählerstand berechnet und dann auf die Hardware geschrieben.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoopFrame {
    pub counter: u8,
    pub status_led_on: bool,
    pub color: RGB8,
}

/// Zustand des Tasters (Pull-Up → gedrückt = Low)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonState {
    Pressed,
    Released,
}

impl ButtonState {
    /// Taster mit Pull-Up: Low-Pegel heißt gedrückt
    pub fn from_active_low(is_low: bool) -> Self {
        if is_low {
            Self::Pressed
        } else {
            Self::Released
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for SensorReading {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "SensorReading {{ bytes: {:02x} }}", self.bytes)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LoopFrame {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "LoopFrame {{ counter: {}, status: {}, rgb: ({}, {}, {}) }}",
            self.counter,
            self.status_led_on,
            self.color.r,
            self.color.g,
            self.color.b
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ButtonState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ButtonState::Pressed => defmt::write!(fmt, "Pressed"),
            ButtonState::Released => defmt::write!(fmt, "Released"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for crate::traits::LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            crate::traits::LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}
