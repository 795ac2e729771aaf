//! Boot-Statusfarben auf der RGB LED
//!
//! Zeigt an, wie weit der Boot gekommen ist. Bleibt die LED auf einer
//! Farbe stehen, ist der Boot in dieser Phase hängen geblieben.

use rgb::RGB8;

use crate::traits::{LedError, SmartLedWriter};

/// Phasen des Boot-Vorgangs, in dieser Reihenfolge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    /// Chip läuft, LED initialisiert
    Start,
    /// Peripherie (I2C) wird aufgesetzt und der Sensor gelesen
    Peripherals,
    /// Boot fertig, gleich startet die Hauptschleife
    Ready,
}

impl BootStage {
    pub const ALL: [BootStage; 3] = [BootStage::Start, BootStage::Peripherals, BootStage::Ready];

    /// Farbe als 0xRRGGBB
    pub const fn hex(self) -> u32 {
        match self {
            BootStage::Start => 0x00_10_10,
            BootStage::Peripherals => 0x10_00_00,
            BootStage::Ready => 0x10_10_10,
        }
    }

    pub fn color(self) -> RGB8 {
        rgb_from_hex(self.hex())
    }
}

/// 0xRRGGBB → RGB8, oberstes Byte wird ignoriert
pub fn rgb_from_hex(hex: u32) -> RGB8 {
    RGB8 {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Schreibt die Farbe einer Boot-Phase auf die LED
pub fn show_boot_stage<L: SmartLedWriter>(led: &mut L, stage: BootStage) -> Result<(), LedError> {
    led.write(stage.color())
}

#[cfg(feature = "defmt")]
impl defmt::Format for BootStage {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            BootStage::Start => defmt::write!(fmt, "Start"),
            BootStage::Peripherals => defmt::write!(fmt, "Peripherals"),
            BootStage::Ready => defmt::write!(fmt, "Ready"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_hex() {
        assert_eq!(rgb_from_hex(0x12_34_56), RGB8 { r: 0x12, g: 0x34, b: 0x56 });
        assert_eq!(rgb_from_hex(0xFF_00_00_01), RGB8 { r: 0, g: 0, b: 1 });
    }

    #[test]
    fn test_boot_stage_colors() {
        assert_eq!(BootStage::Start.color(), RGB8 { r: 0, g: 16, b: 16 });
        assert_eq!(BootStage::Peripherals.color(), RGB8 { r: 16, g: 0, b: 0 });
        assert_eq!(BootStage::Ready.color(), RGB8 { r: 16, g: 16, b: 16 });
    }
}
