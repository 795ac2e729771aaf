// SmartLED Writer für die APA102 (DotStar)
//
// Verbindet den apa102-spi Treiber auf SPI2 mit dem SmartLedWriter Trait
// aus esp-core, damit die Schleifen-Logik mit Mocks testbar bleibt.

use apa102_spi::Apa102;
use esp_core::ScaledLedWriter;
use esp_hal::Blocking;
use esp_hal::spi::Mode;
use esp_hal::spi::master::{Config, Spi};
use esp_hal::time::Rate;

/// Real Hardware LED Writer
///
/// apa102-spi übernimmt Start-/LED-/End-Frames, ScaledLedWriter dimmt
/// jeden Farbkanal auf die eingestellte Helligkeit.
pub type Apa102LedWriter<'a> = ScaledLedWriter<Apa102<Spi<'a, Blocking>>>;

/// Erstellt einen neuen Apa102LedWriter
///
/// Kein CS-Pin: die APA102 erkennt den Frame-Anfang am Start-Frame.
///
/// # Parameter
/// - `spi_peripheral`: SPI2 Peripheral
/// - `clock`: GPIO19 für die Takt-Leitung (SCK)
/// - `data`: GPIO18 für die Daten-Leitung (MOSI)
/// - `frequency_mhz`: SPI Taktfrequenz in MHz
/// - `brightness_percent`: Helligkeit 0-100
///
/// # Panics
/// Wenn die SPI-Konfiguration ungültig ist (Frequenz außerhalb des Bereichs)
pub fn create_apa102_led_writer<'a>(
    spi_peripheral: esp_hal::peripherals::SPI2<'a>,
    clock: esp_hal::peripherals::GPIO19<'a>,
    data: esp_hal::peripherals::GPIO18<'a>,
    frequency_mhz: u32,
    brightness_percent: u8,
) -> Apa102LedWriter<'a> {
    let config = Config::default()
        .with_frequency(Rate::from_mhz(frequency_mhz))
        .with_mode(Mode::_0);

    let spi = Spi::new(spi_peripheral, config)
        .expect("Invalid SPI configuration for APA102")
        .with_sck(clock)
        .with_mosi(data);

    ScaledLedWriter::new(Apa102::new(spi), brightness_percent)
}
