// Gemeinsam genutzter I2C-Bus
//
// Der I2C-Treiber liegt in einem Embassy Mutex, damit mehrere Nutzer den
// Bus teilen können. Die Sensor-Probe sperrt ihn nur über `try_lock`,
// das Warten und der Timeout passieren in esp-core.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use esp_core::SharedBus;
use esp_hal::Blocking;
use esp_hal::i2c::master::{Config, I2c};
use esp_hal::time::Rate;

/// Mutex-Typ für den geteilten I2C-Bus
pub type I2cBusMutex = Mutex<CriticalSectionRawMutex, I2c<'static, Blocking>>;

/// Erstellt den I2C-Treiber (Blocking, Controller-Mode)
///
/// # Panics
/// Wenn die I2C-Konfiguration ungültig ist
pub fn create_i2c_bus(
    i2c0: esp_hal::peripherals::I2C0<'static>,
    sda: esp_hal::peripherals::GPIO22<'static>,
    scl: esp_hal::peripherals::GPIO23<'static>,
    frequency_khz: u32,
) -> I2c<'static, Blocking> {
    I2c::new(
        i2c0,
        Config::default().with_frequency(Rate::from_khz(frequency_khz)),
    )
    .expect("Invalid I2C configuration")
    .with_sda(sda)
    .with_scl(scl)
}

/// Handle auf den geteilten Bus, implementiert `SharedBus`
#[derive(Clone, Copy)]
pub struct SharedI2cBus<'a> {
    bus: &'a I2cBusMutex,
}

impl<'a> SharedI2cBus<'a> {
    pub const fn new(bus: &'a I2cBusMutex) -> Self {
        Self { bus }
    }
}

impl SharedBus for SharedI2cBus<'_> {
    type Bus = I2c<'static, Blocking>;

    fn try_with<R>(&self, f: impl FnOnce(&mut Self::Bus) -> R) -> Option<R> {
        // Guard wird am Ende des Blocks freigegeben
        let mut guard = self.bus.try_lock().ok()?;
        Some(f(&mut *guard))
    }
}
