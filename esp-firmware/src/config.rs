// Projekt-Konfiguration: Konstanten für Timing, Bus und LEDs
//
// Pin-Belegung (ESP32-C6), festgelegt über die Peripherie-Typen in main.rs:
//
//   GPIO15  Status-LED (Ausgang)
//   GPIO9   Taster, Pull-Up (BOOT-Taster auf dem DevKit)
//   GPIO19  APA102 Takt (SPI2 SCK)
//   GPIO18  APA102 Daten (SPI2 MOSI)
//   GPIO22  I2C0 SDA
//   GPIO23  I2C0 SCL

use esp_core::BusLockPolicy;

// Protokoll-Konstanten aus esp-core (Logik und Tests hängen davon ab)
pub use esp_core::{SENSOR_ADDRESS, SENSOR_COMMAND, SENSOR_READ_LEN};

// ============================================================================
// Sensor / I2C Konfiguration
// ============================================================================

/// I2C Busfrequenz in kHz (Standard-Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// Maximale Wartezeit auf den Bus-Lock in Millisekunden
/// Danach bricht die Probe mit BusBusy ab
pub const BUS_LOCK_TIMEOUT_MS: u32 = 100;

/// Pause zwischen zwei Lock-Versuchen in Mikrosekunden
pub const BUS_LOCK_RETRY_INTERVAL_US: u32 = 1000;

/// Lock-Strategie für die Sensor-Probe
pub const BUS_LOCK_POLICY: BusLockPolicy =
    BusLockPolicy::new(BUS_LOCK_TIMEOUT_MS, BUS_LOCK_RETRY_INTERVAL_US);

// ============================================================================
// RGB LED (APA102 / DotStar) Konfiguration
// ============================================================================

/// Helligkeit der RGB LED in der Hauptschleife in Prozent (0-100)
/// Jeder Farbkanal wird skaliert, Wert ist gedimmt für Augenschonung
pub const RGB_LED_BRIGHTNESS_PERCENT: u8 = 10;

/// Helligkeit während des Boots
/// Die Boot-Farben sind selbst schon dunkel (Kanäle 0x10)
pub const BOOT_LED_BRIGHTNESS_PERCENT: u8 = 100;

/// Wie lange die Ready-Farbe vor der Hauptschleife stehen bleibt
pub const BOOT_READY_HOLD_MS: u64 = 500;

/// SPI Taktfrequenz in MHz für die APA102
pub const RGB_LED_SPI_FREQUENCY_MHZ: u32 = 4;

// ============================================================================
// Hauptschleife
// ============================================================================

/// Pause pro Schleifen-Iteration in Millisekunden
/// (Entprell-Delay, begrenzt die Polling-Rate)
pub const LOOP_DELAY_MS: u64 = 10;
