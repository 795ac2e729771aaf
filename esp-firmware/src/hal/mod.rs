// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter den Traits aus esp-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod i2c_bus;
pub mod led_writer;

pub use i2c_bus::{I2cBusMutex, SharedI2cBus, create_i2c_bus};
pub use led_writer::{Apa102LedWriter, create_apa102_led_writer};
