// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von esp-core
pub use esp_core::{
    BootStage, LedCycle, SensorReading, SharedBus, SmartLedWriter, probe_sensor, show_boot_stage,
};

// ============================================================================
// Testing-Strategie
// ============================================================================
//
// Dieses Crate kompiliert nur für riscv32imac-unknown-none-elf.
// Alles Testbare liegt deshalb in esp-core:
//
// - Farbrad, Schwellwert, Zähler: esp-core/src/logic.rs
// - Schleifen-Iteration (LedCycle): esp-core/src/cycle.rs
// - Bus-Lock mit Timeout + Sensor-Read: esp-core/src/probe.rs
// - Helligkeit (Kanal-Skalierung vor dem apa102-spi Treiber): esp-core/src/brightness.rs
// - Boot-Statusfarben: esp-core/src/boot.rs
//
// Hier bleibt nur die Verdrahtung mit esp-hal (hal/) und das Timing (tasks/).
// Host-Tests mit Mock-Hardware: esp-tests/tests/
