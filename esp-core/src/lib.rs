//! ESP Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert nur Traits und Pure Functions.

#![no_std]

pub mod boot;
pub mod brightness;
pub mod cycle;
pub mod logic;
pub mod probe;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use boot::{BootStage, show_boot_stage};
pub use brightness::{ScaledLedWriter, scale_color};
pub use cycle::{LedCycle, StepReport, frame_for};
pub use logic::{STATUS_LED_THRESHOLD, next_counter, status_led_on, wheel, wheel_u8};
pub use probe::{BusLockPolicy, ProbeError, SENSOR_ADDRESS, SENSOR_COMMAND, probe_sensor};
pub use traits::{LedError, SharedBus, SmartLedWriter};
pub use types::{ButtonState, LoopFrame, SENSOR_READ_LEN, SensorReading};
