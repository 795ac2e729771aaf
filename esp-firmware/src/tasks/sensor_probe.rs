// Sensor Probe - einmaliger I2C-Read beim Boot (kein Embassy Task)
use defmt::{error, info};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::config::{BUS_LOCK_POLICY, SENSOR_ADDRESS, SENSOR_COMMAND, SENSOR_READ_LEN};
use crate::{SensorReading, SharedBus, probe_sensor};

/// Liest die Sensor-Bytes und gibt sie aus
///
/// Läuft synchron in `main()`, bevor die Tasks gestartet werden.
/// Jeder Fehler ist fatal: die Firmware hält mit Panic an
/// (esp-backtrace gibt den Grund aus).
pub fn run_sensor_probe<S, D>(bus: &S, delay: &mut D) -> SensorReading
where
    S: SharedBus,
    S::Bus: I2c,
    D: DelayNs,
{
    info!(
        "Sensor probe: addr {=u8:#x}, command {:02x}, reading {} bytes",
        SENSOR_ADDRESS,
        SENSOR_COMMAND,
        SENSOR_READ_LEN
    );

    match probe_sensor(bus, delay, BUS_LOCK_POLICY) {
        Ok(reading) => {
            info!("Sensor data: {:02x}", reading.bytes);
            reading
        }
        Err(e) => {
            error!("Sensor probe failed: {}", e);
            panic!("sensor probe failed");
        }
    }
}
