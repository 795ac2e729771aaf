//! Sensor-Probe beim Boot
//!
//! Ein einziger I2C-Transfer: Register-Select `[0x00, 0x00]` an Adresse 83,
//! danach ohne Stop-Bedingung (Repeated Start) 32 Bytes lesen.
//!
//! Der Bus wird vorher exklusiv belegt. Statt endlos auf den Lock zu warten,
//! wird in festen Abständen erneut versucht und nach dem Timeout mit
//! `ProbeError::BusBusy` abgebrochen.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorType, I2c};

use crate::traits::SharedBus;
use crate::types::SensorReading;

/// 7-Bit I2C-Adresse des Sensors (0x53)
pub const SENSOR_ADDRESS: u8 = 83;

/// Register-Select Kommando vor dem Lesen
pub const SENSOR_COMMAND: [u8; 2] = [0x00, 0x00];

/// Wie lange und in welchem Takt auf den Bus-Lock gewartet wird
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLockPolicy {
    pub timeout_ms: u32,
    pub retry_interval_us: u32,
}

impl BusLockPolicy {
    pub const fn new(timeout_ms: u32, retry_interval_us: u32) -> Self {
        Self {
            timeout_ms,
            retry_interval_us,
        }
    }

    /// Anzahl Lock-Versuche innerhalb des Timeouts (mindestens 1)
    ///
    /// Der erste Versuch erfolgt sofort, jeder weitere nach einem Intervall.
    pub fn max_attempts(&self) -> u32 {
        let interval = self.retry_interval_us.max(1);
        (self.timeout_ms.saturating_mul(1000) / interval).saturating_add(1)
    }
}

/// Bus war bis zum Timeout belegt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusBusy;

/// Fehler der Sensor-Probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError<E> {
    /// Bus-Lock nicht innerhalb des Timeouts bekommen
    BusBusy,
    /// Der I2C-Transfer selbst ist fehlgeschlagen
    Transfer(E),
}

impl<E> From<BusBusy> for ProbeError<E> {
    fn from(_: BusBusy) -> Self {
        ProbeError::BusBusy
    }
}

/// Führt `f` mit exklusivem Bus-Zugriff aus
///
/// Versucht den Lock bis zu `policy.max_attempts()` mal und wartet zwischen
/// den Versuchen `policy.retry_interval_us`.
pub fn with_bus_locked<S, D, R>(
    bus: &S,
    delay: &mut D,
    policy: BusLockPolicy,
    mut f: impl FnMut(&mut S::Bus) -> R,
) -> Result<R, BusBusy>
where
    S: SharedBus,
    D: DelayNs,
{
    let attempts = policy.max_attempts();

    for attempt in 0..attempts {
        if let Some(result) = bus.try_with(&mut f) {
            return Ok(result);
        }
        if attempt + 1 < attempts {
            delay.delay_us(policy.retry_interval_us);
        }
    }

    Err(BusBusy)
}

/// Liest die 32 Sensor-Bytes
///
/// Write und Read laufen als ein `write_read` Transfer, der Bus wird
/// dazwischen nicht freigegeben. Transferfehler werden nicht wiederholt.
pub fn probe_sensor<S, D>(
    bus: &S,
    delay: &mut D,
    policy: BusLockPolicy,
) -> Result<SensorReading, ProbeError<<S::Bus as ErrorType>::Error>>
where
    S: SharedBus,
    S::Bus: I2c,
    D: DelayNs,
{
    let mut reading = SensorReading::zeroed();

    with_bus_locked(bus, delay, policy, |i2c| {
        i2c.write_read(SENSOR_ADDRESS, &SENSOR_COMMAND, &mut reading.bytes)
    })?
    .map_err(ProbeError::Transfer)?;

    Ok(reading)
}

#[cfg(feature = "defmt")]
impl<E: core::fmt::Debug> defmt::Format for ProbeError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ProbeError::BusBusy => defmt::write!(fmt, "BusBusy"),
            ProbeError::Transfer(e) => {
                defmt::write!(fmt, "Transfer({})", defmt::Debug2Format(e))
            }
        }
    }
}
