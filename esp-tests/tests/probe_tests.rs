//! Integration Tests für die Sensor-Probe
//!
//! Mock-I2C-Bus hinter einem Mock-Lock, Delay zählt nur mit.

use core::cell::{Cell, RefCell};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use esp_core::probe::{BusBusy, with_bus_locked};
use esp_core::{
    BusLockPolicy, ProbeError, SENSOR_ADDRESS, SENSOR_COMMAND, SENSOR_READ_LEN, SharedBus,
    probe_sensor,
};

// ============================================================================
// Mock I2C
// ============================================================================

/// Ein aufgezeichneter I2C-Transfer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub address: u8,
    pub written: Vec<u8>,
    pub read_len: usize,
    pub operations: usize,
}

#[derive(Default)]
pub struct MockI2c {
    pub response: Vec<u8>,
    pub transfers: Vec<Transfer>,
    pub fail_with: Option<ErrorKind>,
}

impl MockI2c {
    pub fn with_response(response: &[u8]) -> Self {
        Self {
            response: response.to_vec(),
            ..Default::default()
        }
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if let Some(err) = self.fail_with {
            return Err(err);
        }

        let mut transfer = Transfer {
            address,
            written: Vec::new(),
            read_len: 0,
            operations: operations.len(),
        };

        for op in operations.iter_mut() {
            match op {
                Operation::Write(bytes) => transfer.written.extend_from_slice(*bytes),
                Operation::Read(buf) => {
                    for (i, byte) in buf.iter_mut().enumerate() {
                        *byte = self.response.get(i).copied().unwrap_or(0);
                    }
                    transfer.read_len += buf.len();
                }
            }
        }

        self.transfers.push(transfer);
        Ok(())
    }
}

// ============================================================================
// Mock Shared Bus
// ============================================================================

/// Bus, der für die ersten `busy_attempts` Versuche belegt ist
pub struct MockSharedBus {
    pub i2c: RefCell<MockI2c>,
    pub busy_attempts: Cell<u32>,
    pub lock_attempts: Cell<u32>,
}

impl MockSharedBus {
    pub fn new(i2c: MockI2c, busy_attempts: u32) -> Self {
        Self {
            i2c: RefCell::new(i2c),
            busy_attempts: Cell::new(busy_attempts),
            lock_attempts: Cell::new(0),
        }
    }
}

impl SharedBus for MockSharedBus {
    type Bus = MockI2c;

    fn try_with<R>(&self, f: impl FnOnce(&mut Self::Bus) -> R) -> Option<R> {
        self.lock_attempts.set(self.lock_attempts.get() + 1);

        let busy = self.busy_attempts.get();
        if busy > 0 {
            self.busy_attempts.set(busy - 1);
            return None;
        }

        Some(f(&mut *self.i2c.borrow_mut()))
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

#[derive(Default)]
pub struct MockDelay {
    pub total_ns: u64,
    pub calls: usize,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
        self.calls += 1;
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us * 1000);
    }
}

fn sample_bytes() -> Vec<u8> {
    (0..SENSOR_READ_LEN as u8).map(|i| 0xA0 ^ i).collect()
}

const POLICY: BusLockPolicy = BusLockPolicy::new(10, 1000);

// ============================================================================
// Tests: probe_sensor()
// ============================================================================

#[test]
fn test_probe_reads_32_bytes() {
    let bytes = sample_bytes();
    let bus = MockSharedBus::new(MockI2c::with_response(&bytes), 0);
    let mut delay = MockDelay::default();

    let reading = probe_sensor(&bus, &mut delay, POLICY).unwrap();

    assert_eq!(reading.as_slice(), bytes.as_slice());
    assert_eq!(delay.calls, 0);
    assert_eq!(bus.lock_attempts.get(), 1);
}

#[test]
fn test_probe_uses_single_write_read_transfer() {
    let bus = MockSharedBus::new(MockI2c::with_response(&sample_bytes()), 0);
    let mut delay = MockDelay::default();

    probe_sensor(&bus, &mut delay, POLICY).unwrap();

    let i2c = bus.i2c.borrow();
    assert_eq!(
        i2c.transfers,
        vec![Transfer {
            address: SENSOR_ADDRESS,
            written: SENSOR_COMMAND.to_vec(),
            read_len: SENSOR_READ_LEN,
            operations: 2,
        }]
    );
    assert_eq!(SENSOR_ADDRESS, 0x53);
    assert_eq!(SENSOR_COMMAND, [0x00, 0x00]);
}

#[test]
fn test_probe_waits_for_busy_bus() {
    let bus = MockSharedBus::new(MockI2c::with_response(&sample_bytes()), 3);
    let mut delay = MockDelay::default();

    let reading = probe_sensor(&bus, &mut delay, POLICY);

    assert!(reading.is_ok());
    assert_eq!(bus.lock_attempts.get(), 4);
    assert_eq!(delay.calls, 3);
    assert_eq!(delay.total_ns, 3_000_000);
}

#[test]
fn test_probe_times_out_on_busy_bus() {
    let bus = MockSharedBus::new(MockI2c::default(), u32::MAX);
    let mut delay = MockDelay::default();

    let result = probe_sensor(&bus, &mut delay, POLICY);

    assert_eq!(result, Err(ProbeError::BusBusy));
    assert_eq!(bus.lock_attempts.get(), POLICY.max_attempts());
    // Kein Delay nach dem letzten Versuch
    assert_eq!(delay.calls as u32, POLICY.max_attempts() - 1);
    assert_eq!(delay.total_ns, 10_000_000);
    assert!(bus.i2c.borrow().transfers.is_empty());
}

#[test]
fn test_probe_transfer_error_is_not_retried() {
    let i2c = MockI2c {
        fail_with: Some(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)),
        ..Default::default()
    };
    let bus = MockSharedBus::new(i2c, 0);
    let mut delay = MockDelay::default();

    let result = probe_sensor(&bus, &mut delay, POLICY);

    assert_eq!(
        result,
        Err(ProbeError::Transfer(ErrorKind::NoAcknowledge(
            NoAcknowledgeSource::Address
        )))
    );
    assert_eq!(bus.lock_attempts.get(), 1);
}

#[test]
fn test_probe_zero_timeout_tries_once() {
    let bus = MockSharedBus::new(MockI2c::default(), 1);
    let mut delay = MockDelay::default();

    let result = probe_sensor(&bus, &mut delay, BusLockPolicy::new(0, 1000));

    assert_eq!(result, Err(ProbeError::BusBusy));
    assert_eq!(bus.lock_attempts.get(), 1);
    assert_eq!(delay.calls, 0);
}

// ============================================================================
// Tests: with_bus_locked()
// ============================================================================

#[test]
fn test_with_bus_locked_returns_closure_result() {
    let bus = MockSharedBus::new(MockI2c::default(), 0);
    let mut delay = MockDelay::default();

    let result = with_bus_locked(&bus, &mut delay, POLICY, |i2c| i2c.transfers.len());

    assert_eq!(result, Ok(0));
}

#[test]
fn test_with_bus_locked_gives_up() {
    let bus = MockSharedBus::new(MockI2c::default(), 100);
    let mut delay = MockDelay::default();
    let mut calls = 0;

    let result = with_bus_locked(&bus, &mut delay, BusLockPolicy::new(2, 1000), |_| calls += 1);

    assert_eq!(result, Err(BusBusy));
    assert_eq!(calls, 0);
    assert_eq!(bus.lock_attempts.get(), 3);
}
