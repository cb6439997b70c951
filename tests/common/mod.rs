//! Helpers shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Once;

use embedded_hal::i2c::{self, ErrorKind, Operation, SevenBitAddress};
use log::{Level, LevelFilter, Log, Metadata, Record};
use pcf8574_hal::BusSetup;

pub const ADDRESS: u8 = 0x20;

////////////////////////////////////////////////////////////////////////////////
// Log capture
////////////////////////////////////////////////////////////////////////////////

thread_local! {
    /// Records logged on the current test thread.
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger and clear this thread's records.
///
/// Tests run on separate threads, so each test only sees its own records.
pub fn capture_logs() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("No other logger installed.");
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|records| records.borrow_mut().clear());
}

/// Messages logged on this thread at exactly `level`.
pub fn logged(level: Level) -> Vec<String> {
    RECORDS.with(|records| {
        records
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, message)| message.clone())
            .collect()
    })
}

////////////////////////////////////////////////////////////////////////////////
// Fake bus with bring-up support
////////////////////////////////////////////////////////////////////////////////

/// Calls made to [`FakeBus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Begin,
    BeginWithPins(u8, u8),
    ClockSpeed(u32),
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

/// Bus that records every call and answers reads with a fixed byte.
#[derive(Debug, Default)]
pub struct FakeBus {
    pub calls: Vec<Call>,
    /// Byte returned by every read.
    pub input: u8,
    /// Make bring-up fail with this error.
    pub setup_error: Option<ErrorKind>,
}

impl i2c::ErrorType for FakeBus {
    type Error = ErrorKind;
}

impl i2c::I2c<SevenBitAddress> for FakeBus {
    fn transaction(
        &mut self,
        address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            match op {
                Operation::Write(bytes) => self.calls.push(Call::Write(address, bytes.to_vec())),
                Operation::Read(buf) => {
                    buf.fill(self.input);
                    self.calls.push(Call::Read(address, buf.len()));
                }
            }
        }
        Ok(())
    }
}

impl BusSetup for FakeBus {
    fn begin(&mut self) -> Result<(), Self::Error> {
        self.calls.push(Call::Begin);
        self.setup_error.map_or(Ok(()), Err)
    }

    fn begin_with_pins(&mut self, data_pin: u8, clock_pin: u8) -> Result<(), Self::Error> {
        self.calls.push(Call::BeginWithPins(data_pin, clock_pin));
        self.setup_error.map_or(Ok(()), Err)
    }

    fn set_clock_speed(&mut self, hz: u32) -> Result<(), Self::Error> {
        self.calls.push(Call::ClockSpeed(hz));
        Ok(())
    }
}
