#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod bits;
pub mod bus;
mod driver;
mod error;
pub mod gpio;

pub use bits::reverse_bits;
pub use bus::{BusConfig, BusSetup, DEFAULT_ADDRESS, DEFAULT_CLOCK_SPEED_HZ};
pub use driver::{Pcf8574, READ_FAILURE_SENTINEL};
pub use error::Error;
