//! Single-pin access to the expander.
//!
//! There are two ways to work with individual pins:
//!
//! - the free functions [`set_pin_mode`], [`write_pin`], [`read_pin`] and
//!   [`toggle_pin`], which take raw pin indices, log problems and carry on;
//! - the [`ExpanderPin`] handles from [`Pcf8574::split`], which implement the
//!   [`embedded_hal::digital`] traits and return errors.
//!
//! Both use the same active-low convention: a pin at logic HIGH has its register
//! bit cleared, and a pin at logic LOW has it set.
//!
//! [`Pcf8574::split`]: crate::Pcf8574::split

mod common;
mod helpers;
mod pins;

pub use common::{LogicLevel, PinMode, PinNumber};
pub use helpers::{read_pin, set_pin_mode, toggle_pin, write_pin};
pub use pins::{ExpanderPin, Pins};
