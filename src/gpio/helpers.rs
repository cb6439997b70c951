//! Pin functions in the style of a conventional digital I/O interface.
//!
//! None of these return errors. An invalid pin index (8 or above) is logged and
//! nothing is sent to the device. A failed write is logged and the shadow
//! register stays as it was. Use [`ExpanderPin`] when the caller needs to see
//! failures.
//!
//! [`ExpanderPin`]: super::ExpanderPin
use bit_field::BitField;
use embedded_hal::i2c::I2c;

use super::{LogicLevel, PinMode};
use crate::Pcf8574;

/// Set the mode of a single pin.
///
/// The pin's bit is set for [`PinMode::Input`] and cleared for
/// [`PinMode::Output`]. The other pins keep their shadow register values.
pub fn set_pin_mode<I2C: I2c>(expander: &mut Pcf8574<I2C>, pin: u8, mode: PinMode) {
    update_bit(expander, pin, |register, bit| {
        register.set_bit(bit, mode.into());
    });
}

/// Drive a single pin to `value`.
///
/// The PCF8574 is wired active-low here: HIGH clears the pin's bit and LOW sets it.
pub fn write_pin<I2C: I2c>(expander: &mut Pcf8574<I2C>, pin: u8, value: impl Into<LogicLevel>) {
    let level = value.into();
    update_bit(expander, pin, |register, bit| {
        register.set_bit(bit, level.active_low_bit());
    });
}

/// Read the live level of a single pin.
///
/// This reads the whole register from the device and returns `true` (HIGH) if
/// the pin's bit is 0. An invalid pin returns `false`.
///
/// A failed read is treated as [`Pcf8574::read_all`] treats it, so every pin
/// reads LOW.
pub fn read_pin<I2C: I2c>(expander: &mut Pcf8574<I2C>, pin: u8) -> bool {
    if !check_pin(expander, pin) {
        return false;
    }
    let bit = expander.read_all().get_bit(pin.into());
    LogicLevel::from_active_low_bit(bit).is_high()
}

/// Invert a single pin.
pub fn toggle_pin<I2C: I2c>(expander: &mut Pcf8574<I2C>, pin: u8) {
    update_bit(expander, pin, |register, bit| {
        *register ^= 1u8 << bit;
    });
}

/// Validate `pin`, logging an error if it is out of range.
fn check_pin<I2C: I2c>(expander: &Pcf8574<I2C>, pin: u8) -> bool {
    let valid = expander.is_valid_pin(pin);
    if !valid {
        log::error!("pcf8574 {:#04x}: invalid pin {pin}", expander.address());
    }
    valid
}

/// Read-modify-write one bit of the shadow register.
fn update_bit<I2C, F>(expander: &mut Pcf8574<I2C>, pin: u8, change: F)
where
    I2C: I2c,
    F: FnOnce(&mut u8, usize),
{
    if !check_pin(expander, pin) {
        return;
    }
    let mut register = expander.register();
    change(&mut register, pin.into());
    if let Err(e) = expander.write_all(register) {
        log::warn!("pcf8574 {:#04x}: pin {pin} not updated: {e}", expander.address());
    }
}
