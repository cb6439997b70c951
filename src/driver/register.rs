use bit_field::BitField;
use embedded_hal::i2c::I2c;

use super::Pcf8574;
use crate::Error;
use crate::bits::reverse_bits;
use crate::gpio::PinMode;

/// Number of pins on the PCF8574.
pub(crate) const PIN_COUNT: u8 = 8;

/// Whole-register operations and shadow register queries.
impl<I2C: I2c> Pcf8574<I2C> {
    /// Invert every bit of the register.
    pub fn toggle_all(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_all(!self.register)
    }

    /// Set every pin to the same mode.
    ///
    /// Outputs are written as 0 (driven low), inputs as 1 (released to the weak
    /// pull-up).
    pub fn set_all_pin_mode(&mut self, mode: PinMode) -> Result<(), Error<I2C::Error>> {
        let value = match mode {
            PinMode::Output => 0x00,
            PinMode::Input => 0xFF,
        };
        self.write_all(value)
    }

    /// Reverse the bit order of the register, so pin 0 swaps with pin 7 and so on.
    pub fn reverse_all_bits(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_all(reverse_bits(self.register))
    }

    /// Shift the register right by `positions` bits and return the new value.
    ///
    /// Shifting by 8 or more clears the register. The value is written even when
    /// `positions` is 0.
    pub fn shift_right(&mut self, positions: u8) -> Result<u8, Error<I2C::Error>> {
        let value = self
            .register
            .checked_shr(positions.into())
            .unwrap_or(0);
        self.write_all(value)?;
        Ok(self.register)
    }

    /// Shift the register left by `positions` bits and return the new value.
    ///
    /// Bits shifted past pin 7 are dropped. Shifting by 8 or more clears the
    /// register. The value is written even when `positions` is 0.
    pub fn shift_left(&mut self, positions: u8) -> Result<u8, Error<I2C::Error>> {
        let value = self
            .register
            .checked_shl(positions.into())
            .unwrap_or(0);
        self.write_all(value)?;
        Ok(self.register)
    }

    /// Check whether `pin` is set in the shadow register.
    ///
    /// This reflects the last successful write, not the live pin state (see
    /// [`Pcf8574::read_all`] for that). Returns `false` for pins 8 and above.
    pub fn is_pin_high(&self, pin: u8) -> bool {
        self.is_valid_pin(pin) && self.register.get_bit(pin.into())
    }

    /// Check whether `pin` is clear in the shadow register.
    ///
    /// This reflects the last successful write, not the live pin state. Returns
    /// `false` for pins 8 and above, so it is not always the opposite of
    /// [`Pcf8574::is_pin_high`].
    pub fn is_pin_low(&self, pin: u8) -> bool {
        self.is_valid_pin(pin) && !self.register.get_bit(pin.into())
    }

    /// Check that `pin` names one of the eight expander pins.
    pub fn is_valid_pin(&self, pin: u8) -> bool {
        pin < PIN_COUNT
    }
}
