use core::cell::RefCell;

use bit_field::BitField;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use embedded_hal::i2c::I2c;

use super::{LogicLevel, PinMode, PinNumber};
use crate::{Error, Pcf8574};

type BusError<I2C> = Error<<I2C as embedded_hal::i2c::ErrorType>::Error>;

/// A single PCF8574 pin.
///
/// Levels follow the active-low convention of the [`gpio`](super) module: setting
/// the pin high clears its register bit, and the pin reads high when its bit is 0.
///
/// Every change is a full read-modify-write of the shadow register through
/// [`Pcf8574::write_all`], so handles for different pins can be used freely
/// alongside each other.
#[derive(Debug)]
pub struct ExpanderPin<'a, I2C> {
    driver: &'a RefCell<Pcf8574<I2C>>,
    pin_number: PinNumber,
}

impl<I2C: I2c> ExpanderPin<'_, I2C> {
    /// Which pin this handle controls.
    pub fn pin_number(&self) -> PinNumber {
        self.pin_number
    }

    fn bit(&self) -> usize {
        self.pin_number.index().into()
    }

    /// Write the shadow register with this pin's bit changed to `bit`.
    fn write_bit(&self, bit: bool) -> Result<(), BusError<I2C>> {
        let mut driver = self.driver.borrow_mut();
        let mut register = driver.register();
        register.set_bit(self.bit(), bit);
        driver.write_all(register)
    }

    /// Set this pin's mode, leaving the other pins unchanged.
    pub fn set_mode(&mut self, mode: PinMode) -> Result<(), BusError<I2C>> {
        self.write_bit(mode.into())
    }

    /// Set the output level of this pin.
    pub fn set_level(&mut self, level: LogicLevel) -> Result<(), BusError<I2C>> {
        self.write_bit(level.active_low_bit())
    }

    /// Invert this pin.
    pub fn toggle(&mut self) -> Result<(), BusError<I2C>> {
        let bit = !self.driver.borrow().register().get_bit(self.bit());
        self.write_bit(bit)
    }

    /// Read the live input level of this pin from the device.
    pub fn get_level(&self) -> Result<LogicLevel, BusError<I2C>> {
        let value = self.driver.borrow_mut().try_read_all()?;
        Ok(LogicLevel::from_active_low_bit(value.get_bit(self.bit())))
    }

    /// Get the output level last written to this pin.
    ///
    /// This comes from the shadow register and does not touch the bus.
    pub fn get_output_level(&self) -> LogicLevel {
        let register = self.driver.borrow().register();
        LogicLevel::from_active_low_bit(register.get_bit(self.bit()))
    }
}

impl<I2C: I2c> ErrorType for ExpanderPin<'_, I2C> {
    type Error = BusError<I2C>;
}

impl<I2C: I2c> InputPin for ExpanderPin<'_, I2C> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.get_level().map(LogicLevel::is_high)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.get_level().map(LogicLevel::is_low)
    }
}

impl<I2C: I2c> OutputPin for ExpanderPin<'_, I2C> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(LogicLevel::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(LogicLevel::High)
    }
}

impl<I2C: I2c> StatefulOutputPin for ExpanderPin<'_, I2C> {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.get_output_level().is_high())
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.get_output_level().is_low())
    }

    fn toggle(&mut self) -> Result<(), Self::Error> {
        ExpanderPin::toggle(self)
    }
}

/// The eight PCF8574 pins.
#[derive(Debug)]
pub struct Pins<'a, I2C> {
    /// Pin P0
    pub p0: ExpanderPin<'a, I2C>,
    /// Pin P1
    pub p1: ExpanderPin<'a, I2C>,
    /// Pin P2
    pub p2: ExpanderPin<'a, I2C>,
    /// Pin P3
    pub p3: ExpanderPin<'a, I2C>,
    /// Pin P4
    pub p4: ExpanderPin<'a, I2C>,
    /// Pin P5
    pub p5: ExpanderPin<'a, I2C>,
    /// Pin P6
    pub p6: ExpanderPin<'a, I2C>,
    /// Pin P7
    pub p7: ExpanderPin<'a, I2C>,
}

impl<'a, I2C> Pins<'a, I2C> {
    pub(crate) fn new(driver: &'a RefCell<Pcf8574<I2C>>) -> Self {
        let pin = |pin_number| ExpanderPin { driver, pin_number };
        Self {
            p0: pin(PinNumber::P0),
            p1: pin(PinNumber::P1),
            p2: pin(PinNumber::P2),
            p3: pin(PinNumber::P3),
            p4: pin(PinNumber::P4),
            p5: pin(PinNumber::P5),
            p6: pin(PinNumber::P6),
            p7: pin(PinNumber::P7),
        }
    }
}
