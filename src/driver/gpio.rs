use core::cell::RefCell;

use embedded_hal::i2c::I2c;

use super::Pcf8574;
use crate::gpio::Pins;

impl<I2C: I2c> Pcf8574<I2C> {
    /// Take the eight pin handles for individual GPIO operation.
    ///
    /// The handles share the driver through the `RefCell`, so they can be passed
    /// to code expecting [`embedded_hal::digital`] pins while staying on one
    /// thread. This can only be done once, and will return `None` afterwards.
    ///
    /// # Panics
    ///
    /// Panics if the driver is currently mutably borrowed.
    pub fn split(driver: &RefCell<Self>) -> Option<Pins<'_, I2C>> {
        let mut inner = driver.borrow_mut();
        if inner.pins_taken {
            None
        } else {
            inner.pins_taken = true;
            Some(Pins::new(driver))
        }
    }
}
