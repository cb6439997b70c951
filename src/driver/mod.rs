use embedded_hal::i2c::I2c;

use crate::Error;
use crate::bus::{BusConfig, BusSetup};

mod gpio;
mod register;

/// Value returned by [`Pcf8574::read_all`] when the read fails.
///
/// This is also a legitimate reading (every input high), so the two cannot be
/// told apart by value. Use [`Pcf8574::try_read_all`] when that matters.
pub const READ_FAILURE_SENTINEL: u8 = 0xFF;

/// Driver for the PCF8574 I2C GPIO expander.
///
/// # Quick start
///
/// Wrap an already initialised bus with [`Pcf8574::new`], or let the driver bring
/// the bus up with [`Pcf8574::with_config`]. The bus is anything implementing the
/// blocking [`embedded_hal::i2c::I2c`] trait.
///
/// ```
/// # use embedded_hal_mock::eh1::i2c::{Mock, Transaction};
/// use pcf8574_hal::{DEFAULT_ADDRESS, Pcf8574};
/// # let mut i2c = Mock::new(&[
/// #     Transaction::write(0x20, vec![0b1011_0000]),
/// #     Transaction::write(0x20, vec![0b1100_0000]),
/// # ]);
/// let mut expander = Pcf8574::new(&mut i2c, DEFAULT_ADDRESS);
/// expander.write_all(0b1011_0000)?;
/// assert_eq!(expander.shift_left(2)?, 0b1100_0000);
/// # drop(expander);
/// # i2c.done();
/// # Ok::<(), pcf8574_hal::Error<embedded_hal::i2c::ErrorKind>>(())
/// ```
///
/// # Overview
///
/// The PCF8574 has a single 8-bit register with no direction setting. Writing a 1
/// to a bit releases the pin (weak pull-up, usable as an input); writing a 0 drives
/// it low. The driver keeps a copy of the last value successfully written, the
/// shadow register, available through [`Pcf8574::register`]. Every mutating method
/// computes a new value from the shadow register and writes the whole byte with
/// [`Pcf8574::write_all`], so each single-bit change is a full bus round trip.
///
/// The driver is not internally synchronised. Methods that touch the bus take
/// `&mut self`; use [`Pcf8574::split`] to hand out per-pin handles within a single
/// thread.
#[derive(Debug)]
pub struct Pcf8574<I2C> {
    /// Underlying bus transport.
    i2c: I2C,
    /// 7-bit device address.
    address: u8,
    /// Last value successfully written to the device.
    register: u8,
    /// Marker for whether the pin handles have been handed out.
    ///
    /// See [`Self::split`] for the only place it is used.
    pins_taken: bool,
}

impl<I2C: I2c> Pcf8574<I2C> {
    ////////////////////////////////////////////////////////////////////////////////
    // Constructors
    ////////////////////////////////////////////////////////////////////////////////

    /// Create the driver for the device at `address` on an initialised bus.
    ///
    /// No bus traffic takes place. The shadow register starts at `0xFF`, the
    /// device's power-on state with every pin released.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            register: 0xFF,
            pins_taken: false,
        }
    }

    /// Bring the bus up according to `config`, then create the driver.
    ///
    /// If both pins are set in the configuration, the bus is started on those
    /// pins, otherwise on the platform defaults. The clock speed is always set.
    ///
    /// # Errors
    ///
    /// An error will be returned if the bus fails to start or to change speed.
    pub fn with_config(
        mut i2c: I2C,
        address: u8,
        config: &BusConfig,
    ) -> Result<Self, Error<I2C::Error>>
    where
        I2C: BusSetup,
    {
        config.apply(&mut i2c).map_err(Error::from_bus)?;
        Ok(Self::new(i2c, address))
    }

    /// The 7-bit address of the device.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Destroy the driver and return the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }

    ////////////////////////////////////////////////////////////////////////////////
    // Bus transactions
    ////////////////////////////////////////////////////////////////////////////////

    /// Check whether the device acknowledges its address.
    ///
    /// This performs a zero-length write, and does not change the shadow register.
    pub fn available(&mut self) -> bool {
        match self.i2c.write(self.address, &[]) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("pcf8574 {:#04x}: not available: {e:?}", self.address);
                false
            }
        }
    }

    /// Write `value` to the device's register.
    ///
    /// On success the shadow register becomes `value`. On failure it is left
    /// unchanged, and the returned error's [`Error::code`] gives the status.
    ///
    /// All other mutating methods go through this one.
    pub fn write_all(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        log::trace!("pcf8574 {:#04x}: write {value:#010b}", self.address);
        self.i2c
            .write(self.address, &[value])
            .map_err(Error::from_bus)?;
        self.register = value;
        Ok(())
    }

    /// Read the live state of the device's pins.
    ///
    /// The shadow register is not changed.
    ///
    /// # Errors
    ///
    /// An error will be returned if no byte could be read from the device.
    pub fn try_read_all(&mut self) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .read(self.address, &mut buf)
            .map_err(Error::from_bus)?;
        log::trace!("pcf8574 {:#04x}: read {:#010b}", self.address, buf[0]);
        Ok(buf[0])
    }

    /// Read the live state of the device's pins, returning `0xFF` on failure.
    ///
    /// <div class="warning">
    ///
    /// A failed read is logged and returns [`READ_FAILURE_SENTINEL`], which is
    /// indistinguishable from a reading with every pin high. Prefer
    /// [`Pcf8574::try_read_all`] where the difference matters.
    ///
    /// </div>
    ///
    /// The shadow register is not changed.
    pub fn read_all(&mut self) -> u8 {
        self.try_read_all().unwrap_or_else(|e| {
            log::error!("pcf8574 {:#04x}: no byte received: {e}", self.address);
            READ_FAILURE_SENTINEL
        })
    }

    /// The last value successfully written to the device.
    ///
    /// This does not touch the bus.
    pub fn register(&self) -> u8 {
        self.register
    }
}
