//! Bus bring-up and configuration.
//!
//! Transactions go through [`embedded_hal::i2c::I2c`]. Bringing the bus up
//! (choosing pins, setting the clock) is not covered by `embedded-hal`, so
//! transports that need it implement [`BusSetup`] and are handed to
//! [`Pcf8574::with_config`] along with a [`BusConfig`].
//!
//! [`Pcf8574::with_config`]: crate::Pcf8574::with_config
use embedded_hal::i2c::ErrorType;

/// Default 7-bit address of the PCF8574, with A0, A1 and A2 tied low.
pub const DEFAULT_ADDRESS: u8 = 0x20;

/// Default bus clock of 100 kHz ("Standard-mode").
pub const DEFAULT_CLOCK_SPEED_HZ: u32 = 100_000;

/// Bring-up operations for a two-wire bus transport.
///
/// These are only called once, from [`Pcf8574::with_config`].
///
/// [`Pcf8574::with_config`]: crate::Pcf8574::with_config
pub trait BusSetup: ErrorType {
    /// Initialise the bus on the platform's default data and clock pins.
    fn begin(&mut self) -> Result<(), Self::Error>;

    /// Initialise the bus on the given data (SDA) and clock (SCL) pins.
    fn begin_with_pins(&mut self, data_pin: u8, clock_pin: u8) -> Result<(), Self::Error>;

    /// Set the bus clock frequency in hertz.
    fn set_clock_speed(&mut self, hz: u32) -> Result<(), Self::Error>;
}

impl<T: BusSetup + ?Sized> BusSetup for &mut T {
    fn begin(&mut self) -> Result<(), Self::Error> {
        T::begin(self)
    }

    fn begin_with_pins(&mut self, data_pin: u8, clock_pin: u8) -> Result<(), Self::Error> {
        T::begin_with_pins(self, data_pin, clock_pin)
    }

    fn set_clock_speed(&mut self, hz: u32) -> Result<(), Self::Error> {
        T::set_clock_speed(self, hz)
    }
}

/// Bus settings used once when constructing the driver.
///
/// The bus itself is not part of the configuration: construct it in your
/// application and pass it to [`Pcf8574::with_config`].
///
/// [`Pcf8574::with_config`]: crate::Pcf8574::with_config
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusConfig {
    /// Data (SDA) pin override.
    pub data_pin: Option<u8>,
    /// Clock (SCL) pin override.
    pub clock_pin: Option<u8>,
    /// Bus clock frequency in hertz.
    pub clock_speed_hz: u32,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            data_pin: None,
            clock_pin: None,
            clock_speed_hz: DEFAULT_CLOCK_SPEED_HZ,
        }
    }
}

impl BusConfig {
    /// Use the given data and clock pins instead of the platform defaults.
    pub fn with_pins(mut self, data_pin: u8, clock_pin: u8) -> Self {
        self.data_pin = Some(data_pin);
        self.clock_pin = Some(clock_pin);
        self
    }

    /// Use the given bus clock frequency.
    pub fn with_clock_speed(mut self, hz: u32) -> Self {
        self.clock_speed_hz = hz;
        self
    }

    /// The pin pair to bring the bus up on, if both pins are overridden.
    ///
    /// Setting only one of the two pins falls back to the platform defaults.
    pub(crate) fn pin_pair(&self) -> Option<(u8, u8)> {
        self.data_pin.zip(self.clock_pin)
    }

    /// Run the bring-up sequence for this configuration on `bus`.
    pub(crate) fn apply<B: BusSetup>(&self, bus: &mut B) -> Result<(), B::Error> {
        match self.pin_pair() {
            Some((data_pin, clock_pin)) => {
                log::debug!("bus: begin on SDA {data_pin}, SCL {clock_pin}");
                bus.begin_with_pins(data_pin, clock_pin)?;
            }
            None => {
                log::debug!("bus: begin on default pins");
                bus.begin()?;
            }
        }
        log::debug!("bus: clock speed {} Hz", self.clock_speed_hz);
        bus.set_clock_speed(self.clock_speed_hz)
    }
}
