#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pin mode.
///
/// The PCF8574 has no direction register. An input is a pin written as 1 and
/// released to the weak pull-up; an output is a pin written as 0.
pub enum PinMode {
    /// Released to the pull-up (bit set).
    Input,
    /// Driven low (bit clear).
    Output,
}

impl From<PinMode> for bool {
    /// Register bit for the mode: `true` for input, `false` for output.
    fn from(value: PinMode) -> Self {
        match value {
            PinMode::Input => true,
            PinMode::Output => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Logical pin level.
pub enum LogicLevel {
    /// Logic high.
    High,
    /// Logic low.
    Low,
}

impl LogicLevel {
    /// Level for an active-low register bit: a clear bit is high.
    pub(crate) fn from_active_low_bit(bit: bool) -> Self {
        if bit { Self::Low } else { Self::High }
    }

    /// Register bit for this level under the active-low convention.
    pub(crate) fn active_low_bit(self) -> bool {
        matches!(self, Self::Low)
    }

    /// Whether the level is [`LogicLevel::High`].
    pub fn is_high(self) -> bool {
        matches!(self, Self::High)
    }

    /// Whether the level is [`LogicLevel::Low`].
    pub fn is_low(self) -> bool {
        matches!(self, Self::Low)
    }
}

impl From<bool> for LogicLevel {
    fn from(value: bool) -> Self {
        if value { Self::High } else { Self::Low }
    }
}

impl From<LogicLevel> for bool {
    fn from(value: LogicLevel) -> Self {
        value.is_high()
    }
}

/// One of the eight PCF8574 pins, P0 to P7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinNumber {
    /// Pin P0 (register bit 0).
    P0,
    /// Pin P1 (register bit 1).
    P1,
    /// Pin P2 (register bit 2).
    P2,
    /// Pin P3 (register bit 3).
    P3,
    /// Pin P4 (register bit 4).
    P4,
    /// Pin P5 (register bit 5).
    P5,
    /// Pin P6 (register bit 6).
    P6,
    /// Pin P7 (register bit 7).
    P7,
}

impl PinNumber {
    /// Register bit index of this pin.
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for PinNumber {
    /// The rejected pin index.
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        use PinNumber::*;
        match value {
            0 => Ok(P0),
            1 => Ok(P1),
            2 => Ok(P2),
            3 => Ok(P3),
            4 => Ok(P4),
            5 => Ok(P5),
            6 => Ok(P6),
            7 => Ok(P7),
            _ => Err(value),
        }
    }
}

impl From<PinNumber> for u8 {
    fn from(value: PinNumber) -> Self {
        value.index()
    }
}
