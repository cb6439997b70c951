use core::fmt;

use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource};

/// Wrapper for problems when communicating with the PCF8574.
///
/// Every variant encloses the error returned by the underlying bus. The
/// variant is chosen from the bus error's [`ErrorKind`], and [`Error::code`]
/// gives the matching numeric status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The bus transaction did not complete (bus error, lost arbitration or
    /// overrun).
    Transmission(E),
    /// The PCF8574 did not acknowledge its address.
    ///
    /// Usually this means the device is absent or the address is wrong.
    AddressNack(E),
    /// The PCF8574 did not acknowledge a data byte.
    DataNack(E),
    /// The bus reported some other error.
    Other(E),
}

impl<E: i2c::Error> Error<E> {
    /// Classify an error returned by the bus.
    pub(crate) fn from_bus(error: E) -> Self {
        match error.kind() {
            ErrorKind::Bus | ErrorKind::ArbitrationLoss | ErrorKind::Overrun => {
                Self::Transmission(error)
            }
            ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address) => Self::AddressNack(error),
            ErrorKind::NoAcknowledge(_) => Self::DataNack(error),
            _ => Self::Other(error),
        }
    }
}

impl<E> Error<E> {
    /// Numeric status for this error.
    ///
    /// | Code | Meaning            |
    /// |------|--------------------|
    /// | 1    | transmission error |
    /// | 2    | address NACK       |
    /// | 3    | data NACK          |
    /// | 4    | other bus error    |
    ///
    /// Success has no `Error`, and corresponds to 0.
    pub fn code(&self) -> u8 {
        match self {
            Error::Transmission(_) => 1,
            Error::AddressNack(_) => 2,
            Error::DataNack(_) => 3,
            Error::Other(_) => 4,
        }
    }

    /// The error returned by the underlying bus.
    pub fn bus_error(&self) -> &E {
        match self {
            Error::Transmission(e)
            | Error::AddressNack(e)
            | Error::DataNack(e)
            | Error::Other(e) => e,
        }
    }

    /// Consume the wrapper and return the underlying bus error.
    pub fn into_bus_error(self) -> E {
        match self {
            Error::Transmission(e)
            | Error::AddressNack(e)
            | Error::DataNack(e)
            | Error::Other(e) => e,
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Error::Transmission(_) => "transmission error",
            Error::AddressNack(_) => "address not acknowledged",
            Error::DataNack(_) => "data not acknowledged",
            Error::Other(_) => "bus error",
        };
        write!(f, "{what} (status {}): {:?}", self.code(), self.bus_error())
    }
}

impl<E: fmt::Debug> std::error::Error for Error<E> {}

impl<E: fmt::Debug> i2c::Error for Error<E> {
    fn kind(&self) -> ErrorKind {
        use NoAcknowledgeSource::{Address, Data};
        match self {
            Error::Transmission(_) => ErrorKind::Bus,
            Error::AddressNack(_) => ErrorKind::NoAcknowledge(Address),
            Error::DataNack(_) => ErrorKind::NoAcknowledge(Data),
            Error::Other(_) => ErrorKind::Other,
        }
    }
}

impl<E: fmt::Debug> embedded_hal::digital::Error for Error<E> {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        // The only digital error kind.
        embedded_hal::digital::ErrorKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_kind() {
        use NoAcknowledgeSource::{Address, Data, Unknown};
        let cases = [
            (ErrorKind::Bus, 1),
            (ErrorKind::ArbitrationLoss, 1),
            (ErrorKind::Overrun, 1),
            (ErrorKind::NoAcknowledge(Address), 2),
            (ErrorKind::NoAcknowledge(Data), 3),
            (ErrorKind::NoAcknowledge(Unknown), 3),
            (ErrorKind::Other, 4),
        ];
        for (kind, code) in cases {
            let error = Error::from_bus(kind);
            assert_eq!(error.code(), code, "{kind:?}");
            assert_eq!(*error.bus_error(), kind);
        }
    }

    #[test]
    fn display_names_status() {
        let error = Error::from_bus(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
        assert!(error.to_string().contains("status 2"));
    }
}
