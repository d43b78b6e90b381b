use core::cell::BorrowMutError;

#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The registration domain is disabled, or the operation is not
    /// available on this modem.
    Unsupported,

    /// The transaction succeeded, but the modem reported a value outside of
    /// the valid range.
    DeviceError,

    /// The AT channel is already owned by an in-flight transaction.
    Busy,

    Atat(atat::Error),
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter<'_>) {
        match self {
            Self::Unsupported => defmt::write!(f, "Unsupported"),
            Self::DeviceError => defmt::write!(f, "DeviceError"),
            Self::Busy => defmt::write!(f, "Busy"),
            Self::Atat(e) => defmt::write!(f, "Atat({:?})", e),
        }
    }
}

impl From<atat::Error> for Error {
    fn from(e: atat::Error) -> Self {
        Self::Atat(e)
    }
}

impl From<BorrowMutError> for Error {
    fn from(_: BorrowMutError) -> Self {
        Self::Busy
    }
}
