/*!
Specialized `Error` and `Result` types for the TLB model.

Every variant describes a contract violation. Violations indicate a defect
in the caller or in the simulated hardware model, not an expected runtime
condition, so validation routines abort the process through [`fatal`]
instead of returning these as recoverable errors.
*/

use std::{error, fmt, result};

/// Specialized `Error` type for TLB contract violations.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Invalid page size.
    ///
    /// The page size is not one of the permitted sizes.
    InvalidPageSize,
    /// Invalid flags.
    ///
    /// A flag bit outside of the permitted flag set is set.
    InvalidFlags,
    /// Invalid entry.
    ///
    /// An entry on a validated path is not marked valid.
    InvalidEntry,
    /// Misaligned entry.
    ///
    /// An entry's effective or real address is not aligned to its page size.
    Misaligned,
    /// Out of bounds.
    ///
    /// The probed address does not fall within the entry's page.
    Bounds,
    /// Overlapping translations.
    ///
    /// Two valid entries with equal flags cover overlapping address ranges.
    Overlap,
    /// Broken valid-entry prefix.
    ///
    /// A valid slot follows an invalid one.
    BrokenPrefix,
    /// Cache capacity exhausted.
    ///
    /// An append was attempted while every slot is occupied.
    Capacity,
}

impl Error {
    /// Returns a simple string representation of the error.
    pub fn to_str(self) -> &'static str {
        match self {
            Error::InvalidPageSize => "invalid page size",
            Error::InvalidFlags => "invalid flag bits",
            Error::InvalidEntry => "entry not valid",
            Error::Misaligned => "misaligned entry address",
            Error::Bounds => "address out of entry bounds",
            Error::Overlap => "overlapping translations",
            Error::BrokenPrefix => "valid entry after invalid slot",
            Error::Capacity => "translation cache full",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl error::Error for Error {}

/// Specialized `Result` type for fallible TLB model constructors.
pub type Result<T> = result::Result<T, Error>;

/// Aborts the process on a contract violation.
///
/// Downstream code must not attempt to continue after this signal; the
/// cache state can no longer be trusted.
#[cold]
pub(crate) fn fatal(err: Error) -> ! {
    log::error!("contract violation: {}", err);
    panic!("contract violation: {}", err);
}
