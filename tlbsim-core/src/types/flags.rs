/*!
This module contains the translation flag bits.
*/

use crate::error::{Error, Result};

bitflags! {
    /// Classification bits distinguishing translation contexts.
    ///
    /// Two mappings with different flags never match each other, even when
    /// their address ranges coincide.
    pub struct TlbFlags: u64 {
        /// The translation was performed with relocation enabled.
        const RELOC = 0b0000_0001;
    }
}

impl TlbFlags {
    /// Constructs the flag set from raw bits supplied by the simulated hardware.
    ///
    /// Any bit outside of the defined flag set is a contract violation.
    pub fn from_raw(bits: u64) -> Result<TlbFlags> {
        TlbFlags::from_bits(bits).ok_or(Error::InvalidFlags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw() {
        assert_eq!(TlbFlags::from_raw(0), Ok(TlbFlags::empty()));
        assert_eq!(TlbFlags::from_raw(1), Ok(TlbFlags::RELOC));
        assert_eq!(TlbFlags::from_raw(2), Err(Error::InvalidFlags));
        assert_eq!(TlbFlags::from_raw(0x80), Err(Error::InvalidFlags));
    }
}
