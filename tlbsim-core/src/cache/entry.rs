use crate::error::{fatal, Error};
use crate::types::{Address, Length, TlbFlags};

/// A 4 KiB page.
pub const PAGE_4K: Length = Length::from_kb(4);
/// A 64 KiB page.
pub const PAGE_64K: Length = Length::from_kb(64);
/// A 16 MiB page.
pub const PAGE_16M: Length = Length::from_mb(16);

/// Checks that the given page size is one of the permitted sizes.
///
/// Any other size is a contract violation and aborts the process.
pub fn pagesize_validate(size: Length) {
    if size != PAGE_4K && size != PAGE_64K && size != PAGE_16M {
        fatal(Error::InvalidPageSize);
    }
}

/// Checks that only defined flag bits are set.
pub(crate) fn flags_validate(flags: TlbFlags) {
    if !TlbFlags::all().contains(flags) {
        fatal(Error::InvalidFlags);
    }
}

/**
A single cached translation.

Maps the page containing the effective address `ea` to the page containing
the real address `ra`. The hit and miss counters record how often the
simulated hardware exercised this mapping; they are excluded from
content equality.
*/
#[derive(Copy, Clone, Debug)]
pub struct TlbEntry {
    pub ea: Address,
    pub ra: Address,
    pub size: Length,
    pub flags: TlbFlags,
    pub hit_count: u64,
    pub miss_count: u64,
    pub valid: bool,
}

impl TlbEntry {
    /// An entry that holds no translation.
    pub const INVALID: TlbEntry = TlbEntry {
        ea: Address::NULL,
        ra: Address::NULL,
        size: Length::ZERO,
        flags: TlbFlags::empty(),
        hit_count: 0,
        miss_count: 0,
        valid: false,
    };

    /// Mask covering the offset bits within this entry's page.
    pub fn offset_mask(&self) -> u64 {
        self.size.as_u64() - 1
    }

    /// Mask covering the page-frame bits of this entry's addresses.
    pub fn frame_mask(&self) -> u64 {
        !self.offset_mask()
    }

    /// Checks wether the effective address falls within this entry's page.
    ///
    /// Computed via the distance from the page base so that a page at the
    /// top of the address space does not overflow.
    pub fn contains(&self, ea: Address) -> bool {
        ea >= self.ea && ea.as_u64() - self.ea.as_u64() < self.size.as_u64()
    }

    /// Compares the translation content of two entries.
    ///
    /// The hit and miss counters are deliberately not compared; an entry
    /// re-populated with an identical mapping keeps its history.
    pub fn content_eq(&self, other: &TlbEntry) -> bool {
        self.ea == other.ea
            && self.ra == other.ra
            && self.size == other.size
            && self.flags == other.flags
            && self.valid == other.valid
    }

    /// Checks every per-entry invariant.
    ///
    /// The entry must be valid, carry a permitted page size and flag set,
    /// and both of its addresses must be aligned to the page size.
    /// A violation aborts the process.
    pub fn validate(&self) {
        if !self.valid {
            fatal(Error::InvalidEntry);
        }
        pagesize_validate(self.size);
        flags_validate(self.flags);
        let mask = self.offset_mask();
        if self.ea.as_u64() & mask != 0 || self.ra.as_u64() & mask != 0 {
            fatal(Error::Misaligned);
        }
    }

    /// Translates an effective address through this entry.
    ///
    /// The low offset bits pass through from `ea` unchanged, the high bits
    /// come from the entry's real page frame. The preconditions (address in
    /// range, valid flags, valid entry) are re-verified and fatal when
    /// violated.
    pub fn translate(&self, ea: Address, flags: TlbFlags) -> Address {
        if !self.contains(ea) {
            fatal(Error::Bounds);
        }
        flags_validate(flags);
        self.validate();

        let ra = (ea.as_u64() & self.offset_mask()) | (self.ra.as_u64() & self.frame_mask());
        Address::from(ra)
    }

    /// Formats the entry the way the cache dump prints it.
    pub fn dump_line(&self) -> String {
        format!(
            "ea:{:016x} ra:{:016x} size:{:08x} flags:{:x} miss:{} hit:{}",
            self.ea.as_u64(),
            self.ra.as_u64(),
            self.size.as_u64(),
            self.flags.bits(),
            self.miss_count,
            self.hit_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_4k() -> TlbEntry {
        TlbEntry {
            ea: Address::from(0x1000),
            ra: Address::from(0x2000),
            size: PAGE_4K,
            flags: TlbFlags::empty(),
            hit_count: 0,
            miss_count: 0,
            valid: true,
        }
    }

    #[test]
    fn masks() {
        let t = entry_4k();
        assert_eq!(t.offset_mask(), 0xFFF);
        assert_eq!(t.frame_mask(), !0xFFFu64);
    }

    #[test]
    fn containment() {
        let t = entry_4k();
        assert!(t.contains(Address::from(0x1000)));
        assert!(t.contains(Address::from(0x1FFF)));
        assert!(!t.contains(Address::from(0xFFF)));
        assert!(!t.contains(Address::from(0x2000)));
    }

    #[test]
    fn containment_at_top_of_address_space() {
        let mut t = entry_4k();
        t.ea = Address::from(0xFFFF_FFFF_FFFF_F000u64);
        assert!(t.contains(Address::from(0xFFFF_FFFF_FFFF_F000u64)));
        assert!(t.contains(Address::from(0xFFFF_FFFF_FFFF_FFFFu64)));
        assert!(!t.contains(Address::from(0xFFFF_FFFF_FFFF_EFFFu64)));
    }

    #[test]
    fn content_eq_ignores_counters() {
        let t1 = entry_4k();
        let mut t2 = entry_4k();
        t2.hit_count = 17;
        t2.miss_count = 3;
        assert!(t1.content_eq(&t2));

        t2.ra = Address::from(0x3000);
        assert!(!t1.content_eq(&t2));
    }

    #[test]
    fn translate_preserves_offset() {
        let t = entry_4k();
        assert_eq!(t.translate(Address::from(0x1005), TlbFlags::empty()).as_u64(), 0x2005);
        assert_eq!(t.translate(Address::from(0x1FFF), TlbFlags::empty()).as_u64(), 0x2FFF);
    }

    #[test]
    #[should_panic]
    fn translate_out_of_range_is_fatal() {
        let t = entry_4k();
        t.translate(Address::from(0x2000), TlbFlags::empty());
    }

    #[test]
    #[should_panic]
    fn validate_rejects_misaligned_ea() {
        let mut t = entry_4k();
        t.ea = Address::from(0x1200);
        t.validate();
    }

    #[test]
    #[should_panic]
    fn validate_rejects_invalid_entry() {
        TlbEntry::INVALID.validate();
    }

    #[test]
    #[should_panic]
    fn validate_rejects_bad_pagesize() {
        let mut t = entry_4k();
        t.size = Length::from_kb(8);
        t.validate();
    }

    #[test]
    fn dump_line_format() {
        let mut t = entry_4k();
        t.flags = TlbFlags::RELOC;
        t.hit_count = 2;
        t.miss_count = 1;
        assert_eq!(
            t.dump_line(),
            "ea:0000000000001000 ra:0000000000002000 size:00001000 flags:1 miss:1 hit:2"
        );
    }
}
