use super::entry::{flags_validate, pagesize_validate, TlbEntry};
use crate::error::{fatal, Error};
use crate::types::{Address, Length, TlbFlags};

use log::{debug, trace};

/// Number of translation slots in the cache.
pub const TLB_SIZE: usize = 256;

/**
A software model of an address-translation cache.

The cache holds up to [`TLB_SIZE`] translations in insertion order. Valid
entries always occupy a contiguous prefix of the slot array; the `next`
cursor marks the first unused slot. Entries are only created or replaced
through [`set`](TlbCache::set), there is no standalone delete.

Lookups scan the store linearly. The scan order is semantically
load-bearing: it determines which entry is credited with a hit when more
than one entry could match, and it determines the exact overlap-detection
behavior during validation.

Every mutation re-validates the whole store. A violated invariant aborts
the process; it indicates a defect in the caller or in the simulated
hardware model, not a runtime condition to recover from.
*/
pub struct TlbCache {
    entries: Box<[TlbEntry]>,
    next: usize,
    translations: u64,
    no_translation: u64,
    translation_changes: u64,
    verbose: bool,
}

impl TlbCache {
    /// Creates an empty cache and confirms the empty-state invariants.
    pub fn new() -> Self {
        let mut cache = Self {
            entries: vec![TlbEntry::INVALID; TLB_SIZE].into_boxed_slice(),
            next: 0,
            translations: 0,
            no_translation: 0,
            translation_changes: 0,
            verbose: false,
        };
        cache.validate();
        cache
    }

    /// Runs the final invariant check and consumes the cache.
    pub fn teardown(mut self) {
        self.validate();
    }

    /// Enables or disables verbose match tracing.
    ///
    /// When enabled, every match attempt prints the probed effective
    /// address, the probed flags and the candidate entry before the match
    /// test. Useful for diagnosing unexpected misses.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Number of occupied translation slots.
    pub fn len(&self) -> usize {
        self.next
    }

    /// Checks wether the cache holds no translations.
    pub fn is_empty(&self) -> bool {
        self.next == 0
    }

    /// Total number of lookups attempted.
    pub fn translations(&self) -> u64 {
        self.translations
    }

    /// Number of lookups that found no cached translation.
    pub fn no_translation(&self) -> u64 {
        self.no_translation
    }

    /// Number of replacements where a valid entry's content changed.
    pub fn translation_changes(&self) -> u64 {
        self.translation_changes
    }

    /// Scans the store from `start` (inclusive) to the cursor in insertion
    /// order and returns the index of the first entry whose page contains
    /// `ea` under equal flags.
    ///
    /// Every candidate is re-validated before the match test. On a match
    /// the entry's hit counter is incremented; the hardware translation
    /// path was exercised for it.
    pub fn find(&mut self, ea: Address, flags: TlbFlags, start: usize) -> Option<usize> {
        for i in start..self.next {
            let t = self.entries[i];
            t.validate();

            if self.verbose {
                println!(
                    "tlb match ea:{:016x} flags:{:x} {}",
                    ea.as_u64(),
                    flags.bits(),
                    t.dump_line()
                );
            }

            if t.contains(ea) && t.flags == flags {
                self.entries[i].hit_count += 1;
                return Some(i);
            }
        }
        None
    }

    /// Returns the index of the first entry matching `ea` under `flags`.
    pub fn get(&mut self, ea: Address, flags: TlbFlags) -> Option<usize> {
        self.find(ea, flags, 0)
    }

    /// Looks up the real address for an effective address.
    ///
    /// Returns the translated real address together with the page size of
    /// the matched entry, or `None` when no cached translation exists.
    /// A miss is ordinary control flow; the caller is expected to supply
    /// the mapping via [`set`](TlbCache::set).
    pub fn lookup(&mut self, ea: Address, flags: TlbFlags) -> Option<(Address, Length)> {
        self.translations += 1;

        let index = match self.get(ea, flags) {
            Some(index) => index,
            None => {
                trace!("lookup ea={:x} flags={:x}: no translation", ea, flags.bits());
                self.no_translation += 1;
                return None;
            }
        };

        let t = self.entries[index];
        let ra = t.translate(ea, flags);
        trace!(
            "lookup ea={:x} flags={:x}: ra={:x} pagesize={:x}",
            ea,
            flags.bits(),
            ra,
            t.size
        );
        Some((ra, t.size))
    }

    /// Records a translation observed from the simulated hardware.
    ///
    /// The slot is resolved against the address ranges already stored, not
    /// against the new mapping. A mapping identical to the stored one only
    /// bumps the entry's miss counter and leaves the store untouched. A
    /// different mapping over a valid slot counts as a translation change
    /// and replaces the slot with fresh counters. A mapping with no
    /// matching slot is appended at the cursor; appending past capacity is
    /// fatal.
    pub fn set(&mut self, ea: Address, flags: TlbFlags, ra: Address, pagesize: Length) {
        pagesize_validate(pagesize);
        flags_validate(flags);

        let index = match self.get(ea, flags) {
            Some(index) => index,
            None => {
                // No entry found, so put it at the end
                let index = self.next;
                if index >= TLB_SIZE {
                    fatal(Error::Capacity);
                }
                self.next += 1;
                index
            }
        };

        let tnew = TlbEntry {
            ea: ea.as_page_aligned(pagesize),
            ra: ra.as_page_aligned(pagesize),
            size: pagesize,
            flags,
            hit_count: 0,
            miss_count: 0,
            valid: true,
        };

        if tnew.content_eq(&self.entries[index]) {
            // This missed in the hardware
            trace!("set ea={:x} flags={:x}: known mapping", ea, flags.bits());
            self.entries[index].miss_count += 1;
            return;
        } else if self.entries[index].valid {
            debug!(
                "set ea={:x} flags={:x}: translation changed, old: {}",
                ea,
                flags.bits(),
                self.entries[index].dump_line()
            );
            self.translation_changes += 1;
        }

        self.entries[index] = tnew;
        self.validate();
    }

    /// Checks every whole-store invariant.
    ///
    /// For every valid entry, the first and last address of its page must
    /// not match any later entry under the same flags. Every slot past the
    /// first invalid one must also be invalid.
    fn validate(&mut self) {
        if self.next > TLB_SIZE {
            fatal(Error::Capacity);
        }

        // Check for overlaps
        for i in 0..self.next {
            let t = self.entries[i];
            // Check start of page
            if self.find(t.ea, t.flags, i + 1).is_some() {
                fatal(Error::Overlap);
            }
            // Check end of page
            if self
                .find(t.ea + (t.size - Length::from(1)), t.flags, i + 1)
                .is_some()
            {
                fatal(Error::Overlap);
            }
        }

        // Check for holes
        let mut valid_last = true;
        for t in self.entries.iter() {
            if t.valid && !valid_last {
                fatal(Error::BrokenPrefix);
            }
            valid_last = t.valid;
        }
    }

    /// Builds the debug dump text: one line per stored entry in index
    /// order followed by the aggregate counters.
    pub fn dump_str(&self) -> String {
        let mut out = String::new();
        for (i, t) in self.entries[..self.next].iter().enumerate() {
            out.push_str(&format!("TLBDUMP {:02}: {}\n", i, t.dump_line()));
        }
        out.push_str(&format!(
            "TLBDUMP no translation: {} of {}\n",
            self.no_translation, self.translations
        ));
        out.push_str(&format!(
            "TLBDUMP replaced translations: {}\n",
            self.translation_changes
        ));
        out
    }

    /// Prints the debug dump to standard output.
    pub fn dump(&self) {
        print!("{}", self.dump_str());
    }
}

/// Returns an empty, validated cache.
impl Default for TlbCache {
    fn default() -> Self {
        Self::new()
    }
}
