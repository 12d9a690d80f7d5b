/*!
Module containing the translation cache and its entries.
*/

pub mod entry;
#[doc(hidden)]
pub use entry::{pagesize_validate, TlbEntry, PAGE_16M, PAGE_4K, PAGE_64K};

pub mod tlb_cache;
#[doc(hidden)]
pub use tlb_cache::{TlbCache, TLB_SIZE};
