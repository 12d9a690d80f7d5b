/*!
This crate contains a software model of an address-translation cache (a TLB).

It is used by test harnesses to validate that a simulated hardware
translation mechanism behaves correctly under a transactional-memory
workload. The model tracks, for a sequence of effective-address lookups and
translation updates, whether each lookup hits a cached mapping, whether
newly observed mappings contradict previously cached ones, and aggregate
statistics over a test run.

It contains abstractions over [addresses and page sizes](types/index.html),
[the cache itself](cache/index.html) and
[contract-violation errors](error/index.html).
*/

#[macro_use]
extern crate bitflags;

pub mod error;
#[doc(hidden)]
pub use error::*;

pub mod types;
#[doc(hidden)]
pub use types::*;

pub mod cache;
#[doc(hidden)]
pub use cache::*;
