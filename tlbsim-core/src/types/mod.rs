/*!
Module with basic types used in the TLB model.

This module contains types for handling effective and real addresses,
page sizes and translation flags.
*/

pub mod address;
#[doc(hidden)]
pub use address::Address;

pub mod length;
#[doc(hidden)]
pub use length::Length;

pub mod flags;
#[doc(hidden)]
pub use flags::TlbFlags;
