//! # arrowstatus-core
//!
//! A compact operation-result value for fallible library calls.
//!
//! A [`Status`] is either ok or an error carrying a [`StatusCode`], a free-form
//! message, and an auxiliary numeric code (usually an errno). The ok value is a
//! single null word, so returning and checking success never allocates.
//!
//! This crate provides:
//! - [`Status`]: the result value with deep-copy clone semantics.
//! - [`StatusCode`] and [`LabelStyle`]: the error-kind enumeration and its labels.
//! - [`packed`]: the `length | code | aux | message` record wire form.
//! - [`errno`]: platform error numbers carried as auxiliary codes.
//! - [`return_not_ok!`] and [`try_status!`]: early-return propagation.
//!
//! Multiple threads can call `&self` methods on the same `Status` without
//! synchronization. Anything that mutates a `Status` in place needs `&mut`,
//! so sharing a mutable one across threads requires an external lock.

#![forbid(unsafe_code)]

pub mod code;
pub mod errno;
#[macro_use]
mod macros;
pub mod packed;
pub mod status;

pub use code::{LabelStyle, ParseStatusCodeError, StatusCode};
pub use packed::{PACKED_HEADER_SIZE, PackedError, PackedStatus};
pub use status::{NO_AUXILIARY_CODE, Status};
