//! Arbitrary-precision sign-magnitude integers over base-2^30 words, built
//! to be driven across a C foreign-function boundary.
//!
//! A [`Bigint`] is a sign flag plus a little-endian sequence of unsigned
//! 30-bit words, backed by a buffer the value owns exclusively. The engine
//! provides the primitives a host composes into bigger operations: pre-sized
//! construction for external fill, exact-fit growth, zeroing, and in-place
//! scalar multiplication and addition with carry propagation. Decimal string
//! conversion is built on top of those same primitives.
//!
//! ```
//! use bigword::{Bigint, Sign};
//!
//! let mut value = Bigint::from_word(Sign::Positive, 7)?;
//! value.mul_word(6)?;
//! value.add_word(1)?;
//! assert_eq!(value.words(), &[43]);
//! assert_eq!(value.to_string(), "43");
//! # Ok::<(), bigword::Error>(())
//! ```
//!
//! # The boundary
//!
//! The [`ffi`] module exports the same surface as C functions operating on
//! opaque handles, for hosts that drive the engine through a foreign-call
//! boundary. Within Rust, the transience of digit views is enforced by the
//! borrow checker: [`Bigint::words`] borrows, and any mutating call ends the
//! borrow, because mutation may reallocate the buffer. Across the boundary
//! the same contract is documentation: a pointer from `bigword_words` is
//! stale after the next mutating call on its handle.
//!
//! # Scalar operands
//!
//! Both in-place operations take operands whose magnitude fits a single
//! word (below 2^30). That bound is what makes the carry logic exact: the
//! multiply's final carry is itself a valid word, and the add's single-unit
//! carry rule propagates correctly. Wider operands are rejected with a
//! precondition error rather than silently miscomputed.
//!
//! # Errors
//!
//! Allocation is fallible everywhere: construction and growth return
//! [`Error`] with category `Allocation` when the allocator refuses, and a
//! failed growth leaves the value exactly as it was. There is no internal
//! retry; recovery belongs to the caller.

#![doc(html_root_url = "https://docs.rs/bigword/0.1.0")]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod bigint;
#[cfg(feature = "serde")]
mod de;
mod error;
pub mod ffi;
mod radix;
#[cfg(feature = "serde")]
mod ser;
mod word;

pub use crate::bigint::{Bigint, Sign};
pub use crate::error::{Category, Error, Result};
pub use crate::word::{Word, WORD_BITS, WORD_MASK, WORD_MAX};
