//! The C boundary surface.
//!
//! Every export follows the same conventions: `#[no_mangle]` + `extern "C"`
//! under a `bigword_` prefix, handles created by `Box::into_raw` and released
//! by `Box::from_raw`, NULL from constructors that fail (with nothing
//! leaked), and integer status codes from fallible mutation. Handles are
//! opaque to the host: digit storage is reached only through
//! [`bigword_words`], and a pointer obtained from it is invalidated by the
//! next mutating call on the same handle, because the buffer may move.
//!
//! Only plain numeric arguments cross the boundary: signs as small integer
//! tags (-1, 0, 1), lengths as non-negative integers, words as fixed-width
//! integers. Ownership is caller-driven; each constructed handle must be
//! paired with exactly one [`bigword_free`]. No exported function panics.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::ffi::c_int;
use core::{ptr, slice, str};

use crate::bigint::{Bigint, Sign};
use crate::error::{Category, Error};

/// Operation completed.
pub const BIGWORD_OK: c_int = 0;
/// The allocator could not satisfy a construction or growth request; the
/// value the operation ran against is unchanged.
pub const BIGWORD_ENOMEM: c_int = 1;
/// An operand was outside the single-word range the operation accepts; the
/// value is unchanged.
pub const BIGWORD_ERANGE: c_int = 2;
/// A NULL handle or an invalid argument.
pub const BIGWORD_EINVAL: c_int = 3;

fn status(result: Result<(), Error>) -> c_int {
    match result {
        Ok(()) => BIGWORD_OK,
        Err(error) => match error.classify() {
            Category::Allocation => BIGWORD_ENOMEM,
            Category::Precondition => BIGWORD_ERANGE,
            Category::Parse => BIGWORD_EINVAL,
        },
    }
}

/// Create a pre-sized value ready to be filled through [`bigword_words`].
///
/// `sign` is a tag in {-1, 0, 1} and `word_count` the number of significant
/// words, at least 1. `capacity` words are allocated and zeroed; pass -1 to
/// mean "equal to `word_count`". Returns NULL, leaking nothing, if an
/// argument is out of range or allocation fails.
#[no_mangle]
pub extern "C" fn bigword_new(sign: c_int, word_count: c_int, capacity: c_int) -> *mut Bigint {
    let sign = match Sign::from_tag(sign) {
        Some(sign) => sign,
        None => return ptr::null_mut(),
    };
    if word_count < 1 {
        return ptr::null_mut();
    }
    let hint = if capacity < 0 {
        None
    } else {
        Some(capacity as usize)
    };
    match Bigint::zeroed(sign, word_count as usize, hint) {
        Ok(value) => Box::into_raw(Box::new(value)),
        Err(_) => ptr::null_mut(),
    }
}

/// Create a length-1 value from a single word, masked to 30 bits.
///
/// Returns NULL if the sign tag is not in {-1, 0, 1} or allocation fails.
#[no_mangle]
pub extern "C" fn bigword_from_word(sign: c_int, value: u32) -> *mut Bigint {
    let sign = match Sign::from_tag(sign) {
        Some(sign) => sign,
        None => return ptr::null_mut(),
    };
    match Bigint::from_word(sign, value) {
        Ok(value) => Box::into_raw(Box::new(value)),
        Err(_) => ptr::null_mut(),
    }
}

/// Parse a value from `len` bytes of ASCII decimal, with an optional leading
/// `-`. Returns NULL on invalid input or allocation failure.
///
/// # Safety
///
/// `buf` must point to `len` readable bytes.
#[no_mangle]
pub unsafe extern "C" fn bigword_from_decimal(buf: *const u8, len: usize) -> *mut Bigint {
    if buf.is_null() {
        return ptr::null_mut();
    }
    let bytes = slice::from_raw_parts(buf, len);
    let text = match str::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => return ptr::null_mut(),
    };
    match text.parse::<Bigint>() {
        Ok(value) => Box::into_raw(Box::new(value)),
        Err(_) => ptr::null_mut(),
    }
}

/// Release a handle: the digit storage first, then the handle itself.
///
/// # Safety
///
/// `handle` must have come from one of this module's constructors and must
/// not be used again afterwards; freeing twice is undefined. NULL is a no-op.
#[no_mangle]
pub unsafe extern "C" fn bigword_free(handle: *mut Bigint) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Grow the handle's buffer to hold at least `word_count` words, zero-filling
/// the new region. A request at or below the current capacity is a no-op.
/// On failure the value is left untouched.
///
/// # Safety
///
/// `handle` must be a live handle from this module, not mutated concurrently.
#[no_mangle]
pub unsafe extern "C" fn bigword_reserve(handle: *mut Bigint, word_count: c_int) -> c_int {
    let value = match handle.as_mut() {
        Some(value) => value,
        None => return BIGWORD_EINVAL,
    };
    if word_count < 0 {
        return BIGWORD_EINVAL;
    }
    status(value.ensure_capacity(word_count as usize))
}

/// Reset the value to canonical zero, clearing every allocated word.
///
/// # Safety
///
/// `handle` must be a live handle from this module, not mutated concurrently.
#[no_mangle]
pub unsafe extern "C" fn bigword_set_zero(handle: *mut Bigint) {
    if let Some(value) = handle.as_mut() {
        value.set_zero();
    }
}

/// Multiply the value in place by a scalar whose magnitude fits one word.
///
/// # Safety
///
/// `handle` must be a live handle from this module, not mutated concurrently.
#[no_mangle]
pub unsafe extern "C" fn bigword_mul_word(handle: *mut Bigint, multiplicand: i32) -> c_int {
    match handle.as_mut() {
        Some(value) => status(value.mul_word(multiplicand)),
        None => BIGWORD_EINVAL,
    }
}

/// Add a magnitude increment that fits one word to the value in place.
///
/// # Safety
///
/// `handle` must be a live handle from this module, not mutated concurrently.
#[no_mangle]
pub unsafe extern "C" fn bigword_add_word(handle: *mut Bigint, addend: u32) -> c_int {
    match handle.as_mut() {
        Some(value) => status(value.add_word(addend)),
        None => BIGWORD_EINVAL,
    }
}

/// Base pointer of the digit storage, least significant word first.
///
/// The host may read and write the first `bigword_word_count(handle)` words;
/// written words must stay below 2^30. The pointer is valid only until the
/// next mutating call on the same handle. Returns NULL for a NULL handle.
///
/// # Safety
///
/// `handle` must be a live handle from this module.
#[no_mangle]
pub unsafe extern "C" fn bigword_words(handle: *mut Bigint) -> *mut u32 {
    match handle.as_mut() {
        Some(value) => value.words_mut().as_mut_ptr(),
        None => ptr::null_mut(),
    }
}

/// Number of significant words, or 0 for a NULL handle.
///
/// # Safety
///
/// `handle` must be a live handle from this module.
#[no_mangle]
pub unsafe extern "C" fn bigword_word_count(handle: *const Bigint) -> c_int {
    match handle.as_ref() {
        Some(value) => value.word_count() as c_int,
        None => 0,
    }
}

/// Sign tag of the value: -1, 0 or 1. Returns 0 for a NULL handle.
///
/// # Safety
///
/// `handle` must be a live handle from this module.
#[no_mangle]
pub unsafe extern "C" fn bigword_sign(handle: *const Bigint) -> c_int {
    match handle.as_ref() {
        Some(value) => value.sign().tag(),
        None => 0,
    }
}

/// Write the value as ASCII decimal into a caller-supplied buffer.
///
/// Returns the number of bytes written (no NUL terminator is appended), or
/// -1 if the handle or buffer is NULL or `cap` bytes are not enough. The
/// worst case is one byte per three magnitude bits, plus one for the sign.
///
/// # Safety
///
/// `handle` must be a live handle from this module and `buf` must point to
/// `cap` writable bytes.
#[no_mangle]
pub unsafe extern "C" fn bigword_to_decimal(
    handle: *const Bigint,
    buf: *mut u8,
    cap: usize,
) -> isize {
    let value = match handle.as_ref() {
        Some(value) => value,
        None => return -1,
    };
    if buf.is_null() {
        return -1;
    }
    let text = value.to_string();
    if text.len() > cap {
        return -1;
    }
    ptr::copy_nonoverlapping(text.as_ptr(), buf, text.len());
    text.len() as isize
}
