//! C-API Bindings
//!
//! Exposes BLAKE2b to C/C++ via FFI with pointer checks and panic boundaries.

#![allow(unsafe_code)]

use crate::oneshot;
use crate::streaming::Blake2bHasher;
use crate::types::Error;

use std::slice;

// =============================================================================
// RETURN CODES
// =============================================================================

/// Success (or "match" for verification).
pub const BLAKE2B_OK: i32 = 0;
/// A required pointer was null.
pub const BLAKE2B_ERR_NULL: i32 = -1;
/// A panic was caught at the boundary (e.g. failed self-test).
pub const BLAKE2B_ERR_PANIC: i32 = -2;
/// Digest size outside 1..=64, or output buffer of the wrong size.
pub const BLAKE2B_ERR_SIZE: i32 = -3;

/// Borrow `len` bytes at `ptr`; a null pointer is only accepted for `len == 0`.
unsafe fn input_slice<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

const fn error_code(err: &Error) -> i32 {
    match err {
        Error::ParameterOutOfRange { .. } | Error::OutputSizeMismatch { .. } => BLAKE2B_ERR_SIZE,
        Error::InitializationFailed(_) => BLAKE2B_ERR_PANIC,
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Compute a BLAKE2b digest of `output_len` bytes (1 to 64).
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for `output_len` writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic or failed self-test
/// - `-3`: `output_len` out of range
#[no_mangle]
pub unsafe extern "C" fn blake2b_hash(
    input_ptr: *const u8,
    input_len: usize,
    output_ptr: *mut u8,
    output_len: usize,
) -> i32 {
    if output_ptr.is_null() {
        return BLAKE2B_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return BLAKE2B_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let out = slice::from_raw_parts_mut(output_ptr, output_len);
        oneshot::hash_into(input, out)
    });

    match result {
        Ok(Ok(())) => BLAKE2B_OK,
        Ok(Err(e)) => error_code(&e),
        Err(_) => BLAKE2B_ERR_PANIC,
    }
}

/// Verify `tag_len` bytes at `tag_ptr` against the digest of the input, in
/// constant time. The digest size is `tag_len`.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `tag_ptr` must be valid for `tag_len` bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match (including `tag_len` outside 1..=64)
/// - `-1`: Null pointer
/// - `-2`: Panic or failed self-test
#[no_mangle]
pub unsafe extern "C" fn blake2b_verify(
    input_ptr: *const u8,
    input_len: usize,
    tag_ptr: *const u8,
    tag_len: usize,
) -> i32 {
    if tag_ptr.is_null() {
        return BLAKE2B_ERR_NULL;
    }
    let Some(input) = input_slice(input_ptr, input_len) else {
        return BLAKE2B_ERR_NULL;
    };

    let result = std::panic::catch_unwind(|| {
        let tag = slice::from_raw_parts(tag_ptr, tag_len);
        oneshot::verify(input, tag)
    });

    match result {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => BLAKE2B_ERR_PANIC,
    }
}

// =============================================================================
// STREAMING API
// =============================================================================

/// Opaque hasher handle for C.
pub struct Blake2bHasherPtr(Blake2bHasher);

/// Create a hasher for `digest_size` bytes. Returns NULL if the size is out of
/// range or the self-test fails. Caller must free with `blake2b_hasher_free`
/// or `blake2b_hasher_finalize`.
#[no_mangle]
pub extern "C" fn blake2b_hasher_new(digest_size: usize) -> *mut Blake2bHasherPtr {
    let Ok(hasher) = Blake2bHasher::new(digest_size) else {
        return std::ptr::null_mut();
    };
    Box::into_raw(Box::new(Blake2bHasherPtr(hasher)))
}

/// Feed data into the hasher.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `blake2b_hasher_new`
/// - `data_ptr` must be valid for `len` bytes (may be null if `len == 0`)
#[no_mangle]
pub unsafe extern "C" fn blake2b_hasher_update(
    state_ptr: *mut Blake2bHasherPtr,
    data_ptr: *const u8,
    len: usize,
) {
    if state_ptr.is_null() {
        return;
    }
    let Some(data) = input_slice(data_ptr, len) else {
        return;
    };
    (*state_ptr).0.update(data);
}

/// Verify a tag against everything absorbed so far without consuming the
/// hasher.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `blake2b_hasher_new`
/// - `tag_ptr` must be valid for `tag_len` bytes
///
/// # Returns
/// - `1`: Match
/// - `0`: No match (including a `tag_len` different from the digest size)
/// - `-1`: Null pointer
#[no_mangle]
pub unsafe extern "C" fn blake2b_hasher_verify(
    state_ptr: *const Blake2bHasherPtr,
    tag_ptr: *const u8,
    tag_len: usize,
) -> i32 {
    if state_ptr.is_null() || tag_ptr.is_null() {
        return BLAKE2B_ERR_NULL;
    }
    let tag = slice::from_raw_parts(tag_ptr, tag_len);
    i32::from((*state_ptr).0.verify(tag))
}

/// Finalize and write the digest. Frees the hasher in every case except a
/// null `state_ptr`; do not call `blake2b_hasher_free` after this.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `blake2b_hasher_new`
/// - `out_ptr` must be valid for `out_len` writable bytes
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-3`: `out_len` differs from the digest size
#[no_mangle]
pub unsafe extern "C" fn blake2b_hasher_finalize(
    state_ptr: *mut Blake2bHasherPtr,
    out_ptr: *mut u8,
    out_len: usize,
) -> i32 {
    if state_ptr.is_null() {
        return BLAKE2B_ERR_NULL;
    }
    let state = Box::from_raw(state_ptr);
    if out_ptr.is_null() {
        return BLAKE2B_ERR_NULL;
    }
    let out = slice::from_raw_parts_mut(out_ptr, out_len);
    match state.0.finalize_into(out) {
        Ok(()) => BLAKE2B_OK,
        Err(e) => error_code(&e),
    }
}

/// Free a hasher without finalizing.
///
/// # Safety
/// - `state_ptr` must be a live pointer obtained from `blake2b_hasher_new`, or null
#[no_mangle]
pub unsafe extern "C" fn blake2b_hasher_free(state_ptr: *mut Blake2bHasherPtr) {
    if !state_ptr.is_null() {
        drop(Box::from_raw(state_ptr));
    }
}

// =============================================================================
// TESTS
// =============================================================================
