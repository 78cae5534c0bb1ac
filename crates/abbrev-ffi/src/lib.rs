// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// abbrev-ffi: C-compatible FFI layer for the abbreviation matcher.
//
// Memory management rules:
// - Opaque `Matcher` pointer: created by `abbrev_matcher_new_default` or
//   `abbrev_matcher_new_from_classes`, freed by `abbrev_matcher_free`.
// - Returned error strings: caller must free with `abbrev_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use abbrev_core::EquivalenceClass;
use abbrev_search::Matcher;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a matcher over the built-in street-name corpus.
///
/// The corpus is compiled once per process and shared by every handle.
/// Free the result with `abbrev_matcher_free`.
#[unsafe(no_mangle)]
pub extern "C" fn abbrev_matcher_new_default() -> *mut Matcher {
    Box::into_raw(Box::new(Matcher::with_default_corpus()))
}

/// Create a matcher from caller-supplied equivalence classes.
///
/// `data` + `len` hold UTF-8 tokens, each terminated by a NUL byte. An empty
/// token (two consecutive NULs) ends the current class; a final class may
/// omit it. For example `"street\0st\0\0north\0n\0"` describes two classes.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error
/// string that the caller must free with `abbrev_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abbrev_matcher_new_from_classes(
    data: *const u8,
    len: usize,
    error_out: *mut *mut c_char,
) -> *mut Matcher {
    let bytes: &[u8] = if data.is_null() || len == 0 {
        &[]
    } else {
        unsafe { slice::from_raw_parts(data, len) }
    };

    let lists = match split_classes(bytes) {
        Ok(lists) => lists,
        Err(msg) => {
            set_error(error_out, &msg);
            return ptr::null_mut();
        }
    };

    match EquivalenceClass::from_lists(&lists) {
        Ok(classes) => Box::into_raw(Box::new(Matcher::from_classes(&classes))),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a matcher created by one of the `abbrev_matcher_new_*` functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abbrev_matcher_free(handle: *mut Matcher) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Comparison ──────────────────────────────────────────────────

/// Compare two strings under abbreviation and expansion.
/// Returns 1 for a match, 0 for no match, -1 on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abbrev_compare(
    handle: *const Matcher,
    a: *const c_char,
    b: *const c_char,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return -1;
    };
    let (Some(a), Some(b)) = (cstr_to_str(a), cstr_to_str(b)) else {
        return -1;
    };
    if handle.compare(a, b).is_match() { 1 } else { 0 }
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned through an `error_out` parameter.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn abbrev_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

/// Split a NUL-separated class buffer into token lists.
fn split_classes(bytes: &[u8]) -> Result<Vec<Vec<String>>, String> {
    let mut classes = Vec::new();
    let mut current: Vec<String> = Vec::new();

    let body = bytes.strip_suffix(&[0u8]).unwrap_or(bytes);
    if body.is_empty() {
        return Ok(classes);
    }
    for token in body.split(|&b| b == 0) {
        if token.is_empty() {
            if !current.is_empty() {
                classes.push(std::mem::take(&mut current));
            }
            continue;
        }
        let token = std::str::from_utf8(token)
            .map_err(|e| format!("class data is not valid UTF-8: {e}"))?;
        current.push(token.to_string());
    }
    if !current.is_empty() {
        classes.push(current);
    }
    Ok(classes)
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = CString::new(msg).unwrap_or_default().into_raw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_class_buffer() {
        let classes = split_classes(b"street\0st\0\0north\0n\0").unwrap();
        assert_eq!(classes, vec![vec!["street", "st"], vec!["north", "n"]]);
        assert!(split_classes(b"").unwrap().is_empty());
        assert_eq!(split_classes(b"a\0b").unwrap(), vec![vec!["a", "b"]]);
        assert!(split_classes(b"\xff\0").is_err());
    }

    #[test]
    fn compare_through_the_c_abi() {
        let data = b"street\0st\0\0north\0n\0";
        let mut error: *mut c_char = ptr::null_mut();
        let handle =
            unsafe { abbrev_matcher_new_from_classes(data.as_ptr(), data.len(), &mut error) };
        assert!(!handle.is_null());
        assert!(error.is_null());

        let a = CString::new("123 North Street").unwrap();
        let b = CString::new("123 N St").unwrap();
        let c = CString::new("123 North Boulevard").unwrap();
        unsafe {
            assert_eq!(abbrev_compare(handle, a.as_ptr(), b.as_ptr()), 1);
            assert_eq!(abbrev_compare(handle, a.as_ptr(), c.as_ptr()), 0);
            assert_eq!(abbrev_compare(handle, a.as_ptr(), ptr::null()), -1);
            assert_eq!(abbrev_compare(ptr::null(), a.as_ptr(), b.as_ptr()), -1);
            abbrev_matcher_free(handle);
        }
    }

    #[test]
    fn empty_token_reports_error() {
        let data = b"street\0 \0";
        let mut error: *mut c_char = ptr::null_mut();
        let handle =
            unsafe { abbrev_matcher_new_from_classes(data.as_ptr(), data.len(), &mut error) };
        assert!(handle.is_null());
        assert!(!error.is_null());
        let msg = unsafe { CStr::from_ptr(error) }.to_str().unwrap().to_string();
        assert!(msg.contains("empty"), "{msg}");
        unsafe { abbrev_free_str(error) };
    }

    #[test]
    fn default_handle_matches() {
        let handle = abbrev_matcher_new_default();
        let a = CString::new("Foobar Rd").unwrap();
        let b = CString::new("Foobar Road").unwrap();
        unsafe {
            assert_eq!(abbrev_compare(handle, a.as_ptr(), b.as_ptr()), 1);
            abbrev_matcher_free(handle);
        }
    }
}
