//! Credential comparison
//!
//! Link passwords are opaque secrets compared for exact equality. The
//! comparison is constant-time so a guess cannot be refined byte by byte.

use subtle::ConstantTimeEq;

/// Compare a supplied credential against the stored one
///
/// Length differences short-circuit; the contents are compared in
/// constant time.
pub fn credential_matches(supplied: &str, stored: &str) -> bool {
    let supplied = supplied.as_bytes();
    let stored = stored.as_bytes();

    if supplied.len() != stored.len() {
        return false;
    }

    supplied.ct_eq(stored).into()
}
