//! Constant-time byte comparisons
//!
//! Comparisons of secret-bearing buffers must not short-circuit on the first
//! differing byte. These helpers wrap `subtle` so callers never hand-roll the
//! comparison loop.

use subtle::{Choice, ConstantTimeEq};

/// Constant-time equality of two byte slices.
///
/// Runs in time dependent only on the slice lengths. Slices of different
/// lengths compare unequal (the length itself is not treated as secret).
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time equality returning a `Choice` for further masked arithmetic.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}
