//! Base-pairing rules.
//!
//! A pair is accepted when it is one of the Watson-Crick pairs (A-U, C-G) or the
//! G-U wobble pair. The check is order-insensitive and never fails: anything else,
//! including self-pairs and unrecognized characters, simply does not pair.

use phf::phf_set;

/// Allowed pairs, each stored with its bases in ascending order.
static CANONICAL_PAIRS: phf::Set<&'static str> = phf_set! {
    "AU",
    "CG",
    "GU",
};

#[inline]
pub fn is_valid_pair(a: char, b: char) -> bool {
    if !a.is_ascii() || !b.is_ascii() {
        return false;
    }
    let key = if a <= b { [a as u8, b as u8] } else { [b as u8, a as u8] };
    std::str::from_utf8(&key).is_ok_and(|pair| CANONICAL_PAIRS.contains(pair))
}
