//! djb2 fingerprint for short strings.
//!
//! Not a cryptographic hash: collisions are easy to find. Use it only to
//! tell inputs apart cheaply.

use core::fmt::{self, Write};

use heapless::String;

/// Starting value of the djb2 hash
pub const SEED: u32 = 5381;

/// `hash * 33 + byte` over every byte, wrapping at 32 bits
pub fn djb2(data: &[u8]) -> u32 {
    data.iter()
        .fold(SEED, |hash, &b| hash.wrapping_mul(33).wrapping_add(u32::from(b)))
}

/// A djb2 hash shown as eight lowercase hex digits, high nibble first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fingerprint(pub u32);

impl Fingerprint {
    pub const fn value(self) -> u32 {
        self.0
    }

    pub fn to_hex(self) -> String<8> {
        let mut hex = String::new();
        write!(&mut hex, "{:08x}", self.0).ok();
        hex
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

pub fn fingerprint(data: &[u8]) -> Fingerprint {
    Fingerprint(djb2(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(fingerprint(b"").to_hex(), "00001505");
        assert_eq!(fingerprint(b"a").to_hex(), "0002b606");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(fingerprint(b"hunter2"), fingerprint(b"hunter2"));
        assert_ne!(fingerprint(b"hunter2"), fingerprint(b"hunter3"));
    }

    #[test]
    fn test_wraps_on_long_input() {
        let long = [b'z'; 256];
        assert_eq!(fingerprint(&long).to_hex().len(), 8);
    }
}
