//! Strongly-typed identifiers used across the domain.
//!
//! Ids are plain integers on the wire (`{"id": 3}`), assigned by the ledger.

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of a roster customer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(u64);

macro_rules! impl_int_newtype {
    ($t:ty) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }

            /// Identifier following this one in assignment order.
            pub const fn next(self) -> Self {
                Self(self.0 + 1)
            }

            /// Parse a path segment the lenient way: leading digits win, trailing
            /// garbage is ignored, and anything without a leading number is `None`.
            pub fn parse_lenient(s: &str) -> Option<Self> {
                parse_leading_u64(s).map(Self)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_int_newtype!(ProductId);
impl_int_newtype!(CustomerId);

fn parse_leading_u64(s: &str) -> Option<u64> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(s.len(), |(i, _)| i);
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_lenient_accepts_plain_numbers() {
        assert_eq!(ProductId::parse_lenient("3"), Some(ProductId::new(3)));
        assert_eq!(CustomerId::parse_lenient("42"), Some(CustomerId::new(42)));
    }

    #[test]
    fn parse_lenient_takes_leading_digits_only() {
        assert_eq!(ProductId::parse_lenient("12abc"), Some(ProductId::new(12)));
        assert_eq!(ProductId::parse_lenient("  7"), Some(ProductId::new(7)));
        assert_eq!(ProductId::parse_lenient("+5"), Some(ProductId::new(5)));
        assert_eq!(ProductId::parse_lenient("1.9"), Some(ProductId::new(1)));
    }

    #[test]
    fn parse_lenient_rejects_non_numeric_input() {
        assert_eq!(ProductId::parse_lenient("abc"), None);
        assert_eq!(ProductId::parse_lenient(""), None);
        assert_eq!(ProductId::parse_lenient("-1"), None);
        assert_eq!(ProductId::parse_lenient("99999999999999999999999"), None);
    }

    #[test]
    fn next_is_monotonic() {
        let id = CustomerId::new(2);
        assert_eq!(id.next(), CustomerId::new(3));
        assert!(id.next() > id);
    }

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: CustomerId = serde_json::from_str("9").unwrap();
        assert_eq!(back, CustomerId::new(9));
    }
}
