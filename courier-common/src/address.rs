//! Validated email addresses
//!
//! An [`Address`] is normalized (trimmed, lowercased) and checked against a
//! fixed list of domain suffixes on construction. It is immutable afterwards.
//!
//! `Display` writes the full address, while `Debug` writes the masked form so
//! that `{:?}` output never leaks a complete address.

use std::{
    fmt::{self, Debug, Display},
    ops::{Deref, DerefMut},
    str::FromStr,
    sync::Arc,
};

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Domain suffixes an address must end with.
pub const ALLOWED_DOMAIN_SUFFIXES: &[&str] = &[".com", ".ru", ".net"];

/// Visible characters of the local part in a masked address.
const MASK_VISIBLE: usize = 2;
const MASK: &str = "***";

/// A normalized, validated email address
///
/// # Examples
///
/// ```
/// use courier_common::address::Address;
///
/// let address = Address::parse("  Aleks@Example.COM  ").unwrap();
/// assert_eq!(address.as_str(), "aleks@example.com");
/// assert_eq!(address.masked(), "al***@example.com");
///
/// assert!(Address::parse("invalid").is_err());
/// assert!(Address::parse("test@example.org").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(Arc<str>);

impl Address {
    ///
    /// Normalize and validate a raw address.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::MissingAt`] if there is no `@`, and
    /// [`AddressError::DisallowedDomain`] if the domain does not end with one
    /// of [`ALLOWED_DOMAIN_SUFFIXES`].
    ///
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let normalized = raw.trim().to_lowercase();

        let Some((_, domain)) = normalized.rsplit_once('@') else {
            return Err(AddressError::MissingAt(normalized));
        };

        if !ALLOWED_DOMAIN_SUFFIXES
            .iter()
            .any(|suffix| domain.ends_with(suffix))
        {
            return Err(AddressError::DisallowedDomain {
                address: normalized,
                allowed: ALLOWED_DOMAIN_SUFFIXES,
            });
        }

        Ok(Self(Arc::from(normalized)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the last `@`
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Everything after the last `@`
    #[must_use]
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// The address with all but the first two characters of the local part
    /// hidden, e.g. `al***@example.com`.
    ///
    /// Local parts shorter than two characters are shown as-is before the mask.
    #[must_use]
    pub fn masked(&self) -> String {
        let (local, domain) = self.split();
        let visible = local
            .char_indices()
            .nth(MASK_VISIBLE)
            .map_or(local, |(end, _)| &local[..end]);

        format!("{visible}{MASK}@{domain}")
    }

    fn split(&self) -> (&str, &str) {
        // Construction guarantees an '@' is present
        self.0.rsplit_once('@').unwrap_or((&*self.0, ""))
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = AddressError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0.to_string()
    }
}

/// An ordered list of recipients
///
/// A single [`Address`] converts into a one-element list.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressList(Vec<Address>);

impl AddressList {
    #[must_use]
    pub fn into_inner(self) -> Vec<Address> {
        self.0
    }
}

impl Display for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, addr) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            f.write_str(&addr.masked())?;
        }
        Ok(())
    }
}

impl Debug for AddressList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl From<Address> for AddressList {
    fn from(value: Address) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<Address>> for AddressList {
    fn from(value: Vec<Address>) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<[Address; N]> for AddressList {
    fn from(value: [Address; N]) -> Self {
        Self(Vec::from(value))
    }
}

impl FromIterator<Address> for AddressList {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Deref for AddressList {
    type Target = Vec<Address>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AddressList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_normalization() {
        let address = Address::parse("  Aleks@Example.COM  ").unwrap();
        assert_eq!(address.as_str(), "aleks@example.com");
        assert_eq!(address.local_part(), "aleks");
        assert_eq!(address.domain(), "example.com");
    }

    #[test]
    fn test_allowed_suffixes() {
        for raw in ["a@b.com", "A@B.RU", "\tx@y.net\n"] {
            let address = Address::parse(raw).unwrap();
            assert_eq!(address.as_str(), raw.trim().to_lowercase());
        }
    }

    #[test]
    fn test_missing_at() {
        assert_eq!(
            Address::parse(" Invalid.com "),
            Err(AddressError::MissingAt("invalid.com".to_string()))
        );
    }

    #[test]
    fn test_disallowed_domain() {
        for raw in ["test@example.org", "test@example.co", "test@", "a.com@host"] {
            assert!(
                matches!(
                    Address::parse(raw),
                    Err(AddressError::DisallowedDomain { .. })
                ),
                "{raw} should have been rejected"
            );
        }
    }

    #[test]
    fn test_masked() {
        let address = Address::parse("Aleks@Example.COM").unwrap();
        assert_eq!(address.masked(), "al***@example.com");
        assert_eq!(address.masked(), address.masked());
        assert_ne!(address.masked(), address.as_str());
    }

    #[test]
    fn test_masked_short_local_part() {
        assert_eq!(Address::parse("a@x.com").unwrap().masked(), "a***@x.com");
        assert_eq!(Address::parse("ab@x.com").unwrap().masked(), "ab***@x.com");
        assert_eq!(Address::parse("@x.com").unwrap().masked(), "***@x.com");
    }

    #[test]
    fn test_masked_multibyte_local_part() {
        let address = Address::parse("Иван@почта.ru").unwrap();
        assert_eq!(address.masked(), "ив***@почта.ru");
    }

    #[test]
    fn test_display_and_debug() {
        let address = Address::parse("sender@example.com").unwrap();
        assert_eq!(format!("{address}"), "sender@example.com");
        assert_eq!(format!("{address:?}"), "se***@example.com");
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Address::parse("USER@example.com").unwrap();
        let b = Address::parse(" user@example.com").unwrap();
        assert_eq!(a, b);

        let mut map = HashMap::new();
        map.insert(a, 42);
        assert_eq!(map.get(&b), Some(&42));
    }

    #[test]
    fn test_serde() {
        let address = Address::parse("serde@example.net").unwrap();
        let serialized = serde_json::to_string(&address).unwrap();
        assert_eq!(serialized, "\"serde@example.net\"");

        let deserialized: Address = serde_json::from_str("\" Serde@Example.NET \"").unwrap();
        assert_eq!(deserialized, address);

        assert!(serde_json::from_str::<Address>("\"serde@example.org\"").is_err());
    }

    #[test]
    fn test_address_list() {
        let one = AddressList::from(Address::parse("a1@x.com").unwrap());
        assert_eq!(one.len(), 1);

        let many = AddressList::from(vec![
            Address::parse("first@x.com").unwrap(),
            Address::parse("second@y.ru").unwrap(),
        ]);
        assert_eq!(many[0].as_str(), "first@x.com");
        assert_eq!(many[1].as_str(), "second@y.ru");
        assert_eq!(many.to_string(), "fi***@x.com, se***@y.ru");
        assert_eq!(format!("{many:?}"), "[fi***@x.com, se***@y.ru]");
    }
}
