//! Identifier type for portfolio assets.
//!
//! Using a newtype keeps asset keys distinct from arbitrary strings and gives
//! the ordered maps in this module a total order over assets.

use std::fmt;

/// Unique identifier for an asset (typically a ticker).
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::AssetId;
///
/// let id = AssetId::new("AAPL");
/// assert_eq!(id.as_str(), "AAPL");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssetId(String);

impl AssetId {
    /// Creates a new asset ID.
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AssetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AssetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_asset_id_conversions() {
        let a: AssetId = "MSFT".into();
        let b: AssetId = String::from("MSFT").into();
        assert_eq!(a, b);
        assert_eq!(format!("{}", a), "MSFT");
    }

    #[test]
    fn test_asset_id_ordering() {
        let set: BTreeSet<AssetId> = ["NVDA", "AAPL", "MSFT", "AAPL"]
            .into_iter()
            .map(AssetId::from)
            .collect();
        let ordered: Vec<&str> = set.iter().map(AssetId::as_str).collect();
        assert_eq!(ordered, vec!["AAPL", "MSFT", "NVDA"]);
    }
}
