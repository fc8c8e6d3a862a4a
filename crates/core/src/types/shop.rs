//! Shop identifier newtype.

use serde::{Deserialize, Serialize};

/// Identifier of a merchant's shop - the tenant key for all stored data.
///
/// Shopify assigns these as opaque strings; keeping a newtype prevents
/// mixing them up with shop domains, which are also strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(String);

impl ShopId {
    /// Create a new shop ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ShopId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ShopId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_id_display() {
        let id = ShopId::new("shop-123");
        assert_eq!(id.to_string(), "shop-123");
        assert_eq!(id.as_str(), "shop-123");
    }

    #[test]
    fn test_shop_id_serde_transparent() {
        let id = ShopId::new("shop-123");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"shop-123\"");

        let back: ShopId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }
}
