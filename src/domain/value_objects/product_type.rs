use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// The kinds of merchandise a design can be printed on
///
/// Deserialization goes through `parse`, which also accepts the
/// `t-shirt` spelling older clients send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ProductType {
    #[serde(rename = "tshirt")]
    TShirt,
    Hoodie,
    Mug,
    Poster,
}

impl TryFrom<String> for ProductType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl ProductType {
    /// Parse a product type from its wire representation
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value {
            "tshirt" | "t-shirt" => Ok(Self::TShirt),
            "hoodie" => Ok(Self::Hoodie),
            "mug" => Ok(Self::Mug),
            "poster" => Ok(Self::Poster),
            other => Err(ValidationError::UnknownProductType(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TShirt => "tshirt",
            Self::Hoodie => "hoodie",
            Self::Mug => "mug",
            Self::Poster => "poster",
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
