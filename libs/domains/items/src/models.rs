use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Database-assigned item identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A stored item. Items are never modified in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    #[schema(value_type = i64, example = 1)]
    pub id: ItemId,
    #[schema(example = "Apple")]
    pub name: String,
    #[schema(example = 10.5)]
    pub price: Decimal,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Item(id={}, name={}, price={})",
            self.id, self.name, self.price
        )
    }
}

/// Input for creating an item
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
    #[schema(example = "Apple")]
    pub name: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(example = 10.5)]
    pub price: Decimal,
}

impl CreateItem {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        let mut err = ValidationError::new("range");
        err.message = Some("Price must not be negative".into());
        return Err(err);
    }
    Ok(())
}

/// Optional query on the list endpoint.
///
/// With both fields set, items must match the name and be cheaper than the price.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ItemFilter {
    /// Exact, case-sensitive name
    pub name: Option<String>,
    /// Only items strictly cheaper than this
    pub cheaper_than: Option<Decimal>,
}
