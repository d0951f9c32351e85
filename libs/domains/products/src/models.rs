use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Identifier assigned by the store
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl Product {
    pub fn new(id: i64, input: CreateProduct) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
        }
    }
}

/// Request body for creating a product
///
/// Carries no identifier; an `id` sent by the client is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateProduct {
    #[schema(example = "Widget")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[schema(example = 9.99)]
    pub price: f64,
}
