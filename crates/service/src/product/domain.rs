use serde::{Deserialize, Serialize};

/// Create input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Update input; replaces the mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProductInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}
