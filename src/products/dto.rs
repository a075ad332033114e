use serde::{Deserialize, Serialize};

use crate::products::repo::Product;

/// Request body for creating a product.
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

/// Partial update: absent fields keep their stored values.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl UpdateProductRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.quantity.is_none() && self.price.is_none()
    }
}

/// Product as returned to its owner; `owner_id` stays server-side.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            price: p.price,
        }
    }
}
