//! Product request and response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Payload for creating a product
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl NewProduct {
    pub fn validate(&self) -> Result<(), SharedError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Payload for updating a product; absent fields are left untouched
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn validate(&self) -> Result<(), SharedError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate_name(name: &str) -> Result<(), SharedError> {
    if name.trim().is_empty() {
        return Err(SharedError::validation("name", "Product name is required"));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), SharedError> {
    if !price.is_finite() || price < 0.0 {
        return Err(SharedError::validation(
            "price",
            "Price must be a non-negative number",
        ));
    }
    Ok(())
}
