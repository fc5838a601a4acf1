use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{self, Id};
use super::EntityError;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a product with a fresh id and creation time.
    ///
    /// # Examples
    /// ```
    /// use service::entity::{EntityError, Product};
    /// let p = Product::new("Desk lamp", 24.5).unwrap();
    /// assert_eq!(p.name, "Desk lamp");
    /// assert_eq!(Product::new("Desk lamp", 0.0), Err(EntityError::RequiredPrice));
    /// ```
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self, EntityError> {
        let product = Self {
            id: id::new_id(),
            name: name.into(),
            price,
            created_at: Utc::now(),
        };
        product.validate()?;
        Ok(product)
    }

    /// Check id, then name, then price.
    pub fn validate(&self) -> Result<(), EntityError> {
        id::check_id(&self.id)?;
        if self.name.trim().is_empty() {
            return Err(EntityError::RequiredName);
        }
        validate_price(self.price)
    }

    /// Replace the mutable fields, keeping the previous values if the result is invalid.
    pub fn update_details(&mut self, name: impl Into<String>, price: f64) -> Result<(), EntityError> {
        let mut next = self.clone();
        next.name = name.into();
        next.price = price;
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn validate_price(price: f64) -> Result<(), EntityError> {
    if price == 0.0 {
        return Err(EntityError::RequiredPrice);
    }
    if price < 0.0 || !price.is_finite() {
        return Err(EntityError::InvalidPrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn new_product_is_populated() {
        let before = Utc::now();
        let p = Product::new("Product 1", 10.0).unwrap();
        assert!(!p.id.is_nil());
        assert_eq!(p.name, "Product 1");
        assert_eq!(p.price, 10.0);
        assert!(p.created_at >= before && p.created_at <= Utc::now());
    }

    #[test]
    fn new_product_requires_name() {
        assert_eq!(Product::new("", 10.0), Err(EntityError::RequiredName));
        assert_eq!(Product::new("   ", 10.0), Err(EntityError::RequiredName));
    }

    #[test]
    fn new_product_price_rules() {
        assert_eq!(Product::new("Product 1", 0.0), Err(EntityError::RequiredPrice));
        assert_eq!(Product::new("Product 1", -10.0), Err(EntityError::InvalidPrice));
        assert_eq!(Product::new("Product 1", f64::NAN), Err(EntityError::InvalidPrice));
        assert_eq!(Product::new("Product 1", f64::INFINITY), Err(EntityError::InvalidPrice));
    }

    #[test]
    fn validate_hand_built_product() {
        let p = Product { id: id::new_id(), name: "Product 1".into(), price: 10.0, created_at: Utc::now() };
        assert_eq!(p.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_missing_or_malformed_id() {
        let mut p = Product::new("Product 1", 10.0).unwrap();
        p.id = Uuid::nil();
        assert_eq!(p.validate(), Err(EntityError::RequiredId));
        p.id = Uuid::from_u128(u128::MAX);
        assert_eq!(p.validate(), Err(EntityError::InvalidId));
    }

    #[test]
    fn id_is_checked_before_name_and_price() {
        let p = Product { id: Uuid::nil(), name: String::new(), price: -1.0, created_at: Utc::now() };
        assert_eq!(p.validate(), Err(EntityError::RequiredId));
    }

    #[test]
    fn update_details_keeps_identity() {
        let mut p = Product::new("Product 1", 10.0).unwrap();
        let (id, created_at) = (p.id, p.created_at);
        p.update_details("Product 2", 20.0).unwrap();
        assert_eq!((p.id, p.created_at), (id, created_at));
        assert_eq!(p.name, "Product 2");

        assert_eq!(p.update_details("Product 3", -1.0), Err(EntityError::InvalidPrice));
        assert_eq!(p.name, "Product 2");
        assert_eq!(p.price, 20.0);
    }

    #[test]
    fn decoded_product_can_be_revalidated() {
        let json = format!(r#"{{"id":"{}","name":"","price":5.0,"created_at":"2024-01-01T00:00:00Z"}}"#, id::new_id());
        let p: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p.validate(), Err(EntityError::RequiredName));
    }
}
