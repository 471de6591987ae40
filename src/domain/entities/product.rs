//! Product entity and its validation rules.

use chrono::{DateTime, Utc};

use crate::domain::errors::ValidationError;

/// Candidate product built from a create or update request.
///
/// Lives only for the duration of a request: it is validated, handed to the
/// repository, and dropped. The durable form is [`ProductRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    pub code: String,
    pub title: String,
    pub description: String,
    pub reference: String,
    pub price_in_cents: i64,
}

impl Product {
    /// Checks every field and returns the first violated rule.
    ///
    /// # Rule order
    ///
    /// 1. `code` is blank → [`ValidationError::InvalidCode`]
    /// 2. `code` contains whitespace → [`ValidationError::InvalidCode`]
    /// 3. `description` is blank → [`ValidationError::RequiredDescription`]
    /// 4. `title` is blank → [`ValidationError::RequiredTitle`]
    /// 5. `reference` is blank → [`ValidationError::RequiredReference`]
    /// 6. `price_in_cents <= 0` → [`ValidationError::InvalidPrice`]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.code) || self.code.chars().any(char::is_whitespace) {
            return Err(ValidationError::InvalidCode);
        }
        if is_blank(&self.description) {
            return Err(ValidationError::RequiredDescription);
        }
        if is_blank(&self.title) {
            return Err(ValidationError::RequiredTitle);
        }
        if is_blank(&self.reference) {
            return Err(ValidationError::RequiredReference);
        }
        if self.price_in_cents <= 0 {
            return Err(ValidationError::InvalidPrice);
        }
        Ok(())
    }

    /// Returns true if every rule passes.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// A product as stored by a repository.
///
/// `id`, `created_at` and `updated_at` are assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub description: String,
    pub reference: String,
    pub price_in_cents: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for inserting a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub code: String,
    pub title: String,
    pub description: String,
    pub reference: String,
    pub price_in_cents: i64,
}

impl From<Product> for NewProduct {
    fn from(p: Product) -> Self {
        Self {
            code: p.code,
            title: p.title,
            description: p.description,
            reference: p.reference,
            price_in_cents: p.price_in_cents,
        }
    }
}

/// Replacement values for an existing product.
///
/// `code` only selects the row; it is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductChanges {
    pub code: String,
    pub title: String,
    pub description: String,
    pub reference: String,
    pub price_in_cents: i64,
}

impl From<Product> for ProductChanges {
    fn from(p: Product) -> Self {
        Self {
            code: p.code,
            title: p.title,
            description: p.description,
            reference: p.reference,
            price_in_cents: p.price_in_cents,
        }
    }
}

/// Canonical form of a code used as a lookup key.
///
/// Strips all whitespace and lowercases, so `" Ab C1 "` and `"abc1"` match.
pub fn normalize_code(code: &str) -> String {
    code.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
