//! The item record: construction, validation, full and partial update.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use curio_core::{DomainError, DomainResult, Entity};

use crate::category::{self, Category};
use crate::date;

/// Maximum length of `name` and `brand`, in characters.
pub const MAX_TEXT_LEN: usize = 100;

/// Item identifier, assigned by the persistence layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {e}")))?;
        Ok(Self(id))
    }
}

/// A single tracked collectible.
///
/// The record is a value type: the updaters below take the current state and
/// return the next validated state, so an invalid candidate never replaces a
/// valid record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    id: Option<ItemId>,
    name: String,
    category: String,
    brand: String,
    purchase_price: i64,
    purchase_date: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Command: create a new item record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: replace every business field of an existing record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateItem {
    pub name: String,
    pub category: String,
    pub brand: String,
    pub purchase_price: i64,
    pub purchase_date: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: update only the supplied fields.
///
/// `None` leaves a field untouched. `category` and `purchase_date` are not
/// patchable through this command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchItem {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub purchase_price: Option<i64>,
    pub occurred_at: DateTime<Utc>,
}

impl Item {
    /// Build a new, validated record.
    ///
    /// All-or-nothing: on a validation failure no record is returned. The
    /// identifier starts unassigned; the persistence layer attaches one via
    /// [`Item::with_id`].
    pub fn create(cmd: CreateItem) -> DomainResult<Item> {
        let item = Item {
            id: None,
            name: cmd.name.trim().to_string(),
            category: cmd.category.trim().to_string(),
            brand: cmd.brand.trim().to_string(),
            purchase_price: cmd.purchase_price,
            purchase_date: cmd.purchase_date.trim().to_string(),
            created_at: cmd.occurred_at,
            updated_at: cmd.occurred_at,
        };
        item.validate()?;
        Ok(item)
    }

    /// Attach the persistence-assigned identifier. One-shot: the id is
    /// immutable once set.
    pub fn with_id(self, id: ItemId) -> DomainResult<Item> {
        if let Some(existing) = self.id {
            return Err(DomainError::conflict(format!(
                "item already has id {existing}"
            )));
        }
        Ok(Item {
            id: Some(id),
            ..self
        })
    }

    /// Replace every business field and re-validate.
    ///
    /// Returns the next state; `self` is untouched, so a failed update never
    /// leaves an invalid record behind.
    pub fn update(&self, cmd: UpdateItem) -> DomainResult<Item> {
        let mut next = self.clone();
        next.name = cmd.name.trim().to_string();
        next.category = cmd.category.trim().to_string();
        next.brand = cmd.brand.trim().to_string();
        next.purchase_price = cmd.purchase_price;
        next.purchase_date = cmd.purchase_date.trim().to_string();
        next.touch(cmd.occurred_at);
        next.validate()?;
        Ok(next)
    }

    /// Apply only the supplied fields and re-validate the whole record.
    ///
    /// Always runs the purchase-date normalization on the stored value,
    /// whatever fields were supplied: timestamps read back from storage come
    /// in RFC 3339 and are folded back to the date-only form here.
    pub fn patch(&self, cmd: PatchItem) -> DomainResult<Item> {
        let mut next = self.clone();
        if let Some(name) = cmd.name {
            next.name = name.trim().to_string();
        }
        if let Some(brand) = cmd.brand {
            next.brand = brand.trim().to_string();
        }
        if let Some(price) = cmd.purchase_price {
            next.purchase_price = price;
        }
        if let Some(normalized) = date::normalize_date_only(&next.purchase_date) {
            next.purchase_date = normalized;
        }
        next.touch(cmd.occurred_at);
        next.validate()?;
        Ok(next)
    }

    /// Check every field constraint, collecting all violations.
    ///
    /// Pure: does not stop at the first failure. A record with several bad
    /// fields reports one message per field, in fixed check order, joined
    /// with `", "`.
    pub fn validate(&self) -> DomainResult<()> {
        let mut violations: Vec<String> = Vec::new();

        if self.name.is_empty() {
            violations.push("name is required".to_string());
        } else if self.name.chars().count() > MAX_TEXT_LEN {
            violations.push(format!("name must be {MAX_TEXT_LEN} characters or less"));
        }

        if self.category.is_empty() {
            violations.push("category is required".to_string());
        } else if Category::from_label(&self.category).is_none() {
            violations.push(category::membership_message());
        }

        if self.brand.is_empty() {
            violations.push("brand is required".to_string());
        } else if self.brand.chars().count() > MAX_TEXT_LEN {
            violations.push(format!("brand must be {MAX_TEXT_LEN} characters or less"));
        }

        if self.purchase_price < 0 {
            violations.push("purchase_price must be 0 or greater".to_string());
        }

        if self.purchase_date.is_empty() {
            violations.push("purchase_date is required".to_string());
        } else if !date::is_supported_format(&self.purchase_date) {
            violations.push("purchase_date must be in YYYY-MM-DD format".to_string());
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::violations(violations))
        }
    }

    // Stamp `updated_at`, never moving it behind `created_at`.
    fn touch(&mut self, occurred_at: DateTime<Utc>) {
        self.updated_at = occurred_at.max(self.created_at);
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn purchase_price(&self) -> i64 {
        self.purchase_price
    }

    pub fn purchase_date(&self) -> &str {
        &self.purchase_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Option<ItemId> {
        self.id
    }
}
