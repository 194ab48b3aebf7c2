//! Payment card types

use super::money::Money;
use crate::core::traits::{ListOrder, NewRecord, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display theme given to cards created without one
pub const DEFAULT_GRADIENT: &str = "from-purple-900 via-purple-700 to-purple-600";

/// A payment card owned by a user
///
/// Only `balance` ever changes after creation, and only through the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub user_id: String,
    pub holder_name: String,
    /// Display form; clients show the last four digits
    pub card_number: String,
    pub balance: Money,
    /// Display theme tag
    pub gradient: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Card {
    const KIND: &'static str = "Card";
    const ORDER: ListOrder = ListOrder::NewestFirst;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

/// Fields of a card that does not exist yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewCard {
    pub user_id: String,
    pub holder_name: String,
    pub card_number: String,
    pub balance: Option<Money>,
    pub gradient: Option<String>,
}

impl NewRecord for NewCard {
    type Output = Card;

    fn into_record(self, id: String, now: DateTime<Utc>) -> Card {
        Card {
            id,
            user_id: self.user_id,
            holder_name: self.holder_name,
            card_number: self.card_number,
            balance: self.balance.unwrap_or(Money::ZERO),
            gradient: self
                .gradient
                .filter(|gradient| !gradient.is_empty())
                .unwrap_or_else(|| DEFAULT_GRADIENT.to_string()),
            created_at: now,
        }
    }
}
