//! Transfer contact types

use crate::core::traits::{ListOrder, NewRecord, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Avatar color given to contacts created without one
pub const DEFAULT_AVATAR_COLOR: &str = "bg-purple-500";

/// A peer the user can send money to
///
/// Contacts never appear in the ledger directly; the transfer adapter only
/// reads a contact's name and phone to label the resulting debit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub avatar_color: String,
}

impl Record for Contact {
    const KIND: &'static str = "Contact";
    const ORDER: ListOrder = ListOrder::Insertion;

    fn id(&self) -> &str {
        &self.id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }
}

/// Fields of a contact that does not exist yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewContact {
    pub user_id: String,
    pub name: String,
    pub phone: String,
    pub avatar_color: Option<String>,
}

impl NewRecord for NewContact {
    type Output = Contact;

    fn into_record(self, id: String, _now: DateTime<Utc>) -> Contact {
        Contact {
            id,
            user_id: self.user_id,
            name: self.name,
            phone: self.phone,
            avatar_color: self
                .avatar_color
                .filter(|color| !color.is_empty())
                .unwrap_or_else(|| DEFAULT_AVATAR_COLOR.to_string()),
        }
    }
}
