//! User profile types
//!
//! The wallet serves a single implicit user. Its balance is a cached value
//! moved only by the ledger (or an explicit profile edit).

use super::money::Money;
use crate::core::traits::{ListOrder, NewRecord, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wallet owner profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    /// Unique across the user store
    pub email: String,
    pub mobile: String,
    /// Cached balance, updated in place by every transaction
    pub balance: Money,
}

impl Record for User {
    const KIND: &'static str = "User";
    const ORDER: ListOrder = ListOrder::Insertion;

    fn id(&self) -> &str {
        &self.id
    }

    /// A user owns itself
    fn user_id(&self) -> &str {
        &self.id
    }
}

/// Fields of a user that does not exist yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub balance: Option<Money>,
}

impl NewRecord for NewUser {
    type Output = User;

    fn into_record(self, id: String, _now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            balance: self.balance.unwrap_or(Money::ZERO),
        }
    }
}

/// Partial profile edit; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub mobile: Option<String>,
    pub balance: Option<Money>,
}

impl UserPatch {
    /// Overwrite the fields present in the patch
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(mobile) = self.mobile {
            user.mobile = mobile;
        }
        if let Some(balance) = self.balance {
            user.balance = balance;
        }
    }
}
