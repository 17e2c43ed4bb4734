use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// A financial account tracked on the dashboard.
///
/// `kind` is a free-text category chosen by the user (e.g. "Checking",
/// "Savings", "Investment") rather than a closed enum.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub balance: f64,
}

impl Account {
    pub(crate) fn from_draft(draft: AccountDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            kind: draft.kind,
            currency: draft.currency,
            balance: draft.balance,
        }
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.kind)
    }
}

/// Caller-supplied fields for a new account; the store generates the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountDraft {
    pub name: String,
    pub kind: String,
    pub currency: String,
    pub balance: f64,
}

/// Partial-merge update: only present fields overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<f64>,
}

impl AccountPatch {
    pub fn apply_to(self, account: &mut Account) {
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(kind) = self.kind {
            account.kind = kind;
        }
        if let Some(currency) = self.currency {
            account.currency = currency;
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
    }
}
