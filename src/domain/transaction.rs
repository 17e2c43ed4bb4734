use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A single income or expense record.
///
/// `amount` is a magnitude; the sign used for display and aggregation is
/// derived from `kind`, never stored. `account_id` may dangle once the
/// referenced account is deleted (consumers render a fallback label).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub date: NaiveDate,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub account_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    pub(crate) fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: draft.date,
            label: draft.label,
            description: draft.description,
            account_id: draft.account_id,
            kind: draft.kind,
            amount: draft.amount,
            currency: draft.currency,
            recurring: draft.recurring,
        }
    }

    /// Signed value: positive for income, negative for expenses.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("{} [{:?}]", self.label, self.kind)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

/// Caller-supplied fields for a new transaction; the store generates the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub date: NaiveDate,
    pub label: String,
    #[serde(default)]
    pub description: String,
    pub account_id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    #[serde(default)]
    pub recurring: bool,
}

/// Partial-merge update: only present fields overwrite the stored record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TransactionKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring: Option<bool>,
}

impl TransactionPatch {
    pub fn apply_to(self, txn: &mut Transaction) {
        if let Some(date) = self.date {
            txn.date = date;
        }
        if let Some(label) = self.label {
            txn.label = label;
        }
        if let Some(description) = self.description {
            txn.description = description;
        }
        if let Some(account_id) = self.account_id {
            txn.account_id = account_id;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(currency) = self.currency {
            txn.currency = currency;
        }
        if let Some(recurring) = self.recurring {
            txn.recurring = recurring;
        }
    }
}
