use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Account, Goal, Profile, Settings, Theme, Transaction};
use crate::errors::StoreResult;
use crate::prognosis::PrognosisReport;

/// Fallback label for transactions whose account has been deleted.
const UNKNOWN_ACCOUNT_LABEL: &str = "Unknown";

/// A point-in-time, read-only copy of the full store state.
///
/// Consumers render from this and never mutate it back into the store;
/// mutation goes through `DashboardStore` operations only.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub profile: Profile,
    pub settings: Settings,
    pub theme: Theme,
    pub authenticated: bool,
    pub prognosis: Option<PrognosisReport>,
}

impl Snapshot {
    /// Sum of all account balances.
    pub fn net_worth(&self) -> f64 {
        self.accounts.iter().map(|account| account.balance).sum()
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    /// Account name for display; dangling references resolve to "Unknown".
    pub fn account_label(&self, id: Uuid) -> &str {
        self.account(id)
            .map(|account| account.name.as_str())
            .unwrap_or(UNKNOWN_ACCOUNT_LABEL)
    }

    /// Serialized view for consumers that want to ship the state elsewhere
    /// (e.g. a debug inspector). Not a persistence format.
    pub fn to_json_string(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
