//! The dashboard's single source of truth.
//!
//! One `DashboardStore` instance is constructed at application start and
//! handed to every consumer. All mutation is synchronous and single-writer:
//! a method runs to completion, then observers are notified, then it
//! returns. There is no I/O and no persistence; a backend, if added, sits
//! behind this same operation surface.

mod seed;
mod snapshot;

pub use snapshot::Snapshot;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    Account, AccountDraft, AccountPatch, Goal, GoalDraft, GoalPatch, Identifiable, Profile,
    ProfilePatch, Settings, SettingsPatch, Theme, Transaction, TransactionDraft, TransactionPatch,
};
use crate::errors::{EntityKind, StoreError, StoreResult};
use crate::prognosis::{self, PrognosisReport};

/// Emitted synchronously to every observer after a mutation is applied.
/// No-op mutations (unknown id under the lenient policy) emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    AccountsChanged,
    TransactionsChanged,
    GoalsChanged,
    ProfileUpdated,
    SettingsUpdated,
    ThemeToggled,
    SessionChanged,
    PrognosisUpdated,
}

/// Tells the caller whether an update/delete found its target.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub fn applied(self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// How update/delete reacts to an unknown identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingIdPolicy {
    /// No-op; the outcome reports `NotFound` but no error is raised.
    #[default]
    Ignore,
    /// Strict mode: unknown identifiers produce `StoreError::NotFound`.
    Error,
}

#[derive(Debug, Clone, Default)]
pub struct StoreOptions {
    pub missing_id: MissingIdPolicy,
}

pub type ObserverId = Uuid;

type ObserverFn = Box<dyn Fn(StoreEvent) + Send>;

pub struct DashboardStore {
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
    goals: Vec<Goal>,
    profile: Profile,
    settings: Settings,
    theme: Theme,
    authenticated: bool,
    prognosis: Option<PrognosisReport>,
    options: StoreOptions,
    observers: Vec<(ObserverId, ObserverFn)>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardStore {
    /// An empty store: no records, default profile and settings, light
    /// theme, unauthenticated, no report.
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            accounts: Vec::new(),
            transactions: Vec::new(),
            goals: Vec::new(),
            profile: Profile::default(),
            settings: Settings::default(),
            theme: Theme::default(),
            authenticated: false,
            prognosis: None,
            options,
            observers: Vec::new(),
        }
    }

    /// A store seeded with the demo dataset used for the empty-state
    /// experience. Real deployments start from `new` and load externally.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();
        store.accounts = seed::demo_accounts();
        let checking = store.accounts[0].id;
        store.transactions = seed::demo_transactions(checking);
        store.goals = seed::demo_goals();
        store
    }

    // Reads.

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn prognosis_report(&self) -> Option<&PrognosisReport> {
        self.prognosis.as_ref()
    }

    /// Read-only copy of the full state for rendering consumers.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            accounts: self.accounts.clone(),
            transactions: self.transactions.clone(),
            goals: self.goals.clone(),
            profile: self.profile.clone(),
            settings: self.settings.clone(),
            theme: self.theme,
            authenticated: self.authenticated,
            prognosis: self.prognosis.clone(),
        }
    }

    // Account operations.

    pub fn add_account(&mut self, draft: AccountDraft) -> Uuid {
        let account = Account::from_draft(draft);
        let id = account.id;
        self.accounts.push(account);
        self.emit(StoreEvent::AccountsChanged);
        id
    }

    pub fn update_account(&mut self, id: Uuid, patch: AccountPatch) -> StoreResult<MutationOutcome> {
        match find_mut(&mut self.accounts, id) {
            Some(account) => {
                patch.apply_to(account);
                self.emit(StoreEvent::AccountsChanged);
                Ok(MutationOutcome::Applied)
            }
            None => self.missing(EntityKind::Account, id),
        }
    }

    /// Removes the account if present. Transactions referencing it are left
    /// dangling; `Snapshot::account_label` renders the fallback.
    pub fn delete_account(&mut self, id: Uuid) -> StoreResult<MutationOutcome> {
        if remove_by_id(&mut self.accounts, id) {
            self.emit(StoreEvent::AccountsChanged);
            Ok(MutationOutcome::Applied)
        } else {
            self.missing(EntityKind::Account, id)
        }
    }

    // Transaction operations.

    /// New transactions go to the front of the sequence; display order is
    /// insertion order, newest first.
    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Uuid {
        let txn = Transaction::from_draft(draft);
        let id = txn.id;
        self.transactions.insert(0, txn);
        self.emit(StoreEvent::TransactionsChanged);
        id
    }

    pub fn update_transaction(
        &mut self,
        id: Uuid,
        patch: TransactionPatch,
    ) -> StoreResult<MutationOutcome> {
        match find_mut(&mut self.transactions, id) {
            Some(txn) => {
                patch.apply_to(txn);
                self.emit(StoreEvent::TransactionsChanged);
                Ok(MutationOutcome::Applied)
            }
            None => self.missing(EntityKind::Transaction, id),
        }
    }

    pub fn delete_transaction(&mut self, id: Uuid) -> StoreResult<MutationOutcome> {
        if remove_by_id(&mut self.transactions, id) {
            self.emit(StoreEvent::TransactionsChanged);
            Ok(MutationOutcome::Applied)
        } else {
            self.missing(EntityKind::Transaction, id)
        }
    }

    // Goal operations.

    pub fn add_goal(&mut self, draft: GoalDraft) -> Uuid {
        let goal = Goal::from_draft(draft);
        let id = goal.id;
        self.goals.push(goal);
        self.emit(StoreEvent::GoalsChanged);
        id
    }

    pub fn update_goal(&mut self, id: Uuid, patch: GoalPatch) -> StoreResult<MutationOutcome> {
        match find_mut(&mut self.goals, id) {
            Some(goal) => {
                patch.apply_to(goal);
                self.emit(StoreEvent::GoalsChanged);
                Ok(MutationOutcome::Applied)
            }
            None => self.missing(EntityKind::Goal, id),
        }
    }

    pub fn delete_goal(&mut self, id: Uuid) -> StoreResult<MutationOutcome> {
        if remove_by_id(&mut self.goals, id) {
            self.emit(StoreEvent::GoalsChanged);
            Ok(MutationOutcome::Applied)
        } else {
            self.missing(EntityKind::Goal, id)
        }
    }

    // Singleton updates.

    pub fn update_profile(&mut self, patch: ProfilePatch) {
        patch.apply_to(&mut self.profile);
        self.emit(StoreEvent::ProfileUpdated);
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        patch.apply_to(&mut self.settings);
        self.emit(StoreEvent::SettingsUpdated);
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.emit(StoreEvent::ThemeToggled);
    }

    // Session. Mock authentication: credentials are accepted
    // unconditionally and never stored.

    pub fn login(&mut self, _email: &str, _password: &str) {
        tracing::info!("session authenticated via login");
        self.set_authenticated(true);
    }

    pub fn signup(&mut self, _name: &str, _email: &str, _password: &str) {
        tracing::info!("session authenticated via signup");
        self.set_authenticated(true);
    }

    pub fn logout(&mut self) {
        tracing::info!("session cleared");
        self.set_authenticated(false);
    }

    fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
        self.emit(StoreEvent::SessionChanged);
    }

    // Prognosis.

    pub fn generate_prognosis(&mut self) {
        self.generate_prognosis_at(Utc::now().date_naive());
    }

    /// Same as `generate_prognosis` with an explicit reference date, so
    /// callers and tests get reproducible reports.
    pub fn generate_prognosis_at(&mut self, today: NaiveDate) {
        let report = prognosis::build_report(
            &self.accounts,
            &self.transactions,
            &self.goals,
            &self.profile,
            &self.settings,
            today,
        );
        tracing::info!(reference_date = %today, "prognosis report generated");
        self.prognosis = Some(report);
        self.emit(StoreEvent::PrognosisUpdated);
    }

    // Observers.

    pub fn subscribe(&mut self, observer: impl Fn(StoreEvent) + Send + 'static) -> ObserverId {
        let id = Uuid::new_v4();
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    fn emit(&self, event: StoreEvent) {
        for (_, observer) in &self.observers {
            observer(event);
        }
    }

    fn missing(&self, kind: EntityKind, id: Uuid) -> StoreResult<MutationOutcome> {
        match self.options.missing_id {
            MissingIdPolicy::Ignore => {
                tracing::debug!(%id, %kind, "mutation targeted an unknown identifier; ignoring");
                Ok(MutationOutcome::NotFound)
            }
            MissingIdPolicy::Error => Err(StoreError::NotFound { kind, id }),
        }
    }
}

fn find_mut<T: Identifiable>(items: &mut [T], id: Uuid) -> Option<&mut T> {
    items.iter_mut().find(|item| item.id() == id)
}

fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: Uuid) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_draft(name: &str, balance: f64) -> AccountDraft {
        AccountDraft {
            name: name.into(),
            kind: "Checking".into(),
            currency: "USD".into(),
            balance,
        }
    }

    #[test]
    fn demo_store_matches_seed_shape() {
        let store = DashboardStore::with_demo_data();
        assert_eq!(store.accounts().len(), 3);
        assert_eq!(store.transactions().len(), 4);
        assert_eq!(store.goals().len(), 2);
        assert_eq!(store.transactions()[0].label, "Salary");
        assert!(!store.is_authenticated());
        assert!(store.prognosis_report().is_none());
    }

    #[test]
    fn strict_mode_errors_on_unknown_id() {
        let mut store = DashboardStore::with_options(StoreOptions {
            missing_id: MissingIdPolicy::Error,
        });
        let err = store
            .delete_account(Uuid::new_v4())
            .expect_err("unknown id should fail in strict mode");
        assert!(matches!(err, StoreError::NotFound { kind: EntityKind::Account, .. }));
    }

    #[test]
    fn lenient_mode_reports_not_found_without_error() {
        let mut store = DashboardStore::new();
        let outcome = store
            .update_account(Uuid::new_v4(), AccountPatch::default())
            .expect("lenient mode never errors");
        assert!(!outcome.applied());
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut store = DashboardStore::new();
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let id = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        store.add_account(account_draft("Checking", 100.0));
        assert_eq!(seen.load(Ordering::SeqCst), 1);

        assert!(store.unsubscribe(id));
        store.toggle_theme();
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        assert!(!store.unsubscribe(id));
    }
}
