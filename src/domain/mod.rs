pub mod account;
pub mod common;
pub mod goal;
pub mod profile;
pub mod transaction;

pub use account::{Account, AccountDraft, AccountPatch};
pub use common::{Displayable, Identifiable, NamedEntity};
pub use goal::{Goal, GoalDraft, GoalPatch, GoalStatus};
pub use profile::{
    CurrencyDisplay, Profile, ProfilePatch, RiskAppetite, Settings, SettingsPatch, Theme,
};
pub use transaction::{Transaction, TransactionDraft, TransactionKind, TransactionPatch};
