use serde::{Deserialize, Serialize};

/// The singleton user profile, mutated by partial-merge only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub age: u32,
    pub base_currency: String,
    pub risk_appetite: RiskAppetite,
    pub display_name: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            age: 30,
            base_currency: "USD".into(),
            risk_appetite: RiskAppetite::Moderate,
            display_name: "John Doe".into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskAppetite {
    Aggressive,
    Moderate,
    Conservative,
}

/// Partial-merge update for the profile singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_appetite: Option<RiskAppetite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl ProfilePatch {
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(age) = self.age {
            profile.age = age;
        }
        if let Some(base_currency) = self.base_currency {
            profile.base_currency = base_currency;
        }
        if let Some(risk_appetite) = self.risk_appetite {
            profile.risk_appetite = risk_appetite;
        }
        if let Some(display_name) = self.display_name {
            profile.display_name = display_name;
        }
    }
}

/// Display preferences, mutated by partial-merge only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub currency_display: CurrencyDisplay,
    pub notifications: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_display: CurrencyDisplay::Symbol,
            notifications: true,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CurrencyDisplay {
    Symbol,
    Code,
}

/// Partial-merge update for the settings singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_display: Option<CurrencyDisplay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<bool>,
}

impl SettingsPatch {
    pub fn apply_to(self, settings: &mut Settings) {
        if let Some(currency_display) = self.currency_display {
            settings.currency_display = currency_display;
        }
        if let Some(notifications) = self.notifications {
            settings.notifications = notifications;
        }
    }
}

/// UI color scheme; toggled, never partially merged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn profile_patch_merges_partially() {
        let mut profile = Profile::default();
        let patch = ProfilePatch {
            age: Some(42),
            ..ProfilePatch::default()
        };
        patch.apply_to(&mut profile);
        assert_eq!(profile.age, 42);
        assert_eq!(profile.display_name, "John Doe");
        assert_eq!(profile.risk_appetite, RiskAppetite::Moderate);
    }
}
