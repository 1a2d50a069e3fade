use crate::descriptor::RuleDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether a rule runs
///
/// Accepts `on`/`off` strings as well as booleans:
/// ```yaml
/// IfSpacing: off
/// IfSpacing: false
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetting {
    On,
    Off,
}

impl RuleSetting {
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Custom deserializer for `RuleSetting` to accept both strings and booleans
impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct RuleSettingVisitor;

        impl Visitor<'_> for RuleSettingVisitor {
            type Value = RuleSetting;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a rule setting ('on', 'off', true or false)")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(if value { RuleSetting::On } else { RuleSetting::Off })
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                match value {
                    "on" | "true" => Ok(RuleSetting::On),
                    "off" | "false" => Ok(RuleSetting::Off),
                    _ => Err(E::custom(format!("unknown rule setting: {value}"))),
                }
            }
        }

        deserializer.deserialize_any(RuleSettingVisitor)
    }
}

/// Lint configuration: which rules run
///
/// ```yaml
/// rules:
///   IfSpacing: off
/// ```
///
/// Rules without an explicit setting follow their descriptor's
/// `enabled_by_default` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Per-rule settings keyed by rule id
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub rules: HashMap<String, RuleSetting>,
}

impl LintConfig {
    /// Explicit setting for a rule, if any
    #[must_use]
    pub fn setting(&self, rule_id: &str) -> Option<RuleSetting> {
        self.rules.get(rule_id).copied()
    }

    /// Check if a rule should run
    #[must_use]
    pub fn is_enabled(&self, descriptor: &RuleDescriptor) -> bool {
        self.setting(descriptor.id)
            .map_or(descriptor.enabled_by_default, RuleSetting::is_on)
    }

    /// Return a copy with one rule set explicitly
    #[must_use]
    pub fn with_rule(mut self, rule_id: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(rule_id.into(), setting);
        self
    }

    /// Merge another config into this one; settings in `override_config` win
    #[must_use]
    pub fn merge(&self, override_config: &Self) -> Self {
        let mut rules = self.rules.clone();
        rules.extend(override_config.rules.clone());
        Self { rules }
    }

    /// Configured rule ids that are not in `valid`, sorted
    #[must_use]
    pub fn unknown_rules(&self, valid: &[&str]) -> Vec<&str> {
        let mut unknown: Vec<&str> = self
            .rules
            .keys()
            .map(String::as_str)
            .filter(|rule| !valid.contains(rule))
            .collect();
        unknown.sort_unstable();
        unknown
    }
}
