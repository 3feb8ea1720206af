//! Author-facing configuration surface
//!
//! A [`SkillConfig`] is the full set of recognized options a skill
//! declaration exposes. Optional fields carry their documented defaults so
//! declarations only spell out what they change.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::handles::{EntityRef, IconRef, UnlockRef};
use crate::slot::AttachmentTarget;

/// State type entered by inert placeholder definitions
pub const INERT_STATE: &str = "EntityStates.Idle";

/// The entity state the host enters when a skill activates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationDescriptor {
    /// Fully-qualified state type name understood by the host
    pub state_type: String,
}

impl ActivationDescriptor {
    /// Descriptor for the given state type
    pub fn new(state_type: impl Into<String>) -> Self {
        Self {
            state_type: state_type.into(),
        }
    }

    /// Placeholder state that displays but never does anything
    #[must_use]
    pub fn inert() -> Self {
        Self::new(INERT_STATE)
    }
}

/// Configuration for one skill declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    /// Identity token, uppercase with underscores (e.g. `"DRIFT_DASH"`).
    /// Localization tokens are derived from it.
    pub lang_token: String,

    /// Display name registered under the derived name token
    pub name: String,

    /// Description text registered under the derived description token
    pub description: String,

    /// State entered when the skill activates
    pub activation: ActivationDescriptor,

    /// State machine the activation runs on
    pub machine_name: String,

    /// Seconds between uses
    pub cooldown_seconds: f32,

    /// Maximum banked charges
    pub charge_capacity: u32,

    /// Charges consumed per activation
    #[serde(default = "default_stock_cost")]
    pub stock_cost: u32,

    /// Icon asset reference
    pub icon: IconRef,

    /// Entity the definition auto-applies to, if any
    #[serde(default)]
    pub target_entity: Option<EntityRef>,

    /// Where on the target entity the definition attaches
    #[serde(default)]
    pub attachment: AttachmentTarget,

    /// Unlock gate; `None` means available from the start
    #[serde(default)]
    pub unlock_gate: Option<UnlockRef>,

    /// Keyword tags shown alongside the description
    #[serde(default)]
    pub keywords: BTreeSet<String>,

    /// Compose into the target's family graph automatically
    #[serde(default = "default_true")]
    pub auto_apply: bool,

    /// Require a fresh key press for every activation
    #[serde(default)]
    pub must_key_press: bool,

    /// Always-active passive rather than a triggered skill
    #[serde(default)]
    pub passive: bool,

    /// Usable while sprinting
    #[serde(default)]
    pub agile: bool,

    /// Start the cooldown when the skill ends instead of when it begins
    #[serde(default)]
    pub delay_cooldown: bool,

    /// Counts as a combat action
    #[serde(default = "default_true")]
    pub is_combat: bool,
}

fn default_stock_cost() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_defaults() {
        let toml_str = r#"
            lang_token = "DRIFT_DASH"
            name = "Drift Dash"
            description = "Dash forward."
            activation = "States.Dash"
            machine_name = "Body"
            cooldown_seconds = 6.0
            charge_capacity = 2
            icon = "icons/drift_dash"
        "#;

        let config: SkillConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_eq!(config.stock_cost, 1);
        assert!(config.auto_apply);
        assert!(config.is_combat);
        assert!(!config.passive);
        assert!(!config.agile);
        assert!(!config.must_key_press);
        assert!(!config.delay_cooldown);
        assert_eq!(config.attachment, AttachmentTarget::None);
        assert!(config.keywords.is_empty());
        assert!(config.unlock_gate.is_none());
        assert!(config.target_entity.is_none());
    }

    #[test]
    fn test_toml_explicit_attachment() {
        let toml_str = r#"
            lang_token = "EMBER_ROUNDS"
            name = "Ember Rounds"
            description = "Fire an igniting round."
            activation = "States.FireEmber"
            machine_name = "Weapon"
            cooldown_seconds = 0.0
            charge_capacity = 1
            icon = "icons/ember_rounds"
            target_entity = "entities/Drifter"
            attachment = { slot = "primary" }
            keywords = ["Ignite"]
        "#;

        let config: SkillConfig = toml::from_str(toml_str).expect("Failed to parse TOML");
        assert_eq!(
            config.attachment,
            AttachmentTarget::Slot(crate::slot::SkillSlot::Primary)
        );
        assert!(config.keywords.contains("Ignite"));
        assert_eq!(
            config.target_entity,
            Some(EntityRef::new("entities/Drifter"))
        );
    }
}
