//! Immutable skill definitions and family variants
//!
//! [`SkillDef`] is the publishable description of one skill. It is built
//! exactly once per declaration by [`SkillDef::build`], which validates the
//! configuration and applies every derivation (localization tokens, agile
//! keyword and prefix, sprint interaction, stock requirements). Nothing
//! mutates a definition after it is built.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::config::{ActivationDescriptor, SkillConfig};
use crate::error::{Result, SkillError};
use crate::handles::{IconRef, UnlockRef};

/// Keyword tag merged into every agile definition
pub const AGILE_KEYWORD: &str = "Agile";

/// Style markup prepended to agile descriptions
pub const AGILE_DESC_PREFIX: &str = "<style=cIsUtility>Agile.</style> ";

/// Required-stock sentinel that keeps passives out of the activation path.
/// No entity ever banks this many charges, so the host never fires the
/// skill; it exists to be equipped, not used.
pub const PASSIVE_REQUIRED_STOCK: u32 = 321;

/// State machine name given to captured inert defaults
pub const INERT_MACHINE: &str = "Inert";

/// Derive the display-name localization token from an identity token
#[must_use]
pub fn name_token(lang_token: &str) -> String {
    format!("SKILL_{lang_token}_NAME")
}

/// Derive the description localization token from an identity token
#[must_use]
pub fn desc_token(lang_token: &str) -> String {
    format!("SKILL_{lang_token}_DESC")
}

/// Immutable, publishable description of one skill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDef {
    /// Localization token for the display name (`SKILL_<TOKEN>_NAME`)
    pub name_token: String,
    /// Localization token for the description (`SKILL_<TOKEN>_DESC`)
    pub desc_token: String,
    /// Raw identity token the localization tokens derive from
    pub skill_name: String,
    /// Display name text
    pub name: String,
    /// Description text, agile prefix already applied
    pub description: String,
    /// State entered on activation
    pub activation: ActivationDescriptor,
    /// State machine the activation runs on
    pub machine_name: String,
    /// Seconds between uses
    pub cooldown: f32,
    /// Maximum banked charges
    pub charge_capacity: u32,
    /// Charges consumed per activation
    pub stock_cost: u32,
    /// Charges the entity must hold before the host lets the skill fire
    pub required_stock: u32,
    /// Keyword tags, agile tag already merged
    pub keywords: BTreeSet<String>,
    /// Icon asset reference
    pub icon: IconRef,
    /// Sprinting cancels this skill
    pub canceled_from_sprinting: bool,
    /// Activating cancels the sprint
    pub cancel_sprint_on_activation: bool,
    /// Counts as a combat action
    pub is_combat: bool,
    /// Cooldown starts when the skill ends rather than when it begins
    pub delay_cooldown: bool,
    /// Requires a fresh key press per activation
    pub must_key_press: bool,
    /// Always-active passive
    pub passive: bool,
    /// Was configured to compose into its target automatically
    pub auto_apply: bool,
    /// Unlock gate carried into the composed variant
    pub unlock_gate: Option<UnlockRef>,
}

impl SkillDef {
    /// Build a definition from a declaration's configuration.
    ///
    /// Validates every field before producing anything, so a rejected
    /// configuration has no side effects whatsoever. Derivations applied
    /// here: localization tokens from the lang token, the agile keyword
    /// and description prefix, sprint interaction flags, and the passive
    /// required-stock sentinel.
    pub fn build(config: &SkillConfig) -> Result<Self> {
        validate(config)?;

        let mut keywords = config.keywords.clone();
        let mut description = config.description.clone();
        if config.agile {
            keywords.insert(AGILE_KEYWORD.to_string());
            description = format!("{AGILE_DESC_PREFIX}{}", config.description);
        }

        Ok(Self {
            name_token: name_token(&config.lang_token),
            desc_token: desc_token(&config.lang_token),
            skill_name: config.lang_token.clone(),
            name: config.name.clone(),
            description,
            activation: config.activation.clone(),
            machine_name: config.machine_name.clone(),
            cooldown: config.cooldown_seconds,
            charge_capacity: config.charge_capacity,
            stock_cost: config.stock_cost,
            required_stock: if config.passive {
                PASSIVE_REQUIRED_STOCK
            } else {
                1
            },
            keywords,
            icon: config.icon.clone(),
            canceled_from_sprinting: if config.passive { false } else { !config.agile },
            cancel_sprint_on_activation: !config.agile,
            is_combat: config.is_combat,
            delay_cooldown: config.delay_cooldown,
            must_key_press: config.must_key_press,
            passive: config.passive,
            auto_apply: config.auto_apply,
            unlock_gate: config.unlock_gate.clone(),
        })
    }

    /// Explicit stand-in for a host's implicit passive default.
    ///
    /// Displays through the captured tokens and icon but never runs:
    /// inert activation state, placeholder machine, and the passive stock
    /// sentinel.
    #[must_use]
    pub fn capture_implicit(source: &ImplicitPassive) -> Self {
        Self {
            name_token: source.name_token.clone(),
            desc_token: source.desc_token.clone(),
            skill_name: source.name_token.clone(),
            name: String::new(),
            description: String::new(),
            activation: ActivationDescriptor::inert(),
            machine_name: INERT_MACHINE.to_string(),
            cooldown: 0.0,
            charge_capacity: 1,
            stock_cost: 1,
            required_stock: PASSIVE_REQUIRED_STOCK,
            keywords: BTreeSet::new(),
            icon: source.icon.clone(),
            canceled_from_sprinting: false,
            cancel_sprint_on_activation: false,
            is_combat: false,
            delay_cooldown: false,
            must_key_press: false,
            passive: true,
            auto_apply: false,
            unlock_gate: None,
        }
    }
}

/// What the host knows about an entity's implicit always-on default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicitPassive {
    /// Localization token of the default's display name
    pub name_token: String,
    /// Localization token of the default's description
    pub desc_token: String,
    /// Icon the default displays with
    pub icon: IconRef,
}

/// Display-surface node attached to a family variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayNode {
    /// Localization token the node displays under
    pub token: String,
}

impl DisplayNode {
    /// Node for the given localization token
    pub fn for_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// One selectable alternative inside a skill family
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    /// The definition this variant equips
    pub def: SkillDef,
    /// Gate the player must clear before selecting this variant
    pub unlock_gate: Option<UnlockRef>,
    /// Display-surface node for this variant
    pub display_node: DisplayNode,
}

impl Variant {
    /// Variant for a definition, carrying the definition's configured gate
    #[must_use]
    pub fn for_def(def: SkillDef) -> Self {
        let unlock_gate = def.unlock_gate.clone();
        let display_node = DisplayNode::for_token(&def.name_token);
        Self {
            def,
            unlock_gate,
            display_node,
        }
    }

    /// Gateless variant (used for migrated defaults)
    #[must_use]
    pub fn gateless(def: SkillDef) -> Self {
        let display_node = DisplayNode::for_token(&def.name_token);
        Self {
            def,
            unlock_gate: None,
            display_node,
        }
    }
}

fn validate(config: &SkillConfig) -> Result<()> {
    if config.name.is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if config.description.is_empty() {
        return Err(invalid("description cannot be empty"));
    }
    if !config.cooldown_seconds.is_finite() || config.cooldown_seconds < 0.0 {
        return Err(invalid(format!(
            "cooldown must be finite and non-negative, got {}",
            config.cooldown_seconds
        )));
    }
    if config.charge_capacity < 1 {
        return Err(invalid("charge capacity must be at least 1"));
    }
    if config.stock_cost < 1 || config.stock_cost > config.charge_capacity {
        return Err(invalid(format!(
            "stock cost {} must be between 1 and charge capacity {}",
            config.stock_cost, config.charge_capacity
        )));
    }

    let token_re = Regex::new(r"^[A-Z][A-Z0-9_]*$")
        .map_err(|e| invalid(format!("failed to compile token pattern: {e}")))?;
    if !token_re.is_match(&config.lang_token) {
        return Err(invalid(format!(
            "lang token '{}' must be uppercase letters, digits, and underscores",
            config.lang_token
        )));
    }

    let machine_re = Regex::new(r"^[A-Za-z][A-Za-z0-9]*$")
        .map_err(|e| invalid(format!("failed to compile machine pattern: {e}")))?;
    if !machine_re.is_match(&config.machine_name) {
        return Err(invalid(format!(
            "machine name '{}' must be alphanumeric and start with a letter",
            config.machine_name
        )));
    }

    Ok(())
}

fn invalid(reason: impl Into<String>) -> SkillError {
    SkillError::InvalidConfiguration {
        reason: reason.into(),
    }
}
