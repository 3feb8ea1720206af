//! Equipment slots and attachment targets

use serde::{Deserialize, Serialize};

/// The explicit equipment slots an entity exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillSlot {
    Primary,
    Secondary,
    Utility,
    Special,
}

/// Where a definition attaches on its target entity.
///
/// Explicit slots resolve through the entity's slot bindings; `Passive` is
/// a category, not a slot, and resolves by scanning the entity's attached
/// capability components. `None` means the definition is published without
/// being composed into any family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentTarget {
    /// No attachment point
    #[default]
    None,
    /// One of the entity's explicit equipment slots
    Slot(SkillSlot),
    /// The always-active passive category
    Passive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_default_is_none() {
        assert_eq!(AttachmentTarget::default(), AttachmentTarget::None);
    }

    #[test]
    fn test_slot_deserializes_lowercase() {
        #[derive(serde::Deserialize)]
        struct Wrap {
            slot: SkillSlot,
        }

        let wrap: Wrap = toml::from_str("slot = \"utility\"").unwrap();
        assert_eq!(wrap.slot, SkillSlot::Utility);
    }
}
