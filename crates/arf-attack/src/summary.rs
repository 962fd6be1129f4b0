//! Decoded snapshot of an attack record.

use std::fmt;

use crate::kinds::{AttackType, EffectKind};
use crate::record::AttackRecord;

/// Every decoded field of an [`AttackRecord`] plus its integrity state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttackSummary {
    pub primary_key: u16,
    pub id: u16,
    pub name: String,
    pub display_text: String,
    /// Raw attack type byte.
    pub attack_type: u8,
    /// Name of the attack type, if known.
    pub attack_type_name: Option<&'static str>,
    /// Raw effect kind byte.
    pub effect_kind: u8,
    /// Name of the effect kind, if known.
    pub effect_kind_name: Option<&'static str>,
    pub effect_chance: u8,
    pub strength: u8,
    pub stored_checksum: u16,
    pub computed_checksum: u16,
    pub header_valid: bool,
    pub checksum_valid: bool,
}

impl AttackSummary {
    /// Decode all fields of `record`.
    pub fn from_record(record: &AttackRecord) -> Self {
        let effect = record.effect_block();
        let stored_checksum = record.stored_checksum();
        let computed_checksum = record.compute_checksum();

        Self {
            primary_key: record.primary_key(),
            id: record.id(),
            name: record.name(),
            display_text: record.display_text(),
            attack_type: record.attack_type_raw(),
            attack_type_name: record.attack_type().map(|t| t.name()),
            effect_kind: effect.kind,
            effect_kind_name: effect.effect_kind().map(|k| k.name()),
            effect_chance: effect.chance,
            strength: record.strength(),
            stored_checksum,
            computed_checksum,
            header_valid: record.has_valid_header(),
            checksum_valid: stored_checksum == computed_checksum,
        }
    }

    /// The attack type, if known.
    pub fn attack_type(&self) -> Option<AttackType> {
        AttackType::try_from(self.attack_type).ok()
    }

    /// The effect kind, if known.
    pub fn effect_kind(&self) -> Option<EffectKind> {
        EffectKind::try_from(self.effect_kind).ok()
    }
}

impl fmt::Display for AttackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Id:           {:#06x} ({})", self.id, self.id)?;
        writeln!(f, "Primary key:  {}", self.primary_key)?;
        writeln!(f, "Name:         {}", self.name)?;
        writeln!(f, "Text:         {}", self.display_text)?;
        match self.attack_type_name {
            Some(name) => writeln!(f, "Type:         {}", name)?,
            None => writeln!(f, "Type:         unknown ({:#04x})", self.attack_type)?,
        }
        match self.effect_kind_name {
            Some(name) => writeln!(f, "Effect:       {}", name)?,
            None => writeln!(f, "Effect:       unknown ({:#04x})", self.effect_kind)?,
        }
        match self.effect_chance {
            0 => writeln!(f, "Chance:       never")?,
            1 => writeln!(f, "Chance:       always")?,
            n => writeln!(f, "Chance:       1 in {}", n)?,
        }
        writeln!(f, "Strength:     {}", self.strength)?;
        writeln!(
            f,
            "Header:       {}",
            if self.header_valid { "ok" } else { "INVALID" }
        )?;
        write!(
            f,
            "Checksum:     {:#06x} ({})",
            self.stored_checksum,
            if self.checksum_valid {
                "ok".to_string()
            } else {
                format!("expected {:#06x}", self.computed_checksum)
            }
        )
    }
}
