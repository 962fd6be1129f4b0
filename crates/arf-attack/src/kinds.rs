//! Enumerated attack fields.
//!
//! Records store these as raw bytes and keep unknown values untouched; the
//! enums here are only a typed view over known values.

/// What an attack does when played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AttackType {
    /// Deals damage.
    Attack = 0,
    /// Raises defense.
    Defense = 1,
    /// Restores health.
    Heal = 2,
    /// Boosts stats.
    Boost = 3,
    /// Applies a status effect only.
    Effect = 4,
}

impl AttackType {
    /// Get all attack types in order.
    pub const fn all() -> [AttackType; 5] {
        [
            AttackType::Attack,
            AttackType::Defense,
            AttackType::Heal,
            AttackType::Boost,
            AttackType::Effect,
        ]
    }

    /// Get the name of this attack type.
    pub const fn name(&self) -> &'static str {
        match self {
            AttackType::Attack => "Attack",
            AttackType::Defense => "Defense",
            AttackType::Heal => "Heal",
            AttackType::Boost => "Boost",
            AttackType::Effect => "Effect",
        }
    }

    /// Get the raw byte stored in a record.
    pub const fn raw(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for AttackType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(AttackType::Attack),
            1 => Ok(AttackType::Defense),
            2 => Ok(AttackType::Heal),
            3 => Ok(AttackType::Boost),
            4 => Ok(AttackType::Effect),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for AttackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Status effect applied by an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EffectKind {
    /// No effect.
    None = 0,
    Burn = 1,
    Poison = 2,
    Paralysis = 3,
    Confusion = 4,
    /// Raises attack.
    AttackUp = 5,
    /// Raises defense.
    DefenseUp = 6,
    /// Raises attack and defense.
    AttackAndDefenseUp = 7,
}

impl EffectKind {
    /// Get all effect kinds in order.
    pub const fn all() -> [EffectKind; 8] {
        [
            EffectKind::None,
            EffectKind::Burn,
            EffectKind::Poison,
            EffectKind::Paralysis,
            EffectKind::Confusion,
            EffectKind::AttackUp,
            EffectKind::DefenseUp,
            EffectKind::AttackAndDefenseUp,
        ]
    }

    /// Get the name of this effect.
    pub const fn name(&self) -> &'static str {
        match self {
            EffectKind::None => "None",
            EffectKind::Burn => "Burn",
            EffectKind::Poison => "Poison",
            EffectKind::Paralysis => "Paralysis",
            EffectKind::Confusion => "Confusion",
            EffectKind::AttackUp => "AttackUp",
            EffectKind::DefenseUp => "DefenseUp",
            EffectKind::AttackAndDefenseUp => "AttackAndDefenseUp",
        }
    }

    /// Get the raw byte stored in a record.
    pub const fn raw(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for EffectKind {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(EffectKind::None),
            1 => Ok(EffectKind::Burn),
            2 => Ok(EffectKind::Poison),
            3 => Ok(EffectKind::Paralysis),
            4 => Ok(EffectKind::Confusion),
            5 => Ok(EffectKind::AttackUp),
            6 => Ok(EffectKind::DefenseUp),
            7 => Ok(EffectKind::AttackAndDefenseUp),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for EffectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attack_type_values() {
        for (i, kind) in AttackType::all().into_iter().enumerate() {
            assert_eq!(kind.raw() as usize, i);
            assert_eq!(AttackType::try_from(kind.raw()), Ok(kind));
        }
        assert_eq!(AttackType::try_from(5), Err(5));
    }

    #[test]
    fn test_effect_kind_values() {
        for (i, kind) in EffectKind::all().into_iter().enumerate() {
            assert_eq!(kind.raw() as usize, i);
            assert_eq!(EffectKind::try_from(kind.raw()), Ok(kind));
        }
        assert_eq!(EffectKind::try_from(0xFF), Err(0xFF));
    }

    #[test]
    fn test_display() {
        assert_eq!(AttackType::Heal.to_string(), "Heal");
        assert_eq!(EffectKind::AttackAndDefenseUp.to_string(), "AttackAndDefenseUp");
    }
}
