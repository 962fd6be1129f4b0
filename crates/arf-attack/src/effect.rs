//! The two-byte effect block nested in an attack body.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::kinds::EffectKind;

/// Size of the effect block in bytes.
pub const EFFECT_BLOCK_SIZE: usize = 2;

/// Status effect and trigger chance of an attack.
///
/// `chance` is the denominator of a 1-in-N roll: `1` always triggers, `0`
/// never does. The record does not roll; it only stores the byte.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
#[repr(C)]
pub struct EffectBlock {
    /// Raw effect kind byte.
    pub kind: u8,
    /// Trigger chance denominator.
    pub chance: u8,
}

impl EffectBlock {
    /// An empty block: no effect, never triggers.
    pub const NONE: Self = Self { kind: 0, chance: 0 };

    /// Create a block from a known effect kind.
    pub const fn new(kind: EffectKind, chance: u8) -> Self {
        Self {
            kind: kind as u8,
            chance,
        }
    }

    /// Create a block from raw bytes.
    pub fn from_bytes(bytes: [u8; EFFECT_BLOCK_SIZE]) -> Self {
        zerocopy::transmute!(bytes)
    }

    /// Convert to raw bytes.
    pub fn to_bytes(&self) -> [u8; EFFECT_BLOCK_SIZE] {
        zerocopy::transmute!(*self)
    }

    /// The effect as a known kind, if the byte is in range.
    pub fn effect_kind(&self) -> Option<EffectKind> {
        EffectKind::try_from(self.kind).ok()
    }

    /// Check if the effect can never trigger.
    pub fn never_triggers(&self) -> bool {
        self.chance == 0
    }

    /// Check if the effect triggers every time.
    pub fn triggers_always(&self) -> bool {
        self.chance == 1
    }

    /// The `N` in a 1-in-N chance, or `None` if it never triggers.
    pub fn one_in(&self) -> Option<u8> {
        (self.chance != 0).then_some(self.chance)
    }
}
