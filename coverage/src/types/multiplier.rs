//! Damage multipliers between a pair of types

use crate::error::CoverageError;

/// A single type-vs-type damage multiplier.
///
/// The chart only ever holds these four values, so the table is total
/// over them and no other coefficient can be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Multiplier {
    /// 0x
    Immune,
    /// 0.5x
    Half,
    /// 1x
    Neutral,
    /// 2x
    Double,
}

impl Multiplier {
    /// Numeric factor (0, 0.5, 1 or 2)
    pub fn value(self) -> f32 {
        match self {
            Multiplier::Immune => 0.0,
            Multiplier::Half => 0.5,
            Multiplier::Neutral => 1.0,
            Multiplier::Double => 2.0,
        }
    }
}

impl From<Multiplier> for f32 {
    fn from(m: Multiplier) -> f32 {
        m.value()
    }
}

impl TryFrom<f32> for Multiplier {
    type Error = CoverageError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if value == 0.0 {
            Ok(Multiplier::Immune)
        } else if value == 0.5 {
            Ok(Multiplier::Half)
        } else if value == 1.0 {
            Ok(Multiplier::Neutral)
        } else if value == 2.0 {
            Ok(Multiplier::Double)
        } else {
            Err(CoverageError::InvalidMultiplier(value))
        }
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_values() {
        assert_eq!(Multiplier::Immune.value(), 0.0);
        assert_eq!(Multiplier::Half.value(), 0.5);
        assert_eq!(Multiplier::Neutral.value(), 1.0);
        assert_eq!(Multiplier::Double.value(), 2.0);
    }

    #[test]
    fn test_multiplier_try_from() {
        assert_eq!(Multiplier::try_from(0.5).unwrap(), Multiplier::Half);
        assert_eq!(Multiplier::try_from(2.0).unwrap(), Multiplier::Double);
        assert_eq!(
            Multiplier::try_from(4.0),
            Err(CoverageError::InvalidMultiplier(4.0))
        );
        assert!(Multiplier::try_from(0.25).is_err());
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::Double.to_string(), "2x");
        assert_eq!(Multiplier::Half.to_string(), "0.5x");
        assert_eq!(Multiplier::Immune.to_string(), "0x");
    }
}
