//! The tooth position registry.
//!
//! All 52 FDI positions (32 permanent, 20 deciduous) are defined at compile
//! time. Positions are never created or destroyed at runtime; everything else
//! in the crate is keyed by this enumeration.

use std::fmt;

use crate::error::ChartError;

/// One of the 52 fixed FDI tooth positions.
///
/// The discriminant is the two-digit FDI code: the first digit is the
/// quadrant (1-4 permanent, 5-8 deciduous), the second the position within
/// the quadrant counted from the midline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ToothPosition {
    // Permanent: upper right (1x), upper left (2x)
    T11 = 11, T12 = 12, T13 = 13, T14 = 14, T15 = 15, T16 = 16, T17 = 17, T18 = 18,
    T21 = 21, T22 = 22, T23 = 23, T24 = 24, T25 = 25, T26 = 26, T27 = 27, T28 = 28,
    // Permanent: lower left (3x), lower right (4x)
    T31 = 31, T32 = 32, T33 = 33, T34 = 34, T35 = 35, T36 = 36, T37 = 37, T38 = 38,
    T41 = 41, T42 = 42, T43 = 43, T44 = 44, T45 = 45, T46 = 46, T47 = 47, T48 = 48,
    // Deciduous: upper right (5x), upper left (6x)
    T51 = 51, T52 = 52, T53 = 53, T54 = 54, T55 = 55,
    T61 = 61, T62 = 62, T63 = 63, T64 = 64, T65 = 65,
    // Deciduous: lower left (7x), lower right (8x)
    T71 = 71, T72 = 72, T73 = 73, T74 = 74, T75 = 75,
    T81 = 81, T82 = 82, T83 = 83, T84 = 84, T85 = 85,
}

use ToothPosition::{
    T11, T12, T13, T14, T15, T16, T17, T18, T21, T22, T23, T24, T25, T26, T27, T28, T31, T32,
    T33, T34, T35, T36, T37, T38, T41, T42, T43, T44, T45, T46, T47, T48, T51, T52, T53, T54,
    T55, T61, T62, T63, T64, T65, T71, T72, T73, T74, T75, T81, T82, T83, T84, T85,
};

impl ToothPosition {
    /// The 32 permanent positions in FDI order.
    pub const PERMANENT: [ToothPosition; 32] = [
        T11, T12, T13, T14, T15, T16, T17, T18,
        T21, T22, T23, T24, T25, T26, T27, T28,
        T31, T32, T33, T34, T35, T36, T37, T38,
        T41, T42, T43, T44, T45, T46, T47, T48,
    ];

    /// The 20 deciduous positions in FDI order.
    pub const DECIDUOUS: [ToothPosition; 20] = [
        T51, T52, T53, T54, T55,
        T61, T62, T63, T64, T65,
        T71, T72, T73, T74, T75,
        T81, T82, T83, T84, T85,
    ];

    /// All 52 positions, permanent first.
    pub const ALL: [ToothPosition; 52] = [
        T11, T12, T13, T14, T15, T16, T17, T18,
        T21, T22, T23, T24, T25, T26, T27, T28,
        T31, T32, T33, T34, T35, T36, T37, T38,
        T41, T42, T43, T44, T45, T46, T47, T48,
        T51, T52, T53, T54, T55,
        T61, T62, T63, T64, T65,
        T71, T72, T73, T74, T75,
        T81, T82, T83, T84, T85,
    ];

    /// Parse a two-digit FDI code such as `"11"` or `"85"`.
    pub fn from_code(code: &str) -> Result<Self, ChartError> {
        let number: u8 = code
            .trim()
            .parse()
            .map_err(|_| ChartError::InvalidPosition(code.to_string()))?;
        Self::ALL
            .iter()
            .copied()
            .find(|position| *position as u8 == number)
            .ok_or_else(|| ChartError::InvalidPosition(code.to_string()))
    }

    /// The two-digit FDI number, e.g. `11`.
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Quadrant digit (1-4 permanent, 5-8 deciduous).
    pub fn quadrant(self) -> u8 {
        self as u8 / 10
    }

    /// Position within the quadrant, counted from the midline (1-8 or 1-5).
    pub fn position_in_quadrant(self) -> u8 {
        self as u8 % 10
    }

    /// Whether this is a permanent or deciduous position.
    pub fn dentition(self) -> Dentition {
        if self.quadrant() <= 4 {
            Dentition::Permanent
        } else {
            Dentition::Deciduous
        }
    }
}

impl fmt::Display for ToothPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

impl serde::Serialize for ToothPosition {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for ToothPosition {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_code(&s).map_err(serde::de::Error::custom)
    }
}

/// Dentition type of a single position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dentition {
    Permanent,
    Deciduous,
}

/// Which subset of positions the chart shows and counts.
///
/// Changing the mode never alters the resolved status mapping, only which
/// subset of it is visible and counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Permanent and deciduous positions together.
    #[default]
    Combined,
    /// Permanent positions only.
    Permanent,
    /// Deciduous positions only.
    Deciduous,
}

impl ChartMode {
    /// The positions active under this mode.
    pub fn active_positions(self) -> &'static [ToothPosition] {
        match self {
            Self::Combined => &ToothPosition::ALL,
            Self::Permanent => &ToothPosition::PERMANENT,
            Self::Deciduous => &ToothPosition::DECIDUOUS,
        }
    }

    /// Whether `position` is active under this mode.
    pub fn contains(self, position: ToothPosition) -> bool {
        match self {
            Self::Combined => true,
            Self::Permanent => position.dentition() == Dentition::Permanent,
            Self::Deciduous => position.dentition() == Dentition::Deciduous,
        }
    }

    /// Display name for mode selectors.
    pub fn label(self) -> &'static str {
        match self {
            Self::Combined => "Combined",
            Self::Permanent => "Permanent",
            Self::Deciduous => "Deciduous",
        }
    }

    /// All modes in selector order.
    pub fn all() -> &'static [ChartMode] {
        &[Self::Deciduous, Self::Permanent, Self::Combined]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_partition() {
        assert_eq!(ToothPosition::ALL.len(), 52);
        assert_eq!(ToothPosition::PERMANENT.len(), 32);
        assert_eq!(ToothPosition::DECIDUOUS.len(), 20);
        for position in ToothPosition::PERMANENT {
            assert_eq!(position.dentition(), Dentition::Permanent);
        }
        for position in ToothPosition::DECIDUOUS {
            assert_eq!(position.dentition(), Dentition::Deciduous);
        }
    }

    #[test]
    fn code_round_trip() {
        for position in ToothPosition::ALL {
            let parsed = ToothPosition::from_code(&position.to_string()).expect("valid code");
            assert_eq!(parsed, position);
        }
        assert!(ToothPosition::from_code("19").is_err());
        assert!(ToothPosition::from_code("56").is_err());
        assert!(ToothPosition::from_code("molar").is_err());
    }

    #[test]
    fn mode_scoping() {
        assert!(ChartMode::Combined.contains(ToothPosition::T11));
        assert!(ChartMode::Combined.contains(ToothPosition::T85));
        assert!(ChartMode::Permanent.contains(ToothPosition::T48));
        assert!(!ChartMode::Permanent.contains(ToothPosition::T51));
        assert!(ChartMode::Deciduous.contains(ToothPosition::T51));
        assert!(!ChartMode::Deciduous.contains(ToothPosition::T11));
    }
}
