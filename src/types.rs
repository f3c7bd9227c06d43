//! Small value types shared by the renderer and the configuration layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A heading depth that is always within `1..=6`.
///
/// Construction never fails: out-of-range values are clamped to the nearest
/// valid level, so a configured base level of `0` behaves as `1` and `9`
/// behaves as `6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, schemars::JsonSchema)]
#[serde(transparent)]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: HeadingLevel = HeadingLevel(1);
    pub const MAX: HeadingLevel = HeadingLevel(6);

    /// Clamp an arbitrary integer into the valid heading range.
    pub fn clamped(level: i64) -> Self {
        Self(level.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Level of a heading written with `marker_count` `#` characters when the
    /// document's top heading maps to `self`.
    ///
    /// A single `#` maps to `self`; each further `#` goes one deeper, never past 6.
    pub fn offset_by_markers(self, marker_count: usize) -> Self {
        let extra = marker_count.saturating_sub(1).min(Self::MAX.0 as usize) as i64;
        Self::clamped(self.0 as i64 + extra)
    }

    /// Zero-based index for tables keyed by level.
    pub(crate) fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self::MIN
    }
}

impl From<i64> for HeadingLevel {
    fn from(level: i64) -> Self {
        Self::clamped(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for HeadingLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(Self::clamped(raw))
    }
}
