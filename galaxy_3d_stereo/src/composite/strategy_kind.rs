/// Identifiers of the presentation strategies selectable by the host

use std::fmt;
use std::str::FromStr;
use crate::error::Error;
use crate::engine_param_err;
use super::color::AnaglyphPreset;

/// One of the six selectable presentation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    /// Full-size side-by-side (the controller widens the fov)
    SideBySide,
    /// Half-width side-by-side packing
    SideBySideHalf,
    Interlaced,
    AnaglyphColor,
    AnaglyphRedCyan,
    AnaglyphGray,
}

impl StrategyKind {
    /// Every kind, in menu order
    pub const ALL: [StrategyKind; 6] = [
        StrategyKind::SideBySide,
        StrategyKind::SideBySideHalf,
        StrategyKind::Interlaced,
        StrategyKind::AnaglyphColor,
        StrategyKind::AnaglyphRedCyan,
        StrategyKind::AnaglyphGray,
    ];

    /// Identifier used by `select_strategy()`
    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::SideBySide => "sbs",
            StrategyKind::SideBySideHalf => "sbsHalf",
            StrategyKind::Interlaced => "interlaced",
            StrategyKind::AnaglyphColor => "anaColor",
            StrategyKind::AnaglyphRedCyan => "anaRedcyan",
            StrategyKind::AnaglyphGray => "anaGray",
        }
    }

    /// Human-readable name for host menus
    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::SideBySide => "Side by side",
            StrategyKind::SideBySideHalf => "Side by side (half size)",
            StrategyKind::Interlaced => "Interlaced",
            StrategyKind::AnaglyphColor => "Anaglyph (color)",
            StrategyKind::AnaglyphRedCyan => "Anaglyph (red/cyan)",
            StrategyKind::AnaglyphGray => "Anaglyph (gray)",
        }
    }

    /// Anaglyph color filter, for anaglyph kinds
    pub fn anaglyph_preset(self) -> Option<AnaglyphPreset> {
        match self {
            StrategyKind::AnaglyphColor => Some(AnaglyphPreset::Color),
            StrategyKind::AnaglyphRedCyan => Some(AnaglyphPreset::RedCyan),
            StrategyKind::AnaglyphGray => Some(AnaglyphPreset::Gray),
            _ => None,
        }
    }

    /// True for the full-size side-by-side kind, the only one that scales the fov
    pub fn scales_fov(self) -> bool {
        self == StrategyKind::SideBySide
    }
}

impl FromStr for StrategyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| engine_param_err!("galaxy3d::stereo::Controller",
                "Unknown stereo strategy '{}'", s))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "strategy_kind_tests.rs"]
mod tests;
