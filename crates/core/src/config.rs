//! Layout and rule configuration.
//!
//! All tunable numbers live in explicit config objects handed to the table at
//! construction, so tests can vary table geometry freely.

use std::env;
use std::fmt;

use crate::error::{Result, TableError};
use crate::types::{
    ATLAS_COLUMNS, BOTTOM_MARGIN, CARD_BACK_CELL, CARD_HEIGHT, CARD_WIDTH, POPUP_HEIGHT,
    SIDE_MARGIN, TRICK_GAP,
};

/// Exact fraction used for band sizes.
///
/// Integer arithmetic keeps `900 * 2/3` at exactly 600.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub numerator: u32,
    pub denominator: u32,
}

impl Ratio {
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Scale `value`, truncating toward zero.
    pub fn apply(&self, value: i32) -> i32 {
        if self.denominator == 0 {
            return 0;
        }
        (value as i64 * self.numerator as i64 / self.denominator as i64) as i32
    }

    /// Parse "a/b" or a bare integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use card_table_core::config::Ratio;
    ///
    /// assert_eq!(Ratio::from_str("2/3"), Some(Ratio::new(2, 3)));
    /// assert_eq!(Ratio::from_str(" 1 / 6 "), Some(Ratio::new(1, 6)));
    /// assert_eq!(Ratio::from_str("1/0"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (n.trim().parse().ok()?, d.trim().parse().ok()?),
            None => (s.trim().parse().ok()?, 1),
        };
        (den != 0).then_some(Self::new(num, den))
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Sprite sheet geometry; must match the asset exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasGeometry {
    pub cell_width: i32,
    pub cell_height: i32,
    pub columns: u32,
    pub back_cell: u32,
}

impl Default for AtlasGeometry {
    fn default() -> Self {
        Self {
            cell_width: CARD_WIDTH,
            cell_height: CARD_HEIGHT,
            columns: ATLAS_COLUMNS,
            back_cell: CARD_BACK_CELL,
        }
    }
}

impl AtlasGeometry {
    pub fn validate(&self) -> Result<()> {
        if self.cell_width <= 0 || self.cell_height <= 0 {
            return Err(TableError::InvalidConfig(format!(
                "atlas cell must be positive, got {}x{}",
                self.cell_width, self.cell_height
            )));
        }
        if self.columns == 0 {
            return Err(TableError::InvalidConfig("atlas needs at least one column".into()));
        }
        Ok(())
    }
}

/// Table layout parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Card size drawn on the table
    pub card_width: i32,
    pub card_height: i32,
    /// Local hand band width as a share of table width
    pub width_ratio: Ratio,
    /// Side hand band height as a share of table height (backs showing)
    pub height_ratio: Ratio,
    /// Side hand band height when rival hands are face up
    pub face_up_height_ratio: Ratio,
    pub popup: i32,
    pub side_margin: i32,
    pub bottom_margin: i32,
    pub trick_gap: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,
            width_ratio: Ratio::new(2, 3),
            height_ratio: Ratio::new(1, 6),
            face_up_height_ratio: Ratio::new(2, 3),
            popup: POPUP_HEIGHT,
            side_margin: SIDE_MARGIN,
            bottom_margin: BOTTOM_MARGIN,
            trick_gap: TRICK_GAP,
        }
    }
}

impl LayoutConfig {
    /// Defaults overridden from environment variables.
    ///
    /// - `CARD_TABLE_WIDTH_RATIO` (e.g. "2/3")
    /// - `CARD_TABLE_HEIGHT_RATIO` (e.g. "1/6")
    /// - `CARD_TABLE_FACE_UP_HEIGHT_RATIO` (e.g. "2/3")
    /// - `CARD_TABLE_POPUP`
    /// - `CARD_TABLE_TRICK_GAP`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            width_ratio: env_ratio("CARD_TABLE_WIDTH_RATIO").unwrap_or(defaults.width_ratio),
            height_ratio: env_ratio("CARD_TABLE_HEIGHT_RATIO").unwrap_or(defaults.height_ratio),
            face_up_height_ratio: env_ratio("CARD_TABLE_FACE_UP_HEIGHT_RATIO")
                .unwrap_or(defaults.face_up_height_ratio),
            popup: env_i32("CARD_TABLE_POPUP").unwrap_or(defaults.popup),
            trick_gap: env_i32("CARD_TABLE_TRICK_GAP").unwrap_or(defaults.trick_gap),
            ..defaults
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.card_width <= 0 || self.card_height <= 0 {
            return Err(TableError::InvalidConfig(format!(
                "card size must be positive, got {}x{}",
                self.card_width, self.card_height
            )));
        }
        for (name, ratio) in [
            ("width_ratio", self.width_ratio),
            ("height_ratio", self.height_ratio),
            ("face_up_height_ratio", self.face_up_height_ratio),
        ] {
            if ratio.denominator == 0 {
                return Err(TableError::InvalidConfig(format!("{name} has a zero denominator")));
            }
        }
        if self.popup < 0 || self.trick_gap < 0 {
            return Err(TableError::InvalidConfig(
                "popup and trick gap must not be negative".into(),
            ));
        }
        Ok(())
    }

    /// Band ratio for side seats under the current visibility rule
    pub fn side_ratio(&self, face_up: bool) -> Ratio {
        if face_up {
            self.face_up_height_ratio
        } else {
            self.height_ratio
        }
    }
}

/// Table rules that affect drawing and input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableRule {
    /// Rival hands drawn face up and selectable
    pub show_rival_hands: bool,
}

impl TableRule {
    /// Reads `CARD_TABLE_SHOW_RIVALS` ("1" or "true").
    pub fn from_env() -> Self {
        let show_rival_hands = env::var("CARD_TABLE_SHOW_RIVALS")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);
        Self { show_rival_hands }
    }
}

/// Everything a table needs besides its deck and seats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableConfig {
    pub layout: LayoutConfig,
    pub atlas: AtlasGeometry,
    pub rule: TableRule,
}

impl TableConfig {
    pub fn from_env() -> Self {
        Self {
            layout: LayoutConfig::from_env(),
            atlas: AtlasGeometry::default(),
            rule: TableRule::from_env(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.atlas.validate()
    }
}

fn env_ratio(key: &str) -> Option<Ratio> {
    let raw = env::var(key).ok()?;
    let parsed = Ratio::from_str(&raw);
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "ignoring unparsable ratio");
    }
    parsed
}

fn env_i32(key: &str) -> Option<i32> {
    let raw = env::var(key).ok()?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        tracing::warn!(key, value = %raw, "ignoring unparsable integer");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_truncates_like_integer_division() {
        assert_eq!(Ratio::new(2, 3).apply(900), 600);
        assert_eq!(Ratio::new(1, 6).apply(700), 116);
        assert_eq!(Ratio::new(2, 3).apply(0), 0);
    }

    #[test]
    fn ratio_rejects_garbage() {
        assert_eq!(Ratio::from_str("two thirds"), None);
        assert_eq!(Ratio::from_str("3"), Some(Ratio::new(3, 1)));
        assert_eq!(Ratio::new(2, 3).to_string(), "2/3");
    }

    #[test]
    fn default_layout_is_valid() {
        let cfg = LayoutConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.side_ratio(false), Ratio::new(1, 6));
        assert_eq!(cfg.side_ratio(true), Ratio::new(2, 3));
    }

    #[test]
    fn validate_rejects_bad_values() {
        let cfg = LayoutConfig {
            card_width: 0,
            ..LayoutConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(TableError::InvalidConfig(_))));

        let cfg = LayoutConfig {
            width_ratio: Ratio::new(1, 0),
            ..LayoutConfig::default()
        };
        assert!(cfg.validate().is_err());

        let geometry = AtlasGeometry {
            columns: 0,
            ..AtlasGeometry::default()
        };
        assert!(geometry.validate().is_err());
    }
}
