//! Layout configuration for stacktile.
//!
//! A [`Configuration`] describes how one tag set is laid out. Configurations are owned by a
//! [`ConfigStore`], one per output, and are only ever changed through the [`PendingChanges`]
//! overlay, which collects parsed user [`Command`]s until the next layout demand.

#[macro_use]
extern crate tracing;

use std::fmt;
use std::str::FromStr;

pub mod command;
pub mod pending;
pub mod store;

pub use crate::command::{Command, CommandError};
pub use crate::pending::{Change, PendingChanges, Toggle};
pub use crate::store::ConfigStore;

/// Layout settings for a single tag set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Configuration {
    /// Gap between windows, and between zones.
    pub inner_padding: u32,
    /// Gap between the windows and the edges of the output.
    pub outer_padding: u32,
    pub primary_count: u32,
    pub primary_ratio: Ratio,
    pub primary_sublayout: Sublayout,
    /// Edge of the output occupied by the primary zone.
    pub primary_position: Position,
    pub secondary_count: u32,
    pub secondary_ratio: Ratio,
    pub secondary_sublayout: Sublayout,
    pub remainder_sublayout: Sublayout,
    /// Put every window into the primary zone regardless of `primary_count`.
    pub all_primary: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            inner_padding: 10,
            outer_padding: 10,
            primary_count: 1,
            primary_ratio: Ratio::new(0.6),
            primary_sublayout: Sublayout::Rows,
            primary_position: Position::Left,
            secondary_count: 1,
            secondary_ratio: Ratio::new(0.6),
            secondary_sublayout: Sublayout::Rows,
            remainder_sublayout: Sublayout::Stack,
            all_primary: false,
        }
    }
}

impl Configuration {
    /// Name reported to the compositor when committing a layout.
    pub fn layout_name(&self) -> String {
        if self.all_primary {
            return self.primary_sublayout.to_string();
        }

        format!(
            "{}|{}|{}",
            self.primary_sublayout, self.secondary_sublayout, self.remainder_sublayout
        )
    }
}

/// Fraction of an axis claimed by a zone.
///
/// Always within [`Ratio::MIN`]..=[`Ratio::MAX`]; out-of-range values are clamped on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Ratio(f64);

impl Ratio {
    pub const MIN: f64 = 0.1;
    pub const MAX: f64 = 0.9;

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }

        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Returns this ratio moved by `delta`, clamped back into range.
    pub fn adjusted(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self(0.6)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Strategy used to tile the windows inside one zone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Sublayout {
    /// Side by side, splitting the width.
    Columns,
    /// On top of each other, splitting the height.
    #[default]
    Rows,
    /// Slightly smaller windows fanned out diagonally.
    Stack,
    /// A near-square grid, filled row by row.
    Grid,
    /// Every window covers the whole zone.
    Full,
}

impl Sublayout {
    pub fn name(self) -> &'static str {
        match self {
            Sublayout::Columns => "columns",
            Sublayout::Rows => "rows",
            Sublayout::Stack => "stack",
            Sublayout::Grid => "grid",
            Sublayout::Full => "full",
        }
    }
}

impl fmt::Display for Sublayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sublayout {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "columns" => Ok(Self::Columns),
            "rows" => Ok(Self::Rows),
            "stack" => Ok(Self::Stack),
            "grid" => Ok(Self::Grid),
            "full" => Ok(Self::Full),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Edge of the available area a zone is carved from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Position {
    Top,
    Right,
    Bottom,
    #[default]
    Left,
}

impl Position {
    pub fn name(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Right => "right",
            Position::Bottom => "bottom",
            Position::Left => "left",
        }
    }

    /// Whether a zone at this position splits the area horizontally (spans its full height).
    pub fn is_horizontal(self) -> bool {
        matches!(self, Position::Left | Position::Right)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownVariant(pub String);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn ratio_is_clamped() {
        assert_eq!(Ratio::new(0.05).get(), 0.1);
        assert_eq!(Ratio::new(1.5).get(), 0.9);
        assert_eq!(Ratio::new(0.5).get(), 0.5);
        assert_eq!(Ratio::new(f64::NAN).get(), 0.1);
        assert_eq!(Ratio::new(0.85).adjusted(0.1).get(), 0.9);
    }

    #[test]
    fn sublayout_names_round_trip() {
        for sublayout in [
            Sublayout::Columns,
            Sublayout::Rows,
            Sublayout::Stack,
            Sublayout::Grid,
            Sublayout::Full,
        ] {
            assert_eq!(sublayout.name().parse::<Sublayout>(), Ok(sublayout));
        }
        assert!("diagonal".parse::<Sublayout>().is_err());
    }

    #[test]
    fn position_orientation() {
        assert!(Position::Left.is_horizontal());
        assert!(Position::Right.is_horizontal());
        assert!(!Position::Top.is_horizontal());
        assert!(!Position::Bottom.is_horizontal());
        assert_eq!("bottom".parse::<Position>(), Ok(Position::Bottom));
        assert_eq!(
            "middle".parse::<Position>(),
            Err(UnknownVariant("middle".to_owned()))
        );
    }

    #[test]
    fn layout_name() {
        let mut config = Configuration::default();
        assert_eq!(config.layout_name(), "rows|rows|stack");

        config.all_primary = true;
        config.primary_sublayout = Sublayout::Full;
        assert_eq!(config.layout_name(), "full");
    }

    proptest! {
        #[test]
        fn ratio_always_in_range(value in any::<f64>(), delta in -10f64..10f64) {
            let ratio = Ratio::new(value);
            prop_assert!((Ratio::MIN..=Ratio::MAX).contains(&ratio.get()));

            let adjusted = ratio.adjusted(delta);
            prop_assert!((Ratio::MIN..=Ratio::MAX).contains(&adjusted.get()));
        }
    }
}
