//! Changes received from user commands that have not been applied to a configuration yet.
//!
//! Commands arrive before the compositor tells us which tag set they are meant for, so they are
//! buffered per output and applied to whichever configuration gets resolved next.

use crate::{Command, Configuration, Position, Ratio, Sublayout};

/// A buffered edit of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Change<T, D = T> {
    /// Replace the current value.
    Set(T),
    /// Move the current value by a delta.
    Adjust(D),
}

/// Adjustment of a boolean field; always flips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PendingChanges {
    pub inner_padding: Option<Change<u32, i32>>,
    pub outer_padding: Option<Change<u32, i32>>,
    pub primary_count: Option<Change<u32, i32>>,
    pub primary_ratio: Option<Change<Ratio, f64>>,
    pub primary_sublayout: Option<Sublayout>,
    pub primary_position: Option<Position>,
    pub secondary_count: Option<Change<u32, i32>>,
    pub secondary_ratio: Option<Change<Ratio, f64>>,
    pub secondary_sublayout: Option<Sublayout>,
    pub remainder_sublayout: Option<Sublayout>,
    pub all_primary: Option<Change<bool, Toggle>>,
}

impl PendingChanges {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Records a parsed command, replacing any earlier change of the same field.
    ///
    /// Returns `false` for [`Command::Reset`], which is not a field change and must be handled by
    /// the owning [`ConfigStore`](crate::ConfigStore).
    pub fn record(&mut self, command: Command) -> bool {
        match command {
            Command::Reset => return false,
            Command::InnerPadding(change) => self.inner_padding = Some(change),
            Command::OuterPadding(change) => self.outer_padding = Some(change),
            Command::AllPadding(change) => {
                self.inner_padding = Some(change);
                self.outer_padding = Some(change);
            }
            Command::PrimaryCount(change) => self.primary_count = Some(change),
            Command::PrimaryRatio(change) => self.primary_ratio = Some(change),
            Command::PrimarySublayout(sublayout) => self.primary_sublayout = Some(sublayout),
            Command::PrimaryPosition(position) => self.primary_position = Some(position),
            Command::SecondaryCount(change) => self.secondary_count = Some(change),
            Command::SecondaryRatio(change) => self.secondary_ratio = Some(change),
            Command::SecondarySublayout(sublayout) => self.secondary_sublayout = Some(sublayout),
            Command::RemainderSublayout(sublayout) => self.remainder_sublayout = Some(sublayout),
            Command::AllPrimary(change) => self.all_primary = Some(change),
        }

        true
    }

    /// Applies every pending change to `config` and clears them.
    pub fn apply(&mut self, config: &mut Configuration) {
        apply_count(&mut config.inner_padding, self.inner_padding.take(), "inner_padding");
        apply_count(&mut config.outer_padding, self.outer_padding.take(), "outer_padding");
        apply_count(&mut config.primary_count, self.primary_count.take(), "primary_count");
        apply_count(&mut config.secondary_count, self.secondary_count.take(), "secondary_count");

        apply_ratio(&mut config.primary_ratio, self.primary_ratio.take());
        apply_ratio(&mut config.secondary_ratio, self.secondary_ratio.take());

        if let Some(sublayout) = self.primary_sublayout.take() {
            config.primary_sublayout = sublayout;
        }
        if let Some(position) = self.primary_position.take() {
            config.primary_position = position;
        }
        if let Some(sublayout) = self.secondary_sublayout.take() {
            config.secondary_sublayout = sublayout;
        }
        if let Some(sublayout) = self.remainder_sublayout.take() {
            config.remainder_sublayout = sublayout;
        }

        match self.all_primary.take() {
            Some(Change::Set(value)) => config.all_primary = value,
            Some(Change::Adjust(Toggle)) => config.all_primary = !config.all_primary,
            None => (),
        }
    }
}

fn apply_count(value: &mut u32, change: Option<Change<u32, i32>>, name: &str) {
    match change {
        Some(Change::Set(new)) => *value = new,
        Some(Change::Adjust(delta)) => match value.checked_add_signed(delta) {
            Some(new) => *value = new,
            None => trace!("dropping adjustment of {name} by {delta} from {value}"),
        },
        None => (),
    }
}

fn apply_ratio(value: &mut Ratio, change: Option<Change<Ratio, f64>>) {
    match change {
        Some(Change::Set(new)) => *value = new,
        Some(Change::Adjust(delta)) => *value = value.adjusted(delta),
        None => (),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn empty_by_default() {
        let mut pending = PendingChanges::default();
        assert!(pending.is_empty());

        pending.record(Command::PrimaryCount(Change::Set(2)));
        assert!(!pending.is_empty());

        pending.clear();
        assert!(pending.is_empty());
    }

    #[test]
    fn apply_consumes_changes() {
        let mut pending = PendingChanges::default();
        pending.record(Command::PrimaryCount(Change::Adjust(2)));
        pending.record(Command::SecondarySublayout(Sublayout::Grid));

        let mut config = Configuration::default();
        pending.apply(&mut config);
        assert_eq!(config.primary_count, 3);
        assert_eq!(config.secondary_sublayout, Sublayout::Grid);
        assert!(pending.is_empty());

        // Applying again changes nothing.
        let before = config;
        pending.apply(&mut config);
        assert_eq!(config, before);
    }

    #[test]
    fn later_command_replaces_earlier() {
        let mut pending = PendingChanges::default();
        pending.record(Command::PrimaryCount(Change::Set(5)));
        pending.record(Command::PrimaryCount(Change::Adjust(1)));

        let mut config = Configuration::default();
        pending.apply(&mut config);
        assert_eq!(config.primary_count, 2);
    }

    #[test]
    fn negative_adjustment_is_dropped() {
        let mut pending = PendingChanges::default();
        pending.record(Command::PrimaryCount(Change::Adjust(-100)));
        pending.record(Command::InnerPadding(Change::Adjust(-11)));

        let mut config = Configuration::default();
        pending.apply(&mut config);
        assert_eq!(config.primary_count, 1);
        assert_eq!(config.inner_padding, 10);
        assert!(pending.is_empty());
    }

    #[test]
    fn adjustment_down_to_zero() {
        let mut pending = PendingChanges::default();
        pending.record(Command::PrimaryCount(Change::Adjust(-1)));

        let mut config = Configuration::default();
        pending.apply(&mut config);
        assert_eq!(config.primary_count, 0);
    }

    #[test]
    fn all_padding_fans_out() {
        let mut pending = PendingChanges::default();
        pending.record(Command::AllPadding(Change::Adjust(5)));

        let mut config = Configuration::default();
        pending.apply(&mut config);
        assert_eq!(config.inner_padding, 15);
        assert_eq!(config.outer_padding, 15);
    }

    #[test]
    fn all_primary_toggles() {
        let mut config = Configuration::default();
        let mut pending = PendingChanges::default();

        pending.record(Command::AllPrimary(Change::Adjust(Toggle)));
        pending.apply(&mut config);
        assert!(config.all_primary);

        pending.record(Command::AllPrimary(Change::Adjust(Toggle)));
        pending.apply(&mut config);
        assert!(!config.all_primary);

        pending.record(Command::AllPrimary(Change::Set(true)));
        pending.apply(&mut config);
        assert!(config.all_primary);
    }

    #[test]
    fn ratio_adjustment_is_clamped() {
        let mut pending = PendingChanges::default();
        pending.record(Command::PrimaryRatio(Change::Adjust(0.5)));
        pending.record(Command::SecondaryRatio(Change::Adjust(-0.7)));

        let mut config = Configuration::default();
        pending.apply(&mut config);
        assert_eq!(config.primary_ratio.get(), 0.9);
        assert_eq!(config.secondary_ratio.get(), 0.1);
    }

    #[test]
    fn reset_is_not_recorded() {
        let mut pending = PendingChanges::default();
        assert!(!pending.record(Command::Reset));
        assert!(pending.is_empty());
    }

    proptest! {
        #[test]
        fn counts_never_wrap(start in 0u32..20, delta in -40i32..40) {
            let mut config = Configuration { primary_count: start, ..Default::default() };
            let mut pending = PendingChanges::default();
            pending.record(Command::PrimaryCount(Change::Adjust(delta)));
            pending.apply(&mut config);

            let expected = i64::from(start) + i64::from(delta);
            if expected < 0 {
                prop_assert_eq!(config.primary_count, start);
            } else {
                prop_assert_eq!(i64::from(config.primary_count), expected);
            }
        }

        #[test]
        fn ratios_stay_in_range(
            set in prop::option::of(-2f64..2f64),
            deltas in prop::collection::vec(-1f64..1f64, 0..8),
        ) {
            let mut config = Configuration::default();
            let mut pending = PendingChanges::default();
            if let Some(value) = set {
                pending.record(Command::PrimaryRatio(Change::Set(Ratio::new(value))));
                pending.apply(&mut config);
            }
            for delta in deltas {
                pending.record(Command::PrimaryRatio(Change::Adjust(delta)));
                pending.apply(&mut config);
                let ratio = config.primary_ratio.get();
                prop_assert!((Ratio::MIN..=Ratio::MAX).contains(&ratio));
            }
        }
    }
}
