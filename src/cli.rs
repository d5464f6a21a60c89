use clap::Parser;
use stacktile_config::{Configuration, Position, Ratio, Sublayout};

use crate::stacktile::Options;

/// Layout generator for the river Wayland compositor.
///
/// Every flag sets the startup value of a setting; all of them can be changed at runtime with
/// `riverctl send-layout-cmd stacktile "<setting> <value>"`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Gap between windows, in pixels [default: 10].
    #[arg(long, value_name = "PX")]
    pub inner_padding: Option<u32>,
    /// Gap between windows and the edges of the output, in pixels [default: 10].
    #[arg(long, value_name = "PX")]
    pub outer_padding: Option<u32>,
    /// Number of windows in the primary zone [default: 1].
    #[arg(long, value_name = "COUNT")]
    pub primary_count: Option<u32>,
    /// Fraction of the output taken by the primary zone, 0.1 to 0.9 [default: 0.6].
    #[arg(long, value_name = "RATIO")]
    pub primary_ratio: Option<f64>,
    /// Tiling of the primary zone [default: rows].
    #[arg(long, value_enum)]
    pub primary_sublayout: Option<Sublayout>,
    /// Edge of the output holding the primary zone [default: left].
    #[arg(long, value_enum)]
    pub primary_position: Option<Position>,
    /// Number of windows in the secondary zone [default: 1].
    #[arg(long, value_name = "COUNT")]
    pub secondary_count: Option<u32>,
    /// Fraction of the remaining area taken by the secondary zone, 0.1 to 0.9 [default: 0.6].
    #[arg(long, value_name = "RATIO")]
    pub secondary_ratio: Option<f64>,
    /// Tiling of the secondary zone [default: rows].
    #[arg(long, value_enum)]
    pub secondary_sublayout: Option<Sublayout>,
    /// Tiling of the windows left after the primary and secondary zones [default: stack].
    #[arg(long, value_enum)]
    pub remainder_sublayout: Option<Sublayout>,
    /// Put every window into the primary zone.
    #[arg(long)]
    pub all_primary: bool,
    /// Keep a separate configuration for every tag set.
    #[arg(long)]
    pub per_tag_config: bool,
    /// Namespace to register with the compositor.
    #[arg(long, default_value = "stacktile")]
    pub namespace: String,
}

impl Cli {
    /// Startup configuration: the built-in defaults overridden by the given flags.
    pub fn configuration(&self) -> Configuration {
        let mut config = Configuration::default();

        if let Some(padding) = self.inner_padding {
            config.inner_padding = padding;
        }
        if let Some(padding) = self.outer_padding {
            config.outer_padding = padding;
        }
        if let Some(count) = self.primary_count {
            config.primary_count = count;
        }
        if let Some(ratio) = self.primary_ratio {
            config.primary_ratio = Ratio::new(ratio);
        }
        if let Some(sublayout) = self.primary_sublayout {
            config.primary_sublayout = sublayout;
        }
        if let Some(position) = self.primary_position {
            config.primary_position = position;
        }
        if let Some(count) = self.secondary_count {
            config.secondary_count = count;
        }
        if let Some(ratio) = self.secondary_ratio {
            config.secondary_ratio = Ratio::new(ratio);
        }
        if let Some(sublayout) = self.secondary_sublayout {
            config.secondary_sublayout = sublayout;
        }
        if let Some(sublayout) = self.remainder_sublayout {
            config.remainder_sublayout = sublayout;
        }
        config.all_primary = self.all_primary;

        config
    }

    pub fn options(&self) -> Options {
        Options {
            defaults: self.configuration(),
            per_tag: self.per_tag_config,
            namespace: self.namespace.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("stacktile").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_give_defaults() {
        let cli = parse(&[]).unwrap();
        let options = cli.options();
        assert_eq!(options.defaults, Configuration::default());
        assert!(!options.per_tag);
        assert_eq!(options.namespace, "stacktile");
    }

    #[test]
    fn flags_override_defaults() {
        let cli = parse(&[
            "--inner-padding",
            "4",
            "--primary-count",
            "2",
            "--primary-ratio",
            "0.95",
            "--primary-sublayout",
            "grid",
            "--primary-position",
            "top",
            "--remainder-sublayout",
            "full",
            "--per-tag-config",
        ])
        .unwrap();

        let config = cli.configuration();
        assert_eq!(config.inner_padding, 4);
        assert_eq!(config.outer_padding, 10);
        assert_eq!(config.primary_count, 2);
        assert_eq!(config.primary_ratio.get(), 0.9);
        assert_eq!(config.primary_sublayout, Sublayout::Grid);
        assert_eq!(config.primary_position, Position::Top);
        assert_eq!(config.remainder_sublayout, Sublayout::Full);
        assert!(cli.per_tag_config);
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(parse(&["--inner-padding", "-1"]).is_err());
        assert!(parse(&["--primary-count", "-3"]).is_err());
        assert!(parse(&["--primary-sublayout", "spiral"]).is_err());
    }
}
