//! Parsing of user commands sent through `riverctl send-layout-cmd`.
//!
//! A command is a single line of the form `<name> <argument>`. Numeric arguments that start with
//! `+` or `-` adjust the current value, anything else replaces it.

use std::str::FromStr;

use crate::{Change, Position, Ratio, Sublayout, Toggle};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Forget every per-tag configuration of the output.
    Reset,
    InnerPadding(Change<u32, i32>),
    OuterPadding(Change<u32, i32>),
    /// Changes both the inner and the outer padding.
    AllPadding(Change<u32, i32>),
    PrimaryCount(Change<u32, i32>),
    PrimaryRatio(Change<Ratio, f64>),
    PrimarySublayout(Sublayout),
    PrimaryPosition(Position),
    SecondaryCount(Change<u32, i32>),
    SecondaryRatio(Change<Ratio, f64>),
    SecondarySublayout(Sublayout),
    RemainderSublayout(Sublayout),
    AllPrimary(Change<bool, Toggle>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("too few arguments for {0}")]
    TooFewArguments(&'static str),
    #[error("too many arguments for {0}")]
    TooManyArguments(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// A command line split into its words, before any interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

/// Splits a command line into a name and at most one argument.
pub fn tokenize(line: &str) -> Result<Tokens<'_>, CommandError> {
    let mut words = line.split_ascii_whitespace();
    let name = words.next().ok_or(CommandError::Empty)?;
    let argument = words.next();

    if words.next().is_some() {
        return Err(CommandError::TooManyArguments(name.to_owned()));
    }

    Ok(Tokens { name, argument })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Tokens { name, argument } = tokenize(s)?;

        if name == "reset" {
            return match argument {
                None => Ok(Command::Reset),
                Some(_) => Err(CommandError::TooManyArguments(name.to_owned())),
            };
        }

        let name = COMMANDS
            .iter()
            .copied()
            .find(|known| *known == name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_owned()))?;
        let argument = argument.ok_or(CommandError::TooFewArguments(name))?;

        build(name, argument).ok_or_else(|| CommandError::InvalidValue {
            name,
            value: argument.to_owned(),
        })
    }
}

const COMMANDS: &[&str] = &[
    "inner_padding",
    "outer_padding",
    "all_padding",
    "primary_count",
    "primary_ratio",
    "primary_sublayout",
    "primary_position",
    "secondary_count",
    "secondary_ratio",
    "secondary_sublayout",
    "remainder_sublayout",
    "all_primary",
];

fn build(name: &str, arg: &str) -> Option<Command> {
    match name {
        "inner_padding" => parse_count(arg).map(Command::InnerPadding),
        "outer_padding" => parse_count(arg).map(Command::OuterPadding),
        "all_padding" => parse_count(arg).map(Command::AllPadding),
        "primary_count" => parse_count(arg).map(Command::PrimaryCount),
        "primary_ratio" => parse_ratio(arg).map(Command::PrimaryRatio),
        "primary_sublayout" => arg.parse().ok().map(Command::PrimarySublayout),
        "primary_position" => arg.parse().ok().map(Command::PrimaryPosition),
        "secondary_count" => parse_count(arg).map(Command::SecondaryCount),
        "secondary_ratio" => parse_ratio(arg).map(Command::SecondaryRatio),
        "secondary_sublayout" => arg.parse().ok().map(Command::SecondarySublayout),
        "remainder_sublayout" => arg.parse().ok().map(Command::RemainderSublayout),
        "all_primary" => parse_flag(arg).map(Command::AllPrimary),
        _ => None,
    }
}

fn is_relative(arg: &str) -> bool {
    arg.starts_with(['+', '-'])
}

fn parse_count(arg: &str) -> Option<Change<u32, i32>> {
    if is_relative(arg) {
        arg.parse().ok().map(Change::Adjust)
    } else {
        arg.parse().ok().map(Change::Set)
    }
}

fn parse_ratio(arg: &str) -> Option<Change<Ratio, f64>> {
    let value: f64 = arg.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    if is_relative(arg) {
        Some(Change::Adjust(value))
    } else {
        Some(Change::Set(Ratio::new(value)))
    }
}

fn parse_flag(arg: &str) -> Option<Change<bool, Toggle>> {
    if is_relative(arg) {
        return Some(Change::Adjust(Toggle));
    }

    match arg {
        "true" | "on" => Some(Change::Set(true)),
        "false" | "off" => Some(Change::Set(false)),
        "toggle" => Some(Change::Adjust(Toggle)),
        _ => None,
    }
}
