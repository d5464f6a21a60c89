#[macro_use]
extern crate tracing;

pub mod cli;
pub mod layout;
pub mod output;
pub mod protocols;
pub mod stacktile;
