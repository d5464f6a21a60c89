#[macro_use]
extern crate tracing;

use std::env;

use anyhow::{anyhow, Context};
use calloop::signals::{Signal, Signals};
use calloop::EventLoop;
use calloop_wayland_source::WaylandSource;
use clap::Parser;
use stacktile::cli::Cli;
use stacktile::stacktile::State;
use tracing_subscriber::EnvFilter;
use wayland_client::globals::registry_queue_init;
use wayland_client::Connection;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "stacktile=info".to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(env_filter)
        .init();

    let options = cli.options();
    debug!("starting with {options:?}");

    let conn = Connection::connect_to_env().context("error connecting to Wayland compositor")?;
    let (globals, event_queue) =
        registry_queue_init::<State>(&conn).context("error listing Wayland globals")?;
    let qh = event_queue.handle();

    let mut event_loop = EventLoop::<State>::try_new().context("error creating event loop")?;
    let mut state = State::new(&globals, &qh, options, event_loop.get_signal())?;

    WaylandSource::new(conn, event_queue)
        .insert(event_loop.handle())
        .map_err(|err| anyhow!("error inserting Wayland source: {}", err.error))?;

    let signals = Signals::new(&[Signal::SIGINT, Signal::SIGTERM])
        .context("error creating signal source")?;
    event_loop
        .handle()
        .insert_source(signals, |event, _, state| {
            info!("received {:?}, exiting", event.signal());
            state.stop();
        })
        .map_err(|err| anyhow!("error inserting signal source: {}", err.error))?;

    info!("waiting for layout demands");
    event_loop
        .run(None, &mut state, |_| ())
        .context("error running event loop")?;

    match state.take_fatal_error() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
