use std::collections::HashMap;

use anyhow::{anyhow, Context};
use calloop::LoopSignal;
use stacktile_config::{ConfigStore, Configuration};
use wayland_client::globals::{GlobalList, GlobalListContents};
use wayland_client::protocol::wl_output::WlOutput;
use wayland_client::protocol::wl_registry::{self, WlRegistry};
use wayland_client::{delegate_noop, Connection, Dispatch, Proxy, QueueHandle};

use crate::layout::LayoutDemand;
use crate::output::Output;
use crate::protocols::river_layout::river_layout_manager_v3::RiverLayoutManagerV3;
use crate::protocols::river_layout::river_layout_v3::{self, RiverLayoutV3};

/// Settings fixed at startup.
#[derive(Debug, Clone)]
pub struct Options {
    /// Configuration every output starts with.
    pub defaults: Configuration,
    /// Keep a separate configuration for every tag set.
    pub per_tag: bool,
    /// Namespace requested from the layout manager.
    pub namespace: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            defaults: Configuration::default(),
            per_tag: false,
            namespace: String::from("stacktile"),
        }
    }
}

pub struct State {
    options: Options,
    layout_manager: RiverLayoutManagerV3,
    /// Outputs by the registry name of their `wl_output` global.
    outputs: HashMap<u32, Output>,
    stop_signal: LoopSignal,
    /// Error that made us stop, reported once the event loop exits.
    fatal_error: Option<anyhow::Error>,
}

impl State {
    pub fn new(
        globals: &GlobalList,
        qh: &QueueHandle<Self>,
        options: Options,
        stop_signal: LoopSignal,
    ) -> anyhow::Result<Self> {
        let layout_manager: RiverLayoutManagerV3 = globals
            .bind(qh, 1..=2, ())
            .context("compositor does not support river-layout-v3")?;

        let mut state = Self {
            options,
            layout_manager,
            outputs: HashMap::new(),
            stop_signal,
            fatal_error: None,
        };

        let output_globals = globals.contents().with_list(|list| {
            list.iter()
                .filter(|global| global.interface == WlOutput::interface().name)
                .map(|global| (global.name, global.version))
                .collect::<Vec<_>>()
        });
        for (name, version) in output_globals {
            state.add_output(globals.registry(), name, version, qh);
        }

        Ok(state)
    }

    fn add_output(&mut self, registry: &WlRegistry, name: u32, version: u32, qh: &QueueHandle<Self>) {
        let wl_output: WlOutput = registry.bind(name, version.min(4), qh, ());
        let layout = self.layout_manager.get_layout(
            &wl_output,
            self.options.namespace.clone(),
            qh,
            name,
        );
        let configs = ConfigStore::new(self.options.defaults, self.options.per_tag);

        info!("adding output {name}");
        self.outputs
            .insert(name, Output::new(name, wl_output, layout, configs));
    }

    fn remove_output(&mut self, name: u32) {
        if self.outputs.remove(&name).is_some() {
            info!("removed output {name}");
        }
    }

    /// Stops the event loop, for example on a termination signal.
    pub fn stop(&mut self) {
        self.stop_signal.stop();
    }

    fn fail(&mut self, err: anyhow::Error) {
        error!("{err:?}");
        self.fatal_error.get_or_insert(err);
        self.stop();
    }

    /// Returns the error that stopped the event loop, if any.
    pub fn take_fatal_error(&mut self) -> Option<anyhow::Error> {
        self.fatal_error.take()
    }
}

impl Drop for State {
    fn drop(&mut self) {
        self.outputs.clear();
        self.layout_manager.destroy();
    }
}

impl Dispatch<WlRegistry, GlobalListContents> for State {
    fn event(
        state: &mut Self,
        registry: &WlRegistry,
        event: wl_registry::Event,
        _data: &GlobalListContents,
        _conn: &Connection,
        qh: &QueueHandle<Self>,
    ) {
        match event {
            wl_registry::Event::Global {
                name,
                interface,
                version,
            } => {
                if interface == WlOutput::interface().name {
                    state.add_output(registry, name, version, qh);
                }
            }
            wl_registry::Event::GlobalRemove { name } => state.remove_output(name),
            _ => (),
        }
    }
}

impl Dispatch<RiverLayoutV3, u32> for State {
    fn event(
        state: &mut Self,
        _layout: &RiverLayoutV3,
        event: river_layout_v3::Event,
        output_name: &u32,
        _conn: &Connection,
        _qh: &QueueHandle<Self>,
    ) {
        if let river_layout_v3::Event::NamespaceInUse = event {
            state.fail(anyhow!(
                "namespace {:?} is already in use by another layout generator",
                state.options.namespace
            ));
            return;
        }

        let Some(output) = state.outputs.get_mut(output_name) else {
            warn!("event for unknown output {output_name}");
            return;
        };

        match event {
            river_layout_v3::Event::LayoutDemand {
                view_count,
                usable_width,
                usable_height,
                tags,
                serial,
            } => {
                let demand = LayoutDemand {
                    view_count,
                    width: usable_width,
                    height: usable_height,
                    tags,
                };
                output.handle_layout_demand(demand, serial);
            }
            river_layout_v3::Event::UserCommand { command } => {
                output.handle_user_command(&command);
            }
            river_layout_v3::Event::UserCommandTags { tags } => {
                trace!("output {}: next command is for tags {tags:#x}", output.name());
            }
            _ => (),
        }
    }
}

delegate_noop!(State: ignore WlOutput);
delegate_noop!(State: RiverLayoutManagerV3);
