use stacktile_config::{Command, ConfigStore};
use wayland_client::protocol::wl_output::WlOutput;
use wayland_client::Proxy;

use crate::layout::{self, LayoutDemand, LayoutSink, Rectangle};
use crate::protocols::river_layout::river_layout_v3::RiverLayoutV3;

/// A display announced by the compositor, together with its layout configuration.
pub struct Output {
    /// Registry name of the `wl_output` global.
    name: u32,
    wl_output: WlOutput,
    layout: RiverLayoutV3,
    configs: ConfigStore,
}

impl Output {
    pub fn new(name: u32, wl_output: WlOutput, layout: RiverLayoutV3, configs: ConfigStore) -> Self {
        Self {
            name,
            wl_output,
            layout,
            configs,
        }
    }

    pub fn name(&self) -> u32 {
        self.name
    }

    pub fn handle_layout_demand(&mut self, demand: LayoutDemand, serial: u32) {
        debug!(
            "output {}: layout demand for {} views in {}x{}, tags {:#x}",
            self.name, demand.view_count, demand.width, demand.height, demand.tags
        );

        let mut commit = LayoutCommit {
            layout: &self.layout,
            serial,
        };
        layout::handle_demand(&mut self.configs, demand, &mut commit);
    }

    pub fn handle_user_command(&mut self, command: &str) {
        match command.parse::<Command>() {
            Ok(parsed) => {
                debug!("output {}: layout command {command:?}", self.name);
                self.configs.handle_command(parsed);
            }
            Err(err) => warn!("output {}: error in layout command {command:?}: {err}", self.name),
        }
    }
}

impl Drop for Output {
    fn drop(&mut self) {
        self.layout.destroy();
        if self.wl_output.version() >= 3 {
            self.wl_output.release();
        }
    }
}

/// Sends the geometry of one layout demand to the compositor.
struct LayoutCommit<'a> {
    layout: &'a RiverLayoutV3,
    serial: u32,
}

impl LayoutSink for LayoutCommit<'_> {
    fn push_rectangle(&mut self, rect: Rectangle) {
        let x = i32::try_from(rect.x).unwrap_or(i32::MAX);
        let y = i32::try_from(rect.y).unwrap_or(i32::MAX);
        self.layout
            .push_view_dimensions(x, y, rect.width, rect.height, self.serial);
    }

    fn commit(&mut self, layout_name: &str) {
        self.layout.commit(layout_name.to_owned(), self.serial);
    }
}
