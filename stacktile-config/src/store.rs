use std::collections::HashMap;

use crate::{Command, Configuration, PendingChanges};

/// Configurations of a single output.
///
/// Tag sets without their own entry share the output default. An entry is only created once a
/// pending change has to be applied to a tag set, so tag sets that were never touched by a
/// command do not allocate anything.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    /// Startup defaults, restored by [`Command::Reset`].
    initial: Configuration,
    default: Configuration,
    per_tag: bool,
    tag_configs: HashMap<u32, Configuration>,
    pending: PendingChanges,
}

impl ConfigStore {
    /// Creates a store seeded with `defaults`.
    ///
    /// When `per_tag` is false every tag set shares the default configuration and changes are
    /// applied to it directly.
    pub fn new(defaults: Configuration, per_tag: bool) -> Self {
        Self {
            initial: defaults,
            default: defaults,
            per_tag,
            tag_configs: HashMap::new(),
            pending: PendingChanges::default(),
        }
    }

    pub fn default_config(&self) -> &Configuration {
        &self.default
    }

    pub fn pending(&self) -> &PendingChanges {
        &self.pending
    }

    /// Number of tag sets with their own configuration.
    pub fn tag_config_count(&self) -> usize {
        self.tag_configs.len()
    }

    /// Queues a parsed command, or performs it right away in the case of a reset.
    pub fn handle_command(&mut self, command: Command) {
        if !self.pending.record(command) {
            self.reset();
        }
    }

    /// Drops every per-tag configuration and pending change, and restores the startup defaults.
    pub fn reset(&mut self) {
        debug!(
            "resetting {} tag configurations to defaults",
            self.tag_configs.len()
        );
        self.tag_configs.clear();
        self.default = self.initial;
        self.pending.clear();
    }

    /// Returns the configuration for `tags`, with every pending change applied to it.
    pub fn resolve(&mut self, tags: u32) -> &Configuration {
        if !self.per_tag {
            self.pending.apply(&mut self.default);
            return &self.default;
        }

        if !self.tag_configs.contains_key(&tags) {
            if self.pending.is_empty() {
                return &self.default;
            }

            if let Err(err) = self.tag_configs.try_reserve(1) {
                error!("error allocating configuration for tags {tags:#x}: {err}");
                return &self.default;
            }
        }

        let default = &self.default;
        let config = self.tag_configs.entry(tags).or_insert_with(|| {
            debug!("creating configuration for tags {tags:#x}");
            *default
        });
        self.pending.apply(config);
        config
    }
}
