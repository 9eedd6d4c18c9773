use std::any::type_name;
use std::collections::BTreeMap;

use log::{error, warn};

use crate::{
    Command, Compute, Dep, Key, State, StateRuntime, StateSyncStatus, Updater,
    graph::TopologyError,
};

#[derive(Debug)]
pub(crate) struct ComputeSlot {
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

/// Owns every state, compute and command of the app.
///
/// Frame loop:
/// 1. `sync_computes` applies updates that arrived since the last frame
/// 2. `run_all_dirty` refreshes derived values
/// 3. widgets read `state`/`cached` and `enqueue_command`
/// 4. `flush_commands` runs what the widgets queued
#[derive(Debug, Default)]
pub struct StateCtx {
    runtime: StateRuntime,

    states: BTreeMap<Key, Box<dyn State>>,
    computes: BTreeMap<Key, ComputeSlot>,
    commands: BTreeMap<Key, Box<dyn Command>>,

    queued: Vec<Key>,
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let key = Key::of::<T>();
        self.runtime.record_state(key);
        self.states.insert(key, Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let key = Key::of::<T>();
        self.runtime.record_compute(key, &compute.deps());
        self.computes.insert(
            key,
            ComputeSlot {
                compute: Box::new(compute),
                status: StateSyncStatus::Init,
            },
        );
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        self.commands.insert(Key::of::<T>(), Box::new(command));
    }

    /// # Panics
    /// Panics if `T` was never added with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.dep()
            .state::<T>()
            .unwrap_or_else(|err| panic!("{} is not registered: {err}", type_name::<T>()))
    }

    /// Mutates a state in place and marks everything reading it dirty.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        let key = Key::of::<T>();
        let Some(state) = self
            .states
            .get_mut(&key)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
        else {
            warn!("Ignored update of unregistered state {key:?}");
            return;
        };
        f(state);
        self.mark_dependents_dirty(key);
    }

    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&Key::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
    }

    pub fn status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes.get(&Key::of::<T>()).map(|slot| slot.status)
    }

    pub fn enqueue_command<T: Command>(&mut self) {
        self.queued.push(Key::of::<T>());
    }

    /// Runs queued commands in order, then applies what they published.
    pub fn flush_commands(&mut self) {
        let queued = std::mem::take(&mut self.queued);
        let updater = self.runtime.updater();

        for key in queued {
            match self.commands.get(&key) {
                Some(command) => {
                    command.run(Dep::new(&self.states, &self.computes), updater.clone());
                    // later commands in the same flush see earlier results
                    self.sync_computes();
                }
                None => warn!("Ignored unregistered command {key:?}"),
            }
        }
    }

    pub fn dispatch<T: Command>(&mut self) {
        self.enqueue_command::<T>();
        self.flush_commands();
    }

    /// Applies every pending update and marks dependents dirty.
    pub fn sync_computes(&mut self) {
        for (key, value) in self.runtime.drain() {
            if let Some(state) = self.states.get_mut(&key) {
                state.assign_box(value);
            } else if let Some(slot) = self.computes.get_mut(&key) {
                slot.compute.assign_box(value);
                slot.status = StateSyncStatus::Clean;
            } else {
                warn!("Dropped update for unregistered {key:?}");
                continue;
            }
            self.mark_dependents_dirty(key);
        }
    }

    /// Runs every compute that needs it, dependencies first.
    ///
    /// Updates are synced after each compute so a dependent sees its
    /// dependency's fresh value within the same call.
    pub fn run_all_dirty(&mut self) {
        let order = match self.runtime.order() {
            Ok(order) => order,
            Err(err) => {
                error!("Refusing to run computes: {err}");
                return;
            }
        };
        let updater = self.runtime.updater();

        for key in order {
            let Some(slot) = self.computes.get_mut(&key) else {
                continue;
            };
            if !slot.status.needs_run() {
                continue;
            }
            slot.status = StateSyncStatus::Clean;

            if let Some(slot) = self.computes.get(&key) {
                slot.compute
                    .compute(Dep::new(&self.states, &self.computes), updater.clone());
            }
            self.sync_computes();
        }
    }

    pub fn verify_deps(&self) -> Result<(), TopologyError<Key>> {
        self.runtime.verify_deps()
    }

    pub fn updater(&self) -> Updater {
        self.runtime.updater()
    }

    fn dep(&self) -> Dep<'_> {
        Dep::new(&self.states, &self.computes)
    }

    fn mark_dependents_dirty(&mut self, key: Key) {
        for dependent in self.runtime.dependents(key) {
            if let Some(slot) = self.computes.get_mut(&dependent) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }
}
