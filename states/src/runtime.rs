use std::any::Any;

use flume::{Receiver, Sender};
use log::warn;

use crate::{Graph, Key, graph::TopologyError};

type Update = (Key, Box<dyn Any + Send>);

/// Publishes new values for states and computes back to the owning context.
///
/// Cheap to clone and `Send`, so it can be moved into HTTP callbacks that
/// finish on another thread.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub fn set<T: Any + Send>(&self, value: T) {
        if self.send.send((Key::of::<T>(), Box::new(value))).is_err() {
            warn!(
                "Dropped update for {:?}, the state context is gone",
                Key::of::<T>()
            );
        }
    }
}

#[derive(Debug)]
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,

    graph: Graph<Key>,
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            graph: Graph::new(),
        }
    }

    pub fn updater(&self) -> Updater {
        Updater {
            send: self.send.clone(),
        }
    }

    pub fn record_state(&mut self, key: Key) {
        self.graph.add_node(key);
    }

    pub fn record_compute(&mut self, key: Key, deps: &[Key]) {
        self.graph.add_node(key);
        for dep in deps {
            self.graph.route_to(*dep, key);
        }
    }

    pub fn verify_deps(&self) -> Result<(), TopologyError<Key>> {
        self.graph.topology_sort().map(|_| ())
    }

    pub(crate) fn order(&self) -> Result<Vec<Key>, TopologyError<Key>> {
        self.graph.topology_sort()
    }

    pub(crate) fn dependents(&self, key: Key) -> Vec<Key> {
        self.graph.dependents(key).collect()
    }

    /// Every update sent so far, without blocking.
    pub(crate) fn drain(&self) -> Vec<Update> {
        self.recv.try_iter().collect()
    }
}
