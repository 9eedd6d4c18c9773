use std::collections::BTreeMap;

use crate::{Compute, Error, Key, State, ctx::ComputeSlot};

/// Read-only view of the context handed to computes and commands.
#[derive(Clone, Copy)]
pub struct Dep<'a> {
    states: &'a BTreeMap<Key, Box<dyn State>>,
    computes: &'a BTreeMap<Key, ComputeSlot>,
}

impl<'a> Dep<'a> {
    pub(crate) fn new(
        states: &'a BTreeMap<Key, Box<dyn State>>,
        computes: &'a BTreeMap<Key, ComputeSlot>,
    ) -> Self {
        Self { states, computes }
    }

    pub fn state<T: State>(&self) -> Result<&'a T, Error> {
        let key = Key::of::<T>();
        self.states
            .get(&key)
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(key, "Dep::state"))
    }

    pub fn compute<T: Compute>(&self) -> Result<&'a T, Error> {
        let key = Key::of::<T>();
        self.computes
            .get(&key)
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::compute_not_found(key, "Dep::compute"))
    }
}
