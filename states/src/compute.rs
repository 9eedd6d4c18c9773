use std::any::Any;
use std::fmt::Debug;

use crate::{Dep, Key, Updater, state::downcast_assign};

/// A value derived from states or other computes.
///
/// `compute` never mutates `self`; a new value is published through the
/// [`Updater`] and applied by [`crate::StateCtx::sync_computes`].
pub trait Compute: Any + Debug {
    /// States and computes this compute reads.
    fn deps(&self) -> Vec<Key>;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

pub fn assign_impl<T: Compute>(compute: &mut T, new_self: Box<dyn Any + Send>) {
    downcast_assign(compute, new_self);
}
