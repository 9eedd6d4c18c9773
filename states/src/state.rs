use std::any::{Any, type_name};
use std::fmt::Debug;

use log::error;

/// A plain value owned by [`crate::StateCtx`].
///
/// Implementors forward the three methods to [`state_assign_impl`] and
/// `self`; the boilerplate keeps the trait object-safe.
pub trait State: Any + Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Replace `self` with a value that was sent through an [`crate::Updater`].
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

pub fn state_assign_impl<T: State>(state: &mut T, new_self: Box<dyn Any + Send>) {
    downcast_assign(state, new_self);
}

pub(crate) fn downcast_assign<T: 'static>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!("Failed to assign update, expected {}", type_name::<T>()),
    }
}
