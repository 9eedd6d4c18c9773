use std::any::{TypeId, type_name};
use std::fmt::{Debug, Formatter};

/// Identity of a registered state, compute or command.
///
/// Ordering and equality only look at the `TypeId`; the name is kept for
/// readable dependency errors and logs.
#[derive(Clone, Copy)]
pub struct Key {
    id: TypeId,
    name: &'static str,
}

impl Key {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Key {}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.id.cmp(&other.id)
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // drop the module path, `pledges_business::records::RecordsCompute` -> `RecordsCompute`
        let short = self.name.rsplit("::").next().unwrap_or(self.name);
        write!(f, "{short}")
    }
}
