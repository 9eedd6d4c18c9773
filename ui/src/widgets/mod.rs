pub mod funded_table;
mod load_error;
pub mod pagination;

pub use funded_table::funded_table;
pub use load_error::load_error;
pub use pagination::pagination_controls;
