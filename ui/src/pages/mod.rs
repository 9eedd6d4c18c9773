//! Pages module for the application.
//!
//! There is a single page, `funded_page`: the table with its pagination bar,
//! or the load error in its place.

mod funded_page;

pub use funded_page::funded_page;
