//! Domain logic for the funded-campaigns table: the record model, loading
//! the dataset, and paginating it.

mod config;
mod error;
mod fetch_service;
mod fetch_state;
pub mod paginator;
mod record;
pub mod records;

pub use config::{BusinessConfig, DEFAULT_DATA_URL};
pub use error::{LOAD_ERROR_MESSAGE, LoadError};
#[cfg(any(test, feature = "test-utils"))]
pub use fetch_service::MockFetcher;
pub use fetch_service::{EhttpFetcher, FetchService, OnDone};
pub use fetch_state::FetchState;
pub use paginator::{
    CurrentPage, NextPageCommand, PAGE_SIZE, PageCompute, PageView, PreviousPageCommand,
};
pub use record::Record;
pub use records::{FetchRecordsCommand, RecordsCompute, RecordsResult};
