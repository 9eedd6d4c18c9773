//! Client-side pagination over the loaded records.

use std::any::Any;

use log::warn;
use pledges_states::{
    Command, Compute, Dep, Key, State, Updater, assign_impl, state_assign_impl,
};

use crate::{Record, RecordsCompute};

/// Records shown per page.
pub const PAGE_SIZE: usize = 5;

/// Number of pages needed for `len` records, zero for an empty list.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Keeps `page` within `1..=max(1, total_pages)`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The records on the 1-based `page`. Pages past the end are empty, page 0 reads as page 1.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = (page.max(1) - 1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// The 1-based page the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPage(usize);

impl CurrentPage {
    pub fn new(page: usize) -> Self {
        Self(page.max(1))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for CurrentPage {
    fn default() -> Self {
        Self(1)
    }
}

impl State for CurrentPage {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

/// Everything the table and the pagination bar need for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    page: usize,
    total_pages: usize,
    records: Vec<Record>,
}

impl Default for PageView {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            records: Vec::new(),
        }
    }
}

impl PageView {
    pub fn of(records: &[Record], page: usize, page_size: usize) -> Self {
        let total_pages = total_pages(records.len(), page_size);
        let page = clamp_page(page, total_pages);
        Self {
            page,
            total_pages,
            records: page_slice(records, page, page_size).to_vec(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// An empty dataset still reads as one page.
    pub fn displayed_total(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.displayed_total())
    }

    pub fn can_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// The current page's slice, derived from the loaded records and [`CurrentPage`].
#[derive(Debug, Default)]
pub struct PageCompute {
    view: PageView,
}

impl PageCompute {
    pub fn view(&self) -> &PageView {
        &self.view
    }
}

impl Compute for PageCompute {
    fn deps(&self) -> Vec<Key> {
        vec![Key::of::<RecordsCompute>(), Key::of::<CurrentPage>()]
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let (records, page) = match (
            deps.compute::<RecordsCompute>(),
            deps.state::<CurrentPage>(),
        ) {
            (Ok(records), Ok(page)) => (records.records(), page.get()),
            (Err(err), _) | (_, Err(err)) => {
                warn!("PageCompute: {err}");
                return;
            }
        };

        updater.set(PageCompute {
            view: PageView::of(records, page, PAGE_SIZE),
        });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

fn page_and_total(deps: &Dep<'_>) -> Option<(usize, usize)> {
    match (
        deps.state::<CurrentPage>(),
        deps.compute::<RecordsCompute>(),
    ) {
        (Ok(page), Ok(records)) => {
            Some((page.get(), total_pages(records.records().len(), PAGE_SIZE)))
        }
        (Err(err), _) | (_, Err(err)) => {
            warn!("Pagination: {err}");
            None
        }
    }
}

/// Moves one page forward. Ignored on the last page.
#[derive(Debug, Default)]
pub struct NextPageCommand;

impl Command for NextPageCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some((page, total)) = page_and_total(&deps) else {
            return;
        };

        if page < total {
            updater.set(CurrentPage::new(page + 1));
        } else {
            warn!("NextPageCommand: already on page {page} of {total}");
        }
    }
}

/// Moves one page back. Ignored on the first page.
#[derive(Debug, Default)]
pub struct PreviousPageCommand;

impl Command for PreviousPageCommand {
    fn run(&self, deps: Dep<'_>, updater: Updater) {
        let Some((page, total)) = page_and_total(&deps) else {
            return;
        };

        if page > 1 {
            // a page left out of range by a shrinking dataset snaps back to the last one
            updater.set(CurrentPage::new(clamp_page(page - 1, total)));
        } else {
            warn!("PreviousPageCommand: already on the first page");
        }
    }
}
