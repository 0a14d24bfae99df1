use crate::dataset::Dataset;
use crate::entry::LogEntry;
use crate::query::filter::{LogFilter, filter};
use crate::query::pagination::{Page, paginate};
use crate::query::time_range::TimeRange;
use crate::query::timeline::BucketActivation;

/// Query parameters held by a presentation layer.
///
/// Every change to the filter or the zoom range sends the view back to the
/// first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter: LogFilter,
    time_range: Option<TimeRange>,
    page: usize,
    selected: Option<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: LogFilter::default(),
            time_range: None,
            page: 1,
            selected: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &LogFilter {
        &self.filter
    }

    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_range
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Index into the dataset entries of the entry opened for detail view.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn set_filter(&mut self, filter: LogFilter) {
        self.filter = filter;
        self.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_level(&mut self, level: impl Into<String>) {
        self.filter.level = level.into();
        self.page = 1;
    }

    pub fn set_component(&mut self, component: impl Into<String>) {
        self.filter.component = component.into();
        self.page = 1;
    }

    pub fn set_time_range(&mut self, range: Option<TimeRange>) {
        self.time_range = range;
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index;
    }

    /// Applies a bucket click. `None` (an empty bucket) changes nothing.
    pub fn apply_activation(&mut self, activation: Option<BucketActivation>) {
        let Some(activation) = activation else {
            return;
        };

        self.set_level(activation.level);
        if activation.selected.is_some() {
            self.selected = activation.selected;
        }
    }

    /// Filters `dataset` with the current parameters.
    pub fn evaluate<'a>(&self, dataset: &'a Dataset, page_size: usize) -> ViewResult<'a> {
        ViewResult {
            matches: filter(dataset.entries(), &self.filter, self.time_range),
            page: self.page,
            page_size,
        }
    }
}

/// Entries matched by a [`ViewState`].
#[derive(Debug, Clone)]
pub struct ViewResult<'a> {
    pub matches: Vec<&'a LogEntry>,
    page: usize,
    page_size: usize,
}

impl<'a> ViewResult<'a> {
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    pub fn current_page(&self) -> Page<'_, &'a LogEntry> {
        paginate(&self.matches, self.page, self.page_size)
    }
}
