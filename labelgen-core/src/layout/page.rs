//! Page-break policy: one page per label, plus the legacy overflow check.

use crate::config::LabelGeometry;

/// Pagination state across label emissions.
///
/// The first emission draws on the page that is already open; every later
/// emission opens a fresh page first. There is no multi-label packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    /// No label has been emitted yet.
    #[default]
    AwaitingFirstPage,
    /// A label has been emitted on the current page.
    PageOpen,
}

impl PageState {
    /// Advance to the next emission, returning whether a page break must be
    /// issued before drawing it.
    pub fn next_requires_break(&mut self) -> bool {
        match self {
            PageState::AwaitingFirstPage => {
                *self = PageState::PageOpen;
                false
            }
            PageState::PageOpen => true,
        }
    }
}

/// Overflow guard: when the label's vertical extent runs past the page and
/// the row is not the last, one extra blank page is inserted after the label
/// is drawn.
///
/// Under the default geometry the extent equals the page height exactly and
/// the strict comparison never fires; the branch only matters for custom
/// geometries.
pub fn overflow_page_needed(geometry: &LabelGeometry, is_last_row: bool) -> bool {
    !is_last_row && geometry.label_extent() > geometry.page_height
}
