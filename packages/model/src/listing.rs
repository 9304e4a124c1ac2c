//! Client-side pagination over an already fetched collection, and the state
//! the user table is in.

use crate::config::TableConfig;
use crate::user::UserRecord;

/// Page size and zero-based page index of the user table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    page_size: usize,
    page: usize,
    options: Vec<usize>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl PageState {
    pub fn new(config: &TableConfig) -> Self {
        Self {
            page_size: config.page_size.max(1),
            page: 0,
            options: config.options(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page sizes the user may pick from.
    pub fn options(&self) -> &[usize] {
        &self.options
    }

    /// Change the page size and go back to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Go to `page`, clamped to the last page of `total` rows.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.last_page(total));
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    fn last_page(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.last_page(total)
    }

    /// Half-open row range of the current page.
    pub fn range(&self, total: usize) -> std::ops::Range<usize> {
        let start = (self.page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    /// Rows of `items` on the current page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// `"6–10 of 12"`, one-based and inclusive.
    pub fn label(&self, total: usize) -> String {
        let range = self.range(total);
        if range.is_empty() {
            return format!("0–0 of {total}");
        }
        format!("{}–{} of {total}", range.start + 1, range.end)
    }
}

/// What the user table shows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingView<'a> {
    /// A fetch is pending.
    Loading,
    /// The collection is empty.
    Empty,
    /// The rows of the current page out of `total`.
    Rows { rows: &'a [UserRecord], total: usize },
}

impl<'a> ListingView<'a> {
    /// `users` is `None` while the fetch is pending.
    pub fn new(users: Option<&'a [UserRecord]>, page: &PageState) -> Self {
        match users {
            None => ListingView::Loading,
            Some([]) => ListingView::Empty,
            Some(users) => ListingView::Rows {
                rows: page.slice(users),
                total: users.len(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::RecordId;

    fn users(n: u64) -> Vec<UserRecord> {
        (1..=n)
            .map(|i| UserRecord {
                id: RecordId::Number(i),
                name: format!("user {i}"),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_view_while_loading() {
        assert_eq!(ListingView::new(None, &PageState::default()), ListingView::Loading);
    }

    #[test]
    fn test_view_of_empty_collection() {
        let empty = users(0);
        let view = ListingView::new(Some(empty.as_slice()), &PageState::default());
        assert_eq!(view, ListingView::Empty);
    }

    #[test]
    fn test_view_shows_one_page() {
        let all = users(12);
        let view = ListingView::new(Some(all.as_slice()), &PageState::default());
        let ListingView::Rows { rows, total } = view else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(total, 12);
        assert_eq!(rows[0].id, RecordId::Number(1));
        assert_eq!(rows[4].id, RecordId::Number(5));
    }

    #[test]
    fn test_view_follows_page_size() {
        let all = users(12);
        let mut page = PageState::default();
        page.set_page(2, all.len());
        page.set_page_size(10);
        let view = ListingView::new(Some(all.as_slice()), &page);
        let ListingView::Rows { rows, total } = view else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].id, RecordId::Number(1));
        assert_eq!(total, 12);
    }

    #[test]
    fn test_first_page_of_twelve() {
        let rows: Vec<u32> = (0..12).collect();
        let state = PageState::default();
        assert_eq!(state.page_size(), 5);
        assert_eq!(state.slice(&rows), &[0, 1, 2, 3, 4]);
        assert_eq!(state.label(rows.len()), "1–5 of 12");
        assert_eq!(state.page_count(rows.len()), 3);
    }

    #[test]
    fn test_last_page_is_short() {
        let rows: Vec<u32> = (0..12).collect();
        let mut state = PageState::default();
        state.set_page(2, rows.len());
        assert_eq!(state.slice(&rows), &[10, 11]);
        assert_eq!(state.label(rows.len()), "11–12 of 12");
        assert!(!state.has_next(rows.len()));
        assert!(state.has_previous());
    }

    #[test]
    fn test_page_is_clamped() {
        let rows: Vec<u32> = (0..7).collect();
        let mut state = PageState::default();
        state.set_page(9, rows.len());
        assert_eq!(state.page(), 1);
        state.set_page(3, 0);
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let rows: Vec<u32> = (0..30).collect();
        let mut state = PageState::default();
        state.set_page(3, rows.len());
        assert_eq!(state.slice(&rows)[0], 15);

        state.set_page_size(10);
        assert_eq!(state.page(), 0);
        assert_eq!(state.slice(&rows), &(0..10).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn test_empty_collection() {
        let rows: Vec<u32> = Vec::new();
        let state = PageState::default();
        assert!(state.slice(&rows).is_empty());
        assert_eq!(state.label(0), "0–0 of 0");
        assert!(!state.has_next(0));
    }
}
