//! Filtering, search, and pagination for record tables.
//!
//! Every table in duka (sales, expenses) runs through the same pipeline:
//! a [`FilterState`] narrows the full record set to an ordered subset, and a
//! [`Pager`] slices that subset into a visible window. [`ListView`] composes
//! the two and enforces the one coupling rule between them: any filter
//! mutation snaps the pager back to page 1.
//!
//! Relative time windows ("Last 7 Days", "This Month") are anchored on the
//! data's own latest date (the reference date), never on the system clock,
//! so a seed data set from February behaves the same in July.

use chrono::{Datelike, Days, NaiveDate};

/// Default page size for the expenses table.
pub const DEFAULT_PAGE_SIZE: usize = 4;

/// A row that can be filtered and searched.
pub trait ListRecord {
    /// Calendar date the record occurred on. None for records whose date
    /// failed to parse at ingestion; such records fail ranged time filters
    /// but still appear under "All Time".
    fn occurred_on(&self) -> Option<NaiveDate>;

    /// Label the category filter matches against (exact, case-sensitive).
    fn category_label(&self) -> &str;

    /// Concatenation of the record's searchable fields.
    fn search_text(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    All,
    Last7Days,
    ThisMonth,
}

impl TimeRange {
    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::All => "All Time",
            TimeRange::Last7Days => "Last 7 Days",
            TimeRange::ThisMonth => "This Month",
        }
    }

    /// Cycle order used by the dashboard's `t` key.
    pub fn next(&self) -> TimeRange {
        match self {
            TimeRange::All => TimeRange::Last7Days,
            TimeRange::Last7Days => TimeRange::ThisMonth,
            TimeRange::ThisMonth => TimeRange::All,
        }
    }
}

/// Current query parameters for a record table.
///
/// Defaults (everything passes) are the state a view mounts with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub time_range: TimeRange,
    /// None means all categories.
    pub category: Option<String>,
    /// Matched case-insensitively as a substring; empty means no search.
    pub search: String,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        self.time_range == TimeRange::All && self.category.is_none() && self.search.is_empty()
    }

    /// Short description for status lines, e.g. "Last 7 Days | Rent | \"fuel\"".
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.time_range != TimeRange::All {
            parts.push(self.time_range.label().to_string());
        }
        if let Some(cat) = &self.category {
            parts.push(cat.clone());
        }
        if !self.search.is_empty() {
            parts.push(format!("\"{}\"", self.search));
        }
        parts.join(" | ")
    }

    /// The filter predicate. Checks run cheapest-first and short-circuit:
    /// category, then time range, then text.
    ///
    /// `reference` is the latest date in the full record set; ranged checks
    /// fail when it is absent (empty or dateless record set).
    pub fn matches<R: ListRecord>(&self, record: &R, reference: Option<NaiveDate>) -> bool {
        if let Some(want) = &self.category {
            if record.category_label() != want {
                return false;
            }
        }

        match self.time_range {
            TimeRange::All => {}
            TimeRange::Last7Days => {
                let (Some(reference), Some(date)) = (reference, record.occurred_on()) else {
                    return false;
                };
                // Inclusive lower bound: a record exactly 7 days back passes.
                let cutoff = reference
                    .checked_sub_days(Days::new(7))
                    .unwrap_or(NaiveDate::MIN);
                if date < cutoff {
                    return false;
                }
            }
            TimeRange::ThisMonth => {
                let (Some(reference), Some(date)) = (reference, record.occurred_on()) else {
                    return false;
                };
                if date.month() != reference.month() || date.year() != reference.year() {
                    return false;
                }
            }
        }

        if !self.search.is_empty() {
            let needle = self.search.trim().to_lowercase();
            if !needle.is_empty() && !record.search_text().to_lowercase().contains(&needle) {
                return false;
            }
        }

        true
    }
}

/// Anchor date for relative time windows: the maximum `occurred_on` across
/// the full record set. None when the set is empty or entirely dateless.
pub fn reference_date<R: ListRecord>(records: &[R]) -> Option<NaiveDate> {
    records.iter().filter_map(|r| r.occurred_on()).max()
}

/// Apply a filter to a record set, preserving input order (stable filter).
pub fn filter_records<'a, R: ListRecord>(records: &'a [R], filter: &FilterState) -> Vec<&'a R> {
    let reference = reference_date(records);
    records
        .iter()
        .filter(|r| filter.matches(*r, reference))
        .collect()
}

/// 1-based pagination over an already-filtered row count.
///
/// The pager never clamps on read; the navigation operations are the only
/// way the page moves and they stay inside `[1, total_pages]`. Callers that
/// mutate the filtered set reset the page through [`Pager::reset`] (or let
/// [`ListView`] do it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page: usize,
    page_size: usize,
}

impl Pager {
    /// `page_size` of zero is a contract violation, not a runtime condition.
    pub fn new(page_size: usize) -> Self {
        debug_assert!(page_size > 0, "page_size must be positive");
        Self { page: 1, page_size }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size).max(1)
    }

    /// Slice of `rows` visible on the current page. Shorter than `page_size`
    /// on the last page; empty when `rows` is empty.
    pub fn window<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.page - 1) * self.page_size;
        if start >= rows.len() {
            return &[];
        }
        &rows[start..(start + self.page_size).min(rows.len())]
    }

    /// 1-based "Showing X to Y" bounds for the current page, (0, 0) when the
    /// filtered set is empty.
    pub fn display_range(&self, row_count: usize) -> (usize, usize) {
        if row_count == 0 {
            return (0, 0);
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (start + self.page_size - 1).min(row_count);
        (start, end)
    }

    pub fn has_next(&self, row_count: usize) -> bool {
        row_count > 0 && self.page < self.total_pages(row_count)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Advance one page, clamped to the last page. No-op at the boundary.
    pub fn next_page(&mut self, row_count: usize) {
        self.page = (self.page + 1).min(self.total_pages(row_count));
    }

    /// Go back one page, clamped to page 1. No-op at the boundary.
    pub fn prev_page(&mut self) {
        self.page = (self.page - 1).max(1);
    }

    /// Jump to an arbitrary page, clamped into `[1, total_pages]`.
    pub fn goto(&mut self, page: usize, row_count: usize) {
        self.page = page.clamp(1, self.total_pages(row_count));
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// A record set with its filter and pager, kept consistent.
///
/// The filtered index list is memoized and recomputed only when the filter
/// or the records change; every such change resets the pager to page 1 so a
/// narrowed result set can never leave the view on an out-of-range page.
pub struct ListView<R: ListRecord> {
    records: Vec<R>,
    filter: FilterState,
    pager: Pager,
    filtered: Vec<usize>,
    reference: Option<NaiveDate>,
}

impl<R: ListRecord> ListView<R> {
    pub fn new(records: Vec<R>, page_size: usize) -> Self {
        let mut view = Self {
            reference: reference_date(&records),
            records,
            filter: FilterState::default(),
            pager: Pager::new(page_size),
            filtered: Vec::new(),
        };
        view.refilter();
        view
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn reference(&self) -> Option<NaiveDate> {
        self.reference
    }

    /// The full, unfiltered record set.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn set_time_range(&mut self, time_range: TimeRange) {
        if self.filter.time_range != time_range {
            self.filter.time_range = time_range;
            self.refilter();
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if self.filter.category != category {
            self.filter.category = category;
            self.refilter();
        }
    }

    pub fn set_search(&mut self, search: String) {
        if self.filter.search != search {
            self.filter.search = search;
            self.refilter();
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        self.filter.search.push(c);
        self.refilter();
    }

    pub fn pop_search_char(&mut self) {
        if self.filter.search.pop().is_some() {
            self.refilter();
        }
    }

    pub fn clear_filters(&mut self) {
        if !self.filter.is_default() {
            self.filter = FilterState::default();
            self.refilter();
        }
    }

    /// Swap in a new record set (e.g. a fresh fetch). Resets to page 1.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.reference = reference_date(&records);
        self.records = records;
        self.refilter();
    }

    fn refilter(&mut self) {
        let filter = &self.filter;
        let reference = self.reference;
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| filter.matches(*r, reference))
            .map(|(i, _)| i)
            .collect();
        self.pager.reset();
    }

    /// All filtered rows in original order.
    pub fn all_filtered(&self) -> Vec<&R> {
        self.filtered.iter().map(|&i| &self.records[i]).collect()
    }

    /// Filtered rows visible on the current page.
    pub fn visible(&self) -> Vec<&R> {
        self.pager
            .window(&self.filtered)
            .iter()
            .map(|&i| &self.records[i])
            .collect()
    }

    pub fn current_page(&self) -> usize {
        self.pager.page()
    }

    pub fn total_pages(&self) -> usize {
        self.pager.total_pages(self.filtered.len())
    }

    pub fn display_range(&self) -> (usize, usize) {
        self.pager.display_range(self.filtered.len())
    }

    pub fn has_next(&self) -> bool {
        self.pager.has_next(self.filtered.len())
    }

    pub fn has_prev(&self) -> bool {
        self.pager.has_prev()
    }

    pub fn next_page(&mut self) {
        self.pager.next_page(self.filtered.len());
    }

    pub fn prev_page(&mut self) {
        self.pager.prev_page();
    }

    pub fn goto_page(&mut self, page: usize) {
        self.pager.goto(page, self.filtered.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: i64,
        date: Option<NaiveDate>,
        category: &'static str,
        text: &'static str,
    }

    impl ListRecord for Row {
        fn occurred_on(&self) -> Option<NaiveDate> {
            self.date
        }

        fn category_label(&self) -> &str {
            self.category
        }

        fn search_text(&self) -> String {
            format!("{} {}", self.text, self.category)
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, d).unwrap()
    }

    fn row(id: i64, date: NaiveDate, category: &'static str, text: &'static str) -> Row {
        Row {
            id,
            date: Some(date),
            category,
            text,
        }
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            row(1, day(9), "Rent", "Monthly shop rent"),
            row(2, day(8), "Stock Purchase", "Wholesale rice purchase"),
            row(3, day(3), "Stock Purchase", "Cooking oil restock"),
            row(4, NaiveDate::from_ymd_opt(2026, 1, 28).unwrap(), "Transport", "Fuel refill"),
        ]
    }

    fn ids(rows: &[&Row]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    // — FilterState —

    #[test]
    fn test_identity_filter_preserves_order() {
        let rows = sample_rows();
        let out = filter_records(&rows, &FilterState::default());
        assert_eq!(ids(&out), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_category_filter_exact_match() {
        let rows = sample_rows();
        let filter = FilterState {
            category: Some("Stock Purchase".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows, &filter)), vec![2, 3]);
    }

    #[test]
    fn test_category_filter_is_case_sensitive() {
        let rows = sample_rows();
        let filter = FilterState {
            category: Some("rent".to_string()),
            ..Default::default()
        };
        assert!(filter_records(&rows, &filter).is_empty());
    }

    #[test]
    fn test_last_7_days_inclusive_boundary() {
        // Reference is Feb 9; Feb 3 is 6 days back, Feb 2 exactly 7, Feb 1 is out.
        let rows = vec![
            row(1, day(9), "Rent", "a"),
            row(2, day(8), "Rent", "b"),
            row(3, day(3), "Rent", "c"),
            row(4, day(2), "Rent", "d"),
            row(5, day(1), "Rent", "e"),
        ];
        let filter = FilterState {
            time_range: TimeRange::Last7Days,
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows, &filter)), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_this_month_matches_month_and_year() {
        let rows = vec![
            row(1, day(9), "Rent", "a"),
            row(2, NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(), "Rent", "b"),
            row(3, NaiveDate::from_ymd_opt(2025, 2, 9).unwrap(), "Rent", "c"),
        ];
        let filter = FilterState {
            time_range: TimeRange::ThisMonth,
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows, &filter)), vec![1]);
    }

    #[test]
    fn test_search_case_insensitive_substring() {
        let rows = vec![
            row(1, day(8), "Stock Purchase", "Wholesale rice purchase"),
            row(2, day(3), "Stock Purchase", "Cooking oil restock"),
        ];
        let filter = FilterState {
            search: "RICE".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows, &filter)), vec![1]);
    }

    #[test]
    fn test_search_covers_category_field() {
        let rows = sample_rows();
        let filter = FilterState {
            search: "transport".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows, &filter)), vec![4]);
    }

    #[test]
    fn test_search_whitespace_only_matches_everything() {
        let rows = sample_rows();
        let filter = FilterState {
            search: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(filter_records(&rows, &filter).len(), rows.len());
    }

    #[test]
    fn test_filters_compose_with_and() {
        let rows = sample_rows();
        let filter = FilterState {
            time_range: TimeRange::Last7Days,
            category: Some("Stock Purchase".to_string()),
            search: "oil".to_string(),
        };
        assert_eq!(ids(&filter_records(&rows, &filter)), vec![3]);
    }

    #[test]
    fn test_dateless_record_fails_ranged_filters_only() {
        let rows = vec![
            row(1, day(9), "Rent", "a"),
            Row {
                id: 2,
                date: None,
                category: "Rent",
                text: "b",
            },
        ];
        let all = FilterState::default();
        assert_eq!(ids(&filter_records(&rows, &all)), vec![1, 2]);

        let ranged = FilterState {
            time_range: TimeRange::Last7Days,
            ..Default::default()
        };
        assert_eq!(ids(&filter_records(&rows, &ranged)), vec![1]);
    }

    #[test]
    fn test_empty_record_set_is_not_an_error() {
        let rows: Vec<Row> = vec![];
        assert!(filter_records(&rows, &FilterState::default()).is_empty());
        assert_eq!(reference_date(&rows), None);
    }

    #[test]
    fn test_reference_date_is_max_not_first() {
        let rows = vec![
            row(1, day(3), "Rent", "a"),
            row(2, day(9), "Rent", "b"),
            row(3, day(5), "Rent", "c"),
        ];
        assert_eq!(reference_date(&rows), Some(day(9)));
    }

    // — Pager —

    #[test]
    fn test_pages_partition_the_filtered_set() {
        for page_size in 1..=5 {
            for n in 0..=11 {
                let rows: Vec<i64> = (0..n).collect();
                let mut pager = Pager::new(page_size);
                let mut seen = 0;
                for page in 1..=pager.total_pages(rows.len()) {
                    pager.goto(page, rows.len());
                    let window = pager.window(&rows);
                    if page < pager.total_pages(rows.len()) {
                        assert_eq!(window.len(), page_size);
                    }
                    seen += window.len();
                }
                assert_eq!(seen, rows.len());
            }
        }
    }

    #[test]
    fn test_ten_rows_page_size_four() {
        let rows: Vec<i64> = (1..=10).collect();
        let mut pager = Pager::new(4);
        assert_eq!(pager.total_pages(rows.len()), 3);
        assert_eq!(pager.window(&rows), &[1, 2, 3, 4]);
        assert_eq!(pager.display_range(rows.len()), (1, 4));

        pager.goto(3, rows.len());
        assert_eq!(pager.window(&rows), &[9, 10]);
        assert_eq!(pager.display_range(rows.len()), (9, 10));
    }

    #[test]
    fn test_next_page_idempotent_at_last_page() {
        let mut pager = Pager::new(4);
        pager.goto(3, 10);
        pager.next_page(10);
        assert_eq!(pager.page(), 3);
        pager.next_page(10);
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_prev_page_clamps_at_one() {
        let mut pager = Pager::new(4);
        pager.prev_page();
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_goto_clamps_both_ends() {
        let mut pager = Pager::new(4);
        pager.goto(99, 10);
        assert_eq!(pager.page(), 3);
        pager.goto(0, 10);
        assert_eq!(pager.page(), 1);
    }

    #[test]
    fn test_empty_set_display_state() {
        let rows: Vec<i64> = vec![];
        let pager = Pager::new(4);
        assert_eq!(pager.total_pages(0), 1);
        assert!(pager.window(&rows).is_empty());
        assert_eq!(pager.display_range(0), (0, 0));
        assert!(!pager.has_next(0));
        assert!(!pager.has_prev());
    }

    #[test]
    fn test_nav_controls_enabled_state() {
        let mut pager = Pager::new(4);
        assert!(!pager.has_prev());
        assert!(pager.has_next(10));
        pager.next_page(10);
        assert!(pager.has_prev());
        assert!(pager.has_next(10));
        pager.next_page(10);
        assert!(!pager.has_next(10));
    }

    // — ListView —

    fn sample_view() -> ListView<Row> {
        ListView::new(sample_rows(), 2)
    }

    #[test]
    fn test_view_mounts_with_defaults_on_page_one() {
        let view = sample_view();
        assert!(view.filter().is_default());
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_len(), 4);
        assert_eq!(view.total_pages(), 2);
        assert_eq!(ids(&view.visible()), vec![1, 2]);
    }

    #[test]
    fn test_filter_change_resets_to_page_one() {
        let mut view = sample_view();
        view.next_page();
        assert_eq!(view.current_page(), 2);

        view.set_category(Some("Stock Purchase".to_string()));
        assert_eq!(view.current_page(), 1);

        view.next_page();
        view.set_time_range(TimeRange::Last7Days);
        assert_eq!(view.current_page(), 1);

        view.set_search("oil".to_string());
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_setting_same_filter_value_preserves_page() {
        let mut view = sample_view();
        view.next_page();
        view.set_time_range(TimeRange::All);
        view.set_category(None);
        view.set_search(String::new());
        assert_eq!(view.current_page(), 2);
    }

    #[test]
    fn test_replace_records_resets_page() {
        let mut view = sample_view();
        view.next_page();
        view.replace_records(vec![row(7, day(9), "Rent", "x")]);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered_len(), 1);
        assert_eq!(view.reference(), Some(day(9)));
    }

    #[test]
    fn test_incremental_search_refilters() {
        let mut view = sample_view();
        view.push_search_char('o');
        view.push_search_char('i');
        view.push_search_char('l');
        assert_eq!(ids(&view.all_filtered()), vec![3]);
        view.pop_search_char();
        view.pop_search_char();
        view.pop_search_char();
        assert_eq!(view.filtered_len(), 4);
    }

    #[test]
    fn test_clear_filters_restores_full_set() {
        let mut view = sample_view();
        view.set_category(Some("Rent".to_string()));
        view.set_search("rent".to_string());
        view.clear_filters();
        assert!(view.filter().is_default());
        assert_eq!(view.filtered_len(), 4);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_view_empty_filtered_state() {
        let mut view = sample_view();
        view.set_search("no such thing".to_string());
        assert_eq!(view.filtered_len(), 0);
        assert!(view.visible().is_empty());
        assert_eq!(view.total_pages(), 1);
        assert_eq!(view.display_range(), (0, 0));
        assert!(!view.has_next());
        assert!(!view.has_prev());
    }

    #[test]
    fn test_describe_filter() {
        let filter = FilterState {
            time_range: TimeRange::Last7Days,
            category: Some("Rent".to_string()),
            search: "fuel".to_string(),
        };
        assert_eq!(filter.describe(), "Last 7 Days | Rent | \"fuel\"");
        assert_eq!(FilterState::default().describe(), "");
    }
}
