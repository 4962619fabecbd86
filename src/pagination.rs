use serde::{Deserialize, Serialize};

/// Pages always linked at each end of the window.
const EDGE_PAGES: usize = 1;
/// Pages linked on either side of the current one.
const NEIGHBOUR_PAGES: usize = 2;

/// Page links for pagination controls; `None` marks a gap.
///
/// Links the first and last page and the pages around `current_page`,
/// collapsing every skipped run into a single gap.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    let runs = [
        (1, EDGE_PAGES.min(total_pages)),
        (
            current.saturating_sub(NEIGHBOUR_PAGES).max(1),
            current.saturating_add(NEIGHBOUR_PAGES).min(total_pages),
        ),
        (
            total_pages.saturating_sub(EDGE_PAGES - 1).max(1),
            total_pages,
        ),
    ];

    let mut window = Vec::new();
    let mut next = 1;
    for (start, end) in runs {
        let start = start.max(next);
        if start > end {
            continue;
        }
        if start > next {
            window.push(None);
        }
        window.extend((start..=end).map(Some));
        next = end + 1;
    }
    window
}

/// Pagination block returned alongside a page of advocates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let total_pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// One-based index of the first record on this page, 0 when empty.
    pub fn first_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.page.saturating_sub(1).saturating_mul(self.limit).saturating_add(1)
        }
    }

    /// One-based index of the last record on this page.
    pub fn last_item(&self) -> usize {
        self.page.saturating_mul(self.limit).min(self.total)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 25, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(Pagination::new(1, 25, 47).total_pages, 2);
        assert_eq!(Pagination::new(1, 25, 50).total_pages, 2);
        assert_eq!(Pagination::new(1, 25, 51).total_pages, 3);
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
    }

    #[test]
    fn item_range_covers_the_page() {
        let second = Pagination::new(2, 25, 47);
        assert_eq!((second.first_item(), second.last_item()), (26, 47));

        let empty = Pagination::new(1, 25, 0);
        assert_eq!((empty.first_item(), empty.last_item()), (0, 0));
    }

    #[test]
    fn item_range_of_an_enormous_page_saturates() {
        let far = Pagination::new(usize::MAX, 100, 47);
        assert_eq!(far.first_item(), usize::MAX);
        assert_eq!(far.last_item(), 47);
    }

    #[test]
    fn serializes_total_pages_in_camel_case() {
        let value = serde_json::to_value(Pagination::new(1, 25, 47)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"page": 1, "limit": 25, "total": 47, "totalPages": 2})
        );
    }

    #[test]
    fn page_window_small_totals_list_every_page() {
        assert_eq!(page_window(0, 1), vec![]);
        assert_eq!(page_window(3, 2), vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn page_window_near_the_edges_has_one_gap() {
        assert_eq!(
            page_window(10, 1),
            vec![Some(1), Some(2), Some(3), None, Some(10)]
        );
        assert_eq!(
            page_window(10, 10),
            vec![Some(1), None, Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            page_window(5, 3),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn page_window_clamps_current_page() {
        assert_eq!(page_window(2, usize::MAX), vec![Some(1), Some(2)]);
    }

    #[test]
    fn page_window_inserts_gaps_around_current_page() {
        assert_eq!(
            page_window(20, 10),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }
}
