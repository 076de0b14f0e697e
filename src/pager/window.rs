//! Page count and sliding-window arithmetic.
//!
//! The pager shows at most [`WIDTH`] numbered controls centred on the current
//! page. Near either end the window is pushed back inside `1..=page_count`
//! rather than shrunk, so it keeps its width whenever there are enough pages.

use std::ops::RangeInclusive;

/// Number of pages shown on either side of the current page.
pub const RADIUS: usize = 4;

/// Number of numbered controls in a full window.
pub const WIDTH: usize = 2 * RADIUS + 1;

/// Number of pages needed for `total_amount` items, `page_size` per page.
///
/// Zero items means zero pages. A zero page size is treated as one.
///
/// ```rust
/// use bubbletea_usersearch::pager::window::page_count;
///
/// assert_eq!(page_count(95, 10), 10);
/// assert_eq!(page_count(100, 10), 10);
/// assert_eq!(page_count(0, 10), 0);
/// ```
pub fn page_count(total_amount: usize, page_size: usize) -> usize {
    total_amount.div_ceil(page_size.max(1))
}

/// Computes the inclusive range of page numbers to show.
///
/// Steps, in order:
/// 1. take `current_page ± RADIUS`;
/// 2. if it starts before page 1, anchor it at 1 and stretch it to full width;
/// 3. if it then ends past `page_count`, anchor it at `page_count` and
///    stretch it back to full width;
/// 4. if there are fewer pages than a full window, show all of them.
///
/// With no pages the range is empty.
///
/// ```rust
/// use bubbletea_usersearch::pager::window::window;
///
/// assert_eq!(window(5, 10), 1..=9);
/// assert_eq!(window(10, 10), 2..=10);
/// assert_eq!(window(1, 3), 1..=3);
/// assert!(window(1, 0).is_empty());
/// ```
pub fn window(current_page: usize, page_count: usize) -> RangeInclusive<usize> {
    let span = 2 * RADIUS;

    let (mut start, mut end) = if current_page <= RADIUS {
        (1, 1 + span)
    } else {
        (current_page - RADIUS, current_page.saturating_add(RADIUS))
    };

    if end > page_count {
        end = page_count;
        start = page_count.saturating_sub(span);
    }

    if page_count < WIDTH {
        start = 1;
        end = page_count;
    }

    start..=end
}
