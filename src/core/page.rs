//! Page navigation for the archive list.
//!
//! The cursor owns only the page *number*. Whether another page exists is
//! derived from page fullness on every render, never stored, so returning to
//! an earlier page re-derives the affordance from that page's own count.

use crate::config::PAGE_SIZE;

/// Current page of the archive list. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor(u32);

impl PageCursor {
    /// First page.
    pub fn first() -> Self {
        Self(1)
    }

    /// The page number, for building the list query.
    pub fn number(self) -> u32 {
        self.0
    }

    /// Whether this is the first page (disables the "previous" control).
    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    /// One page back, bounded below by 1.
    pub fn prev(self) -> Self {
        Self(self.0.saturating_sub(1).max(1))
    }

    /// One page forward. No upper bound is enforced client-side; the
    /// "has next" signal only disables the affordance, it never blocks
    /// the call.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

/// Whether a "next page" control should be enabled, given how many assets
/// the current page returned.
///
/// True iff the page came back full. A collection whose size is an exact
/// multiple of [`PAGE_SIZE`] therefore enables "next" onto an empty page;
/// that is a known limitation of deriving the signal from fullness instead
/// of an authoritative total count.
pub fn has_more(page_len: usize) -> bool {
    page_len == PAGE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_one() {
        assert_eq!(PageCursor::first().number(), 1);
        assert!(PageCursor::first().is_first());
    }

    #[test]
    fn prev_never_goes_below_one() {
        let mut cursor = PageCursor::first();
        for _ in 0..5 {
            cursor = cursor.prev();
        }
        assert_eq!(cursor.number(), 1);
    }

    #[test]
    fn next_is_unbounded() {
        let mut cursor = PageCursor::first();
        for _ in 0..10 {
            cursor = cursor.next();
        }
        assert_eq!(cursor.number(), 11);
    }

    #[test]
    fn steps_are_symmetric_above_one() {
        let cursor = PageCursor::first().next().next();
        assert_eq!(cursor.prev().number(), 2);
        assert_eq!(cursor.prev().next(), cursor);
    }

    #[test]
    fn has_more_requires_a_full_page() {
        assert!(has_more(PAGE_SIZE));
        assert!(!has_more(PAGE_SIZE - 1));
        assert!(!has_more(3));
        assert!(!has_more(0));
        // Over-full responses should not happen (the service caps at
        // `limit`), and are not treated as "more".
        assert!(!has_more(PAGE_SIZE + 1));
    }

    #[test]
    fn affordance_is_re_derived_per_page() {
        // Page 1 returns full, page 2 returns short, then back to page 1:
        // the signal always reflects the page currently displayed.
        let page1 = PageCursor::first();
        assert!(has_more(6));

        let page2 = page1.next();
        assert_eq!(page2.number(), 2);
        assert!(!has_more(3));

        let back = page2.prev();
        assert_eq!(back, page1);
        assert!(has_more(6));
    }
}
