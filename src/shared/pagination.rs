/// Offset/limit window requested by a module listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u64,
    pub limit: u64,
}

impl Page {
    pub const DEFAULT_LIMIT: u64 = 50;

    /// Build a window, capping `limit` at `max_limit`. A missing or zero
    /// limit means `DEFAULT_LIMIT`, itself subject to the cap.
    pub fn new(offset: Option<u64>, limit: Option<u64>, max_limit: u64) -> Self {
        let max_limit = max_limit.max(1);
        let limit = match limit {
            Some(0) | None => Self::DEFAULT_LIMIT.min(max_limit),
            Some(l) => l.min(max_limit),
        };
        Self {
            offset: offset.unwrap_or(0),
            limit,
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

/// One window of an ordered listing plus the size of the whole filtered set.
#[derive(Debug, Clone)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub limit: u64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, total: u64, limit: u64) -> Self {
        Self {
            items,
            total,
            limit,
        }
    }

    /// Slice an already-ordered, already-filtered set.
    pub fn from_slice(all: &[T], page: Page) -> Self
    where
        T: Clone,
    {
        let items = all
            .iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect();
        Self::new(items, all.len() as u64, page.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_fifty() {
        let page = Page::new(None, None, 50);
        assert_eq!(page, Page { offset: 0, limit: 50 });
    }

    #[test]
    fn default_ignores_a_larger_cap() {
        assert_eq!(Page::new(None, None, 200).limit, Page::DEFAULT_LIMIT);
        assert_eq!(Page::new(None, Some(0), 200).limit, Page::DEFAULT_LIMIT);
        assert_eq!(Page::new(None, Some(120), 200).limit, 120);
    }

    #[test]
    fn limit_is_capped() {
        let page = Page::new(Some(10), Some(500), 50);
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 50);
    }

    #[test]
    fn default_respects_a_smaller_cap() {
        assert_eq!(Page::new(None, Some(0), 20).limit, 20);
    }

    #[test]
    fn slice_window_past_end_is_empty() {
        let all = vec![1, 2, 3];
        let paged = Paged::from_slice(&all, Page { offset: 5, limit: 2 });
        assert!(paged.items.is_empty());
        assert_eq!(paged.total, 3);
    }

    #[test]
    fn slice_window() {
        let all = vec![1, 2, 3, 4, 5];
        let paged = Paged::from_slice(&all, Page { offset: 1, limit: 2 });
        assert_eq!(paged.items, vec![2, 3]);
        assert_eq!(paged.total, 5);
    }
}
