use serde::Deserialize;

/// One batch of records plus pagination metadata.
///
/// `current_page` always lies in `1..=max(total_pages, 1)` once the page has
/// gone through [`Page::normalized`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(rename = "currentPage", default = "first_page")]
    pub current_page: u32,
    #[serde(rename = "totalPages", default = "first_page")]
    pub total_pages: u32,
}

fn first_page() -> u32 {
    1
}

impl<T> Page<T> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            current_page: 1,
            total_pages: 1,
        }
    }

    /// Clamps `current_page` into the valid range.
    pub fn normalized(mut self) -> Self {
        self.current_page = self.current_page.clamp(1, self.last_page());
        self
    }

    /// Highest addressable page; an empty result set still has page 1.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn contains_page(&self, page: u32) -> bool {
        (1..=self.last_page()).contains(&page)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_keys() {
        let page: Page<u32> =
            serde_json::from_str(r#"{"data":[1,2,3],"currentPage":2,"totalPages":5}"#).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 5);
        assert!(page.has_previous());
        assert!(page.has_next());
    }

    #[test]
    fn normalized_clamps_current_page() {
        let page = Page::<u32> {
            items: vec![],
            current_page: 9,
            total_pages: 3,
        }
        .normalized();
        assert_eq!(page.current_page, 3);

        let page = Page::<u32> {
            items: vec![],
            current_page: 0,
            total_pages: 0,
        }
        .normalized();
        assert_eq!(page.current_page, 1);
        assert!(!page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn contains_page_uses_at_least_one_page() {
        let page = Page::<u32> {
            items: vec![],
            current_page: 1,
            total_pages: 0,
        };
        assert!(page.contains_page(1));
        assert!(!page.contains_page(0));
        assert!(!page.contains_page(2));
    }
}
