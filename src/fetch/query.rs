use std::collections::BTreeMap;

/// Selected filter values, keyed by filter name.
///
/// An absent key means "no filter". Setting a key to an empty value clears it,
/// which is what selecting the placeholder option of a dropdown produces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    values: BTreeMap<String, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears `key`. Returns true if the state changed.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        if value.is_empty() {
            return self.values.remove(&key).is_some();
        }
        self.values.insert(key, value.clone()) != Some(value)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.values.is_empty();
        self.values.clear();
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Everything a list request depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub filters: FilterState,
}

pub const DEFAULT_PER_PAGE: u32 = 10;

impl PageQuery {
    pub fn new(per_page: u32) -> Self {
        Self {
            page: 1,
            per_page: per_page.max(1),
            search: String::new(),
            filters: FilterState::new(),
        }
    }

    /// Query string pairs: `page`, `perPage`, each filter, then `search`.
    ///
    /// Filter keys named `page`, `perPage` or `search` are skipped so they
    /// can't shadow the pagination parameters.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("perPage".to_string(), self.per_page.to_string()),
        ];
        pairs.extend(
            self.filters
                .iter()
                .filter(|(key, _)| !matches!(*key, "page" | "perPage" | "search"))
                .map(|(key, value)| (key.to_string(), value.to_string())),
        );
        pairs.push(("search".to_string(), self.search.clone()));
        pairs
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}
