//! Query-string options for the Stack Exchange endpoints.

use crate::config::ApiConfig;

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_ORDER: &str = "desc";
pub const DEFAULT_SORT: &str = "activity";
pub const DEFAULT_SITE: &str = "stackoverflow";
pub const DEFAULT_FILTER: &str = "withbody";

/// Options shared by all four read endpoints.
///
/// Not every endpoint sends every option: question-by-id only sends
/// `site` and `filter`, answers omit `pagesize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    pub page_size: u32,
    pub order: String,
    pub sort: String,
    pub site: String,
    pub filter: String,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            order: DEFAULT_ORDER.to_string(),
            sort: DEFAULT_SORT.to_string(),
            site: DEFAULT_SITE.to_string(),
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl From<&ApiConfig> for QueryOptions {
    fn from(config: &ApiConfig) -> Self {
        Self {
            page_size: config.page_size,
            site: config.site.clone(),
            filter: config.filter.clone(),
            ..Self::default()
        }
    }
}

impl QueryOptions {
    /// `pagesize`, `order`, `sort`, `site`, `filter`.
    pub fn paged(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("pagesize", self.page_size.to_string())];
        pairs.extend(self.sorted());
        pairs
    }

    /// `order`, `sort`, `site`, `filter`.
    pub fn sorted(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("order", self.order.clone()),
            ("sort", self.sort.clone()),
        ];
        pairs.extend(self.lookup());
        pairs
    }

    /// `site`, `filter`.
    pub fn lookup(&self) -> Vec<(&'static str, String)> {
        vec![
            ("site", self.site.clone()),
            ("filter", self.filter.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_public_api_defaults() {
        let options = QueryOptions::default();
        assert_eq!(
            options.paged(),
            vec![
                ("pagesize", "20".to_string()),
                ("order", "desc".to_string()),
                ("sort", "activity".to_string()),
                ("site", "stackoverflow".to_string()),
                ("filter", "withbody".to_string()),
            ]
        );
    }

    #[test]
    fn lookup_only_sends_site_and_filter() {
        let keys: Vec<_> = QueryOptions::default()
            .lookup()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec!["site", "filter"]);
    }

    #[test]
    fn config_overrides_site_and_page_size() {
        let config = ApiConfig {
            site: "superuser".to_string(),
            page_size: 50,
            ..ApiConfig::default()
        };
        let options = QueryOptions::from(&config);
        assert_eq!(options.site, "superuser");
        assert_eq!(options.page_size, 50);
        assert_eq!(options.order, "desc");
    }
}
