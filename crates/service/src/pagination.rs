//! Offset pagination for list endpoints.

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 99;

/// `skip`/`limit` query parameters.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// rows to skip from the start
    #[serde(default)]
    pub skip: u64,
    /// maximum rows returned
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { DEFAULT_LIMIT }

impl Default for Page {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn default_values_match_list_route() {
        let d = Page::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 99);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let p: Page = serde_json::from_str(r#"{"skip": 3}"#).unwrap();
        assert_eq!(p, Page { skip: 3, limit: 99 });
        let p: Page = serde_json::from_str("{}").unwrap();
        assert_eq!(p, Page::default());
    }
}
