//! Query string access
//!
//! The query starts at the LAST `?` of the URL, so hash-router URLs such as
//! `https://example.com/#/login?code=1` work the same as regular ones.

use url::form_urlencoded;

/// Ordered query parameters; a name may appear several times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pairs: Vec<(String, String)>,
}

impl SearchParams {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First value of `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, name: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == name)
    }

    /// Remove every value of `name`
    pub fn delete(&mut self, name: &str) {
        self.pairs.retain(|(k, _)| k != name);
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for SearchParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let encoded = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish();
        f.write_str(&encoded)
    }
}

/// Which params [`remove_url_search_params`] drops
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveParams {
    All,
    Names(Vec<String>),
}

impl<S: Into<String>> FromIterator<S> for RemoveParams {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RemoveParams::Names(iter.into_iter().map(Into::into).collect())
    }
}

/// Query parameters of `url`. Accepts `&str`, `String` or [`url::Url`].
pub fn resolve_url_search_params(url: impl AsRef<str>) -> SearchParams {
    let url = url.as_ref();
    match url.rfind('?') {
        Some(i) => SearchParams::parse(&url[i..]),
        None => SearchParams::default(),
    }
}

/// `url` without the given params. Everything from the last `?` is rebuilt,
/// so remaining params come back form-urlencoded.
pub fn remove_url_search_params(url: impl AsRef<str>, params: RemoveParams) -> String {
    let url = url.as_ref();
    let mut search_params = resolve_url_search_params(url);

    let mut cleaned = match url.rfind('?') {
        Some(i) => url[..i].to_string(),
        None => url.to_string(),
    };

    if let RemoveParams::Names(names) = params {
        if !search_params.is_empty() {
            for name in &names {
                search_params.delete(name);
            }

            if !search_params.is_empty() {
                cleaned.push('?');
                cleaned.push_str(&search_params.to_string());
            }
        }
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_URL: &str = "https://example.com?access_token=abc123&state=true&error=401";

    fn names(list: &[&str]) -> RemoveParams {
        list.iter().copied().collect()
    }

    #[test]
    fn test_resolve_basic_params() {
        let params = resolve_url_search_params("https://example.com?access_token=abc123&state=true");
        assert_eq!(params.get("access_token"), Some("abc123"));
        assert_eq!(params.get("state"), Some("true"));
    }

    #[test]
    fn test_resolve_hash_mode_params() {
        let params = resolve_url_search_params("https://example.com#hash?param=1&key=value");
        assert_eq!(params.get("param"), Some("1"));
        assert_eq!(params.get("key"), Some("value"));
    }

    #[test]
    fn test_resolve_without_query() {
        assert!(resolve_url_search_params("https://example.com").is_empty());
        assert_eq!(resolve_url_search_params("").to_string(), "");
    }

    #[test]
    fn test_resolve_decodes_and_keeps_duplicates() {
        let params = resolve_url_search_params("https://example.com?filter%5B0%5D=value");
        assert_eq!(params.get("filter[0]"), Some("value"));

        let params = resolve_url_search_params("https://example.com?a=1&a=2&b=3");
        assert_eq!(params.get_all("a"), vec!["1", "2"]);
        assert_eq!(params.get("b"), Some("3"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_resolve_from_url_and_invalid_input() {
        let parsed = url::Url::parse("https://example.com?param=1").unwrap();
        assert_eq!(resolve_url_search_params(&parsed).get("param"), Some("1"));

        let params = resolve_url_search_params("invalid-url?param=1");
        assert_eq!(params.get("param"), Some("1"));
    }

    #[test]
    fn test_remove_params() {
        assert_eq!(
            remove_url_search_params(TEST_URL, names(&["access_token"])),
            "https://example.com?state=true&error=401"
        );
        assert_eq!(
            remove_url_search_params(TEST_URL, names(&["access_token", "error"])),
            "https://example.com?state=true"
        );
        assert_eq!(remove_url_search_params(TEST_URL, names(&["invalid_param"])), TEST_URL);
        assert_eq!(remove_url_search_params(TEST_URL, RemoveParams::All), "https://example.com");
    }

    #[test]
    fn test_remove_edge_cases() {
        assert_eq!(
            remove_url_search_params("https://example.com", names(&["param"])),
            "https://example.com"
        );
        assert_eq!(
            remove_url_search_params("https://example.com#hash?param=1", names(&["param"])),
            "https://example.com#hash"
        );
        assert_eq!(
            remove_url_search_params("https://example.com?a=1&a=2&b=3", names(&["a"])),
            "https://example.com?b=3"
        );
        assert_eq!(
            remove_url_search_params("https://example.com?filter%5B0%5D=value", names(&["filter[0]"])),
            "https://example.com"
        );
    }

    #[test]
    fn test_remove_twice() {
        let intermediate = remove_url_search_params(TEST_URL, names(&["access_token"]));
        assert_eq!(
            remove_url_search_params(intermediate, names(&["state"])),
            "https://example.com?error=401"
        );
    }
}
