//! Raw parameter translation
//!
//! Turns an untyped `name -> value` parameter map into a [`PagingRequest`] and
//! a list of [`SortInstruction`]s. Every function here is total: bad input is
//! normalized to a default, never rejected.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    build_sort_instructions, resolve_page_number, resolve_page_size, PagingRequest,
    SortDirection, SortInstruction,
};
use crate::config::PagingConfig;

/// Parameter name carrying the page number
pub const PAGE_KEY: &str = "page";

/// Parameter name carrying the page size
pub const SIZE_KEY: &str = "size";

/// Parameter names never interpreted as sort fields
pub const RESERVED_KEYS: [&str; 2] = [PAGE_KEY, SIZE_KEY];

/// Whether `key` is a reserved parameter name (case-insensitive)
///
/// Letters are compared one at a time, matching when their upper-case forms or
/// the lower-case forms of those agree, so `"ſize"` (long s) and `"sıze"`
/// (dotless i) are reserved too.
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::is_reserved_key;
///
/// assert!(is_reserved_key("page"));
/// assert!(is_reserved_key("SIZE"));
/// assert!(is_reserved_key("\u{17f}ize"));
/// assert!(!is_reserved_key("name"));
/// ```
#[must_use]
pub fn is_reserved_key(key: &str) -> bool {
    RESERVED_KEYS
        .iter()
        .any(|reserved| equals_ignore_case(key, reserved))
}

fn equals_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (single_upper(x), single_upper(y));
            ux == uy || single_lower(ux) == single_lower(uy)
        })
}

// Single-char case mappings only: 'ß' -> "SS" leaves 'ß' unchanged, and 'İ'
// lowers to plain 'i'.
fn single_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn single_lower(c: char) -> char {
    if c == '\u{130}' {
        return 'i';
    }
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Map every non-reserved parameter to an inferred sort direction.
///
/// `page` and `size` are skipped in any letter case. Values go through
/// [`SortDirection::from_hint`]. Keys keep their first-seen position; a key
/// seen twice takes its last value.
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::{normalize_directions, SortDirection};
///
/// let directions = normalize_directions([
///     ("page", "2"),
///     ("name", "asc"),
///     ("age", "DESC"),
///     ("Size", "10"),
/// ]);
///
/// assert_eq!(directions.len(), 2);
/// assert_eq!(directions["name"], SortDirection::Ascending);
/// assert_eq!(directions["age"], SortDirection::Descending);
/// ```
pub fn normalize_directions<I, K, V>(raw: I) -> IndexMap<String, SortDirection>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut directions = IndexMap::new();

    for (key, value) in raw {
        let key = key.as_ref();
        if is_reserved_key(key) {
            tracing::trace!(key, "Skipping reserved parameter");
            continue;
        }
        directions.insert(
            key.to_string(),
            SortDirection::from_hint(Some(value.as_ref())),
        );
    }

    directions
}

/// Build a paging request from the `page` and `size` parameters.
///
/// Keys are matched exactly. Missing or unusable values fall back to
/// [`PagingRequest::DEFAULT`].
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::{build_paging_request, PagingRequest};
/// use std::collections::HashMap;
///
/// let empty: HashMap<String, String> = HashMap::new();
/// assert_eq!(build_paging_request(&empty), PagingRequest::DEFAULT);
///
/// let request = build_paging_request([("page", "abc"), ("size", "10")]);
/// assert_eq!(request.page(), PagingRequest::DEFAULT.page());
/// assert_eq!(request.size(), 10);
/// ```
pub fn build_paging_request<I, K, V>(raw: I) -> PagingRequest
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    resolve_paging(raw, PagingRequest::DEFAULT, None)
}

fn resolve_paging<I, K, V>(raw: I, defaults: PagingRequest, max_size: Option<u32>) -> PagingRequest
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut page = None;
    let mut size = None;

    for (key, value) in raw {
        match key.as_ref() {
            PAGE_KEY => page = Some(value),
            SIZE_KEY => size = Some(value),
            _ => {}
        }
    }

    let page = resolve_page_number(page.as_ref().map(|v| v.as_ref()), defaults.page());
    let mut size = resolve_page_size(size.as_ref().map(|v| v.as_ref()), defaults.size());

    if let Some(max) = max_size {
        if size > max {
            tracing::debug!(size, max, "Page size above maximum, clamping");
            size = max;
        }
    }

    // Both resolvers only ever return a size >= 1 or a validated default.
    PagingRequest::try_new(page, size).unwrap_or(defaults)
}

/// A fully normalized paging and sort request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageQuery {
    /// Which slice of the result set to fetch
    pub paging: PagingRequest,
    /// Sort order, highest priority first
    pub sort: Vec<SortInstruction>,
}

/// Translator carrying configured defaults.
///
/// `PagingTranslator::default()` behaves exactly like the free functions.
///
/// # Example
///
/// ```rust
/// use acton_paging::config::PagingConfig;
/// use acton_paging::paging::{PagingTranslator, SortInstruction};
///
/// let config = PagingConfig {
///     default_page: 0,
///     default_size: 25,
///     max_size: Some(100),
/// };
/// let translator = PagingTranslator::new(&config).unwrap();
///
/// let query = translator.translate([("size", "500"), ("created_at", "desc")]);
/// assert_eq!(query.paging.size(), 100);
/// assert_eq!(query.sort, vec![SortInstruction::desc("created_at")]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PagingTranslator {
    defaults: PagingRequest,
    max_size: Option<u32>,
}

impl PagingTranslator {
    /// Create a translator from validated configuration.
    pub fn new(config: &PagingConfig) -> crate::Result<Self> {
        config.validate()?;
        Ok(Self {
            defaults: config.defaults()?,
            max_size: config.max_size,
        })
    }

    /// The request used when page or size are unusable
    #[must_use]
    pub fn defaults(&self) -> PagingRequest {
        self.defaults
    }

    /// Run the whole pipeline over one parameter map.
    pub fn translate<I, K, V>(&self, raw: I) -> PageQuery
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let entries: Vec<(K, V)> = raw.into_iter().collect();
        let borrowed = || {
            entries
                .iter()
                .map(|(k, v)| (AsRef::<str>::as_ref(k), AsRef::<str>::as_ref(v)))
        };

        let query = PageQuery {
            paging: resolve_paging(borrowed(), self.defaults, self.max_size),
            sort: build_sort_instructions(normalize_directions(borrowed())),
        };
        tracing::trace!(
            page = query.paging.page(),
            size = query.paging.size(),
            sort_keys = query.sort.len(),
            "Translated paging parameters"
        );
        query
    }

    /// Paging request only, using the configured defaults
    pub fn paging_request<I, K, V>(&self, raw: I) -> PagingRequest
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        resolve_paging(raw, self.defaults, self.max_size)
    }

    /// Sort instructions only
    pub fn sort_instructions<I, K, V>(&self, raw: I) -> Vec<SortInstruction>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        build_sort_instructions(normalize_directions(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_is_reserved_key() {
        for key in ["page", "PAGE", "Page", "size", "SIZE", "sIzE"] {
            assert!(is_reserved_key(key), "{key}");
        }
        for key in ["pages", "sizes", "name", "", "pag", "siz\u{e9}", "\u{df}ize"] {
            assert!(!is_reserved_key(key), "{key}");
        }
    }

    #[test]
    fn test_reserved_keys_fold_non_ascii_letters() {
        for key in ["s\u{131}ze", "\u{17f}ize", "\u{17f}\u{131}ZE", "S\u{130}ZE"] {
            assert!(is_reserved_key(key), "{key}");
        }

        let directions = normalize_directions([
            ("s\u{131}ze", "d"),
            ("\u{17f}ize", "d"),
            ("name", "d"),
        ]);
        let keys: Vec<&str> = directions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name"]);
    }

    #[test]
    fn test_normalize_excludes_reserved_keys_any_case() {
        let params = raw(&[
            ("page", "1"),
            ("PAGE", "d"),
            ("Size", "desc"),
            ("name", "asc"),
        ]);
        let directions = normalize_directions(&params);
        assert_eq!(directions.len(), 1);
        assert_eq!(directions["name"], SortDirection::Ascending);
    }

    #[test]
    fn test_normalize_infers_directions() {
        let directions = normalize_directions([
            ("a", "desc"),
            ("b", "DOWN"),
            ("c", "asc"),
            ("d", "xyz"),
            ("e", ""),
        ]);
        assert_eq!(directions["a"], SortDirection::Descending);
        assert_eq!(directions["b"], SortDirection::Descending);
        assert_eq!(directions["c"], SortDirection::Ascending);
        assert_eq!(directions["d"], SortDirection::Ascending);
        assert_eq!(directions["e"], SortDirection::Ascending);
    }

    #[test]
    fn test_normalize_keeps_first_position_last_value() {
        let directions = normalize_directions([("b", "asc"), ("a", "asc"), ("b", "desc")]);
        let keys: Vec<&str> = directions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(directions["b"], SortDirection::Descending);
    }

    #[test]
    fn test_normalize_empty_input() {
        let params: BTreeMap<String, String> = BTreeMap::new();
        assert!(normalize_directions(&params).is_empty());
    }

    #[test]
    fn test_paging_request_empty_uses_defaults() {
        assert_eq!(build_paging_request(&raw(&[])), PagingRequest::DEFAULT);
    }

    #[test]
    fn test_paging_request_bad_page() {
        let request = build_paging_request(&raw(&[("page", "abc"), ("size", "10")]));
        assert_eq!(request.page(), PagingRequest::DEFAULT.page());
        assert_eq!(request.size(), 10);
    }

    #[test]
    fn test_paging_request_negative_size() {
        let request = build_paging_request(&raw(&[("page", "2"), ("size", "-5")]));
        assert_eq!(request.page(), 2);
        assert_eq!(request.size(), PagingRequest::DEFAULT.size());
    }

    #[test]
    fn test_paging_request_zero_size() {
        let request = build_paging_request(&raw(&[("size", "0")]));
        assert_eq!(request.size(), PagingRequest::DEFAULT.size());
    }

    #[test]
    fn test_paging_request_overflow() {
        let request = build_paging_request(&raw(&[
            ("page", "99999999999999"),
            ("size", "99999999999999"),
        ]));
        assert_eq!(request, PagingRequest::DEFAULT);
    }

    #[test]
    fn test_paging_request_keys_are_exact() {
        let request = build_paging_request(&raw(&[("PAGE", "4"), ("Size", "7")]));
        assert_eq!(request, PagingRequest::DEFAULT);
    }

    #[test]
    fn test_paging_request_ignores_sort_fields() {
        let request = build_paging_request(&raw(&[("page", "3"), ("size", "15"), ("name", "d")]));
        assert_eq!(request, PagingRequest::try_new(3, 15).unwrap());
    }

    #[test]
    fn test_pipeline_is_repeatable() {
        let params = raw(&[("name", "asc"), ("age", "desc"), ("page", "1")]);

        let first = build_sort_instructions(normalize_directions(&params));
        let second = build_sort_instructions(normalize_directions(&params));

        assert_eq!(first.len(), 2);
        assert_eq!(first.len(), second.len());
        for instruction in &first {
            assert!(second.contains(instruction));
        }
    }

    #[test]
    fn test_default_translator_matches_free_functions() {
        let params = raw(&[("page", "2"), ("size", "-5"), ("name", "desc")]);
        let translator = PagingTranslator::default();

        let query = translator.translate(&params);
        assert_eq!(query.paging, build_paging_request(&params));
        assert_eq!(
            query.sort,
            build_sort_instructions(normalize_directions(&params))
        );
        assert_eq!(translator.defaults(), PagingRequest::DEFAULT);
    }

    #[test]
    fn test_translator_uses_configured_defaults() {
        let config = PagingConfig {
            default_page: 1,
            default_size: 50,
            max_size: None,
        };
        let translator = PagingTranslator::new(&config).unwrap();

        let request = translator.paging_request([("page", "x"), ("size", "")]);
        assert_eq!(request, PagingRequest::try_new(1, 50).unwrap());
    }

    #[test]
    fn test_translator_clamps_to_max_size() {
        let config = PagingConfig {
            default_page: 0,
            default_size: 20,
            max_size: Some(100),
        };
        let translator = PagingTranslator::new(&config).unwrap();

        assert_eq!(translator.paging_request([("size", "500")]).size(), 100);
        assert_eq!(translator.paging_request([("size", "100")]).size(), 100);
        assert_eq!(translator.paging_request([("size", "99")]).size(), 99);
    }

    #[test]
    fn test_translator_rejects_invalid_config() {
        let config = PagingConfig {
            default_page: 0,
            default_size: 0,
            max_size: None,
        };
        let err = PagingTranslator::new(&config).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_translate_ordered_input() {
        let translator = PagingTranslator::default();
        let query = translator.translate(vec![
            ("last_name", "asc"),
            ("page", "3"),
            ("first_name", "desc"),
            ("size", "10"),
        ]);

        assert_eq!(query.paging, PagingRequest::try_new(3, 10).unwrap());
        assert_eq!(
            query.sort,
            vec![
                SortInstruction::asc("last_name"),
                SortInstruction::desc("first_name"),
            ]
        );
        assert_eq!(translator.sort_instructions([("page", "1")]), Vec::new());
    }
}
