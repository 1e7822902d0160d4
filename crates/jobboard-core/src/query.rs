//! The filter update protocol.
//!
//! Every interaction on the listing rewrites the query string rather than
//! mutating any view object: search and tag changes write their parameter and
//! reset `page` to `1`; a page change writes only `page`. Writing an empty
//! value removes the parameter instead of leaving `key=` behind.

use url::form_urlencoded;

use crate::view_state::{PAGE_PARAM, SEARCH_PARAM, TAGS_PARAM};

/// Ordered query parameters, preserving the order they appeared in the URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Returns the first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replaces the first `key` in place (dropping later duplicates) or appends it.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0usize;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_owned(), value)),
        }
    }

    /// Removes every occurrence of `key`.
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// Returns a copy without `key`.
    #[must_use]
    pub fn without(&self, key: &str) -> Self {
        let mut copy = self.clone();
        copy.remove(key);
        copy
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the parameters without a leading `?`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in &self.pairs {
            serializer.append_pair(k, v);
        }
        serializer.finish()
    }
}

/// A single parameter write: a new value or removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamUpdate {
    Set(String),
    Remove,
}

impl ParamUpdate {
    /// An empty value clears the parameter.
    #[must_use]
    pub fn from_value(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Remove
        } else {
            Self::Set(value)
        }
    }
}

/// Applies `updates` to a copy of `params`.
///
/// If any update touches `search` or `tags`, `page` is set to `1` afterwards,
/// whatever it was before.
#[must_use]
pub fn apply_updates(params: &QueryParams, updates: &[(&str, ParamUpdate)]) -> QueryParams {
    let mut next = params.clone();
    for (key, update) in updates {
        match update {
            ParamUpdate::Set(value) => next.set(key, value.clone()),
            ParamUpdate::Remove => next.remove(key),
        }
    }

    if updates
        .iter()
        .any(|(key, _)| *key == SEARCH_PARAM || *key == TAGS_PARAM)
    {
        next.set(PAGE_PARAM, "1");
    }
    next
}

#[must_use]
pub fn search_update(text: &str) -> (&'static str, ParamUpdate) {
    (SEARCH_PARAM, ParamUpdate::from_value(text))
}

#[must_use]
pub fn tags_update(tags: &[String]) -> (&'static str, ParamUpdate) {
    (TAGS_PARAM, ParamUpdate::from_value(tags.join(",")))
}

#[must_use]
pub fn clear_tags_update() -> (&'static str, ParamUpdate) {
    (TAGS_PARAM, ParamUpdate::Remove)
}

#[must_use]
pub fn page_update(page: u32) -> (&'static str, ParamUpdate) {
    (PAGE_PARAM, ParamUpdate::Set(page.to_string()))
}

/// Adds `tag` when it is not selected, otherwise removes it.
///
/// Additions go to the end; removals keep the relative order of the rest.
#[must_use]
pub fn toggle_tag(selected: &[String], tag: &str) -> Vec<String> {
    if selected.iter().any(|t| t == tag) {
        selected.iter().filter(|t| *t != tag).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(tag.to_owned());
        next
    }
}

/// Builds the listing URL for `params`.
#[must_use]
pub fn listing_href(params: &QueryParams) -> String {
    if params.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", params.to_query_string())
    }
}
