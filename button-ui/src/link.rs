/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Link classification and `target` / `rel` attribute helpers.

use yew::prelude::{AttrValue, Callback};

/// Value of the `rel` attribute added when the rel predicate approves a URL.
pub const NO_OPENER_NO_REFERRER: &str = "noopener noreferrer";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    External,
    Internal,
}

impl LinkKind {
    /// Anything containing `http` is treated as external. No URL at all is
    /// internal navigation.
    pub fn classify(url: Option<&str>) -> Self {
        match url {
            Some(url) if url.contains("http") => LinkKind::External,
            _ => LinkKind::Internal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Blank,
    SelfFrame,
}

impl LinkTarget {
    pub fn from_new_window(open_in_new_window: bool) -> Self {
        if open_in_new_window {
            LinkTarget::Blank
        } else {
            LinkTarget::SelfFrame
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::SelfFrame => "_self",
        }
    }
}

/// Predicates for `should_contain_no_opener_no_referrer`.
pub mod rel {
    use super::*;

    /// Never adds `rel`. This is the default.
    pub fn never() -> Callback<Option<AttrValue>, bool> {
        Callback::from(|_: Option<AttrValue>| false)
    }

    pub fn always() -> Callback<Option<AttrValue>, bool> {
        Callback::from(|_: Option<AttrValue>| true)
    }

    /// Adds `rel` to links that [`LinkKind::classify`] considers external.
    pub fn external_only() -> Callback<Option<AttrValue>, bool> {
        Callback::from(|url: Option<AttrValue>| {
            LinkKind::classify(url.as_deref()) == LinkKind::External
        })
    }

    /// Resolves the `rel` attribute for `url`.
    pub fn resolve(
        predicate: &Callback<Option<AttrValue>, bool>,
        url: Option<&AttrValue>,
    ) -> Option<AttrValue> {
        predicate
            .emit(url.cloned())
            .then_some(AttrValue::Static(NO_OPENER_NO_REFERRER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_http_substring() {
        assert_eq!(
            LinkKind::classify(Some("https://example.com")),
            LinkKind::External
        );
        assert_eq!(LinkKind::classify(Some("http://a.b/c")), LinkKind::External);
        assert_eq!(LinkKind::classify(Some("/buy-it-now")), LinkKind::Internal);
        assert_eq!(LinkKind::classify(None), LinkKind::Internal);
        // Substring match, not a scheme check.
        assert_eq!(
            LinkKind::classify(Some("/redirect?to=http")),
            LinkKind::External
        );
    }

    #[test]
    fn target_follows_new_window_flag() {
        assert_eq!(LinkTarget::from_new_window(true).as_str(), "_blank");
        assert_eq!(LinkTarget::from_new_window(false).as_str(), "_self");
    }

    #[test]
    fn rel_predicates() {
        let external = AttrValue::from("https://example.com");
        let internal = AttrValue::from("/home");

        assert_eq!(rel::resolve(&rel::never(), Some(&external)), None);
        assert_eq!(
            rel::resolve(&rel::always(), None).as_deref(),
            Some(NO_OPENER_NO_REFERRER)
        );
        assert_eq!(
            rel::resolve(&rel::external_only(), Some(&external)).as_deref(),
            Some(NO_OPENER_NO_REFERRER)
        );
        assert_eq!(rel::resolve(&rel::external_only(), Some(&internal)), None);
    }

    #[test]
    fn predicate_receives_the_url() {
        let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
        let seen_c = seen.clone();
        let predicate = Callback::from(move |url: Option<AttrValue>| {
            *seen_c.borrow_mut() = url;
            false
        });
        rel::resolve(&predicate, Some(&AttrValue::from("/x")));
        assert_eq!(seen.borrow().as_deref(), Some("/x"));
    }
}
