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

//! Toggling the loading indicator on an already rendered button.

use web_sys::Element;

pub const LOADING_CLASS: &str = "loading";
const WRAPPER_CLASS: &str = "btn-wrapper";

/// Sets or clears the `loading` class on the `.btn` element owning `element`.
///
/// `element` may be the `.btn` itself, anything inside it (an event target),
/// or the surrounding `.btn-wrapper`. Any other container is rejected rather
/// than searched. Returns `false` when no `.btn` could be found or the class
/// list could not be updated.
pub fn set_loading(element: &Element, loading: bool) -> bool {
    let Some(btn) = owning_button(element) else {
        log::warn!("set_loading: no .btn element near <{}>", element.tag_name());
        return false;
    };
    match btn.class_list().toggle_with_force(LOADING_CLASS, loading) {
        Ok(_) => true,
        Err(e) => {
            log::warn!("set_loading: failed to toggle class: {e:?}");
            false
        }
    }
}

pub fn is_loading(element: &Element) -> bool {
    owning_button(element).is_some_and(|btn| btn.class_list().contains(LOADING_CLASS))
}

fn owning_button(element: &Element) -> Option<Element> {
    if let Ok(Some(btn)) = element.closest(".btn") {
        return Some(btn);
    }
    if !element.class_list().contains(WRAPPER_CLASS) {
        return None;
    }
    element.query_selector(":scope > .btn").ok().flatten()
}
