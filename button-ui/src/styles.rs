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

//! Static style sheet for [`Button`](crate::components::button::Button).
//!
//! The rules are keyed on the class names the component emits: `.btn-wrapper`
//! for the outer container, `button.btn` for the control and `a.btn` for the
//! link. The sheet is generated once from the theme table and appended to
//! `<head>` the first time a button mounts.

use once_cell::sync::Lazy;

use crate::theme::{theme_palette, ButtonStyle, PRIMARY_THEME, SECONDARY_THEME};

/// Id of the `<style>` element holding [`stylesheet`].
pub const STYLESHEET_ID: &str = "button-ui-styles";

const WHITE: &str = "var(--white)";
const DESKTOP: &str = "@media screen and (min-width: 768px)";

static STYLESHEET: Lazy<String> = Lazy::new(build_stylesheet);

/// The full CSS text for every size, theme and loading state.
pub fn stylesheet() -> &'static str {
    &STYLESHEET
}

/// Appends [`stylesheet`] to `<head>` unless an element with
/// [`STYLESHEET_ID`] already exists.
pub fn inject_stylesheet() {
    let document = gloo_utils::document();
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        log::warn!("no <head> element, button styles not injected");
        return;
    };
    let style = match document.create_element("style") {
        Ok(style) => style,
        Err(e) => {
            log::warn!("failed to create button style element: {e:?}");
            return;
        }
    };
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(stylesheet()));
    if let Err(e) = head.append_child(&style) {
        log::warn!("failed to append button styles: {e:?}");
        return;
    }
    log::debug!("injected button styles ({} bytes)", stylesheet().len());
}

fn build_stylesheet() -> String {
    let mut css = String::new();
    write_wrapper_rules(&mut css);
    for element in ["button", "a"] {
        write_base_rules(&mut css, element);
        for style in PRIMARY_THEME {
            write_primary_rules(&mut css, element, style);
        }
        for style in SECONDARY_THEME {
            write_secondary_rules(&mut css, element, style);
        }
    }
    write_control_loading_rules(&mut css);
    css
}

fn write_wrapper_rules(css: &mut String) {
    css.push_str(
        ".btn-wrapper { width: fit-content; }\n\
         .btn-wrapper button:not(.show-focus):focus,\n\
         .btn-wrapper a:not(.show-focus):focus { outline: none; }\n\
         .btn-wrapper:focus { outline: 2px solid #b2c6e9; outline-offset: 1px; }\n",
    );
}

fn write_base_rules(css: &mut String, element: &str) {
    css.push_str(&format!(
        "{element}.btn {{\n\
         \x20 display: inline-block;\n\
         \x20 box-sizing: border-box;\n\
         \x20 font-weight: 600;\n\
         \x20 text-align: center;\n\
         \x20 text-decoration: none;\n\
         \x20 white-space: nowrap;\n\
         \x20 vertical-align: middle;\n\
         \x20 cursor: pointer;\n\
         \x20 border-radius: 20px;\n\
         \x20 position: relative;\n\
         }}\n"
    ));
    for (size, padding) in [("small", "7px 30px"), ("medium", "12px 30px")] {
        css.push_str(&format!(
            "{element}.btn.{size} {{\n\
             \x20 font-size: calc(14px + var(--zoom));\n\
             \x20 font-weight: normal;\n\
             \x20 letter-spacing: 0.05px;\n\
             \x20 line-height: normal;\n\
             \x20 padding: {padding};\n\
             }}\n"
        ));
    }
    css.push_str(&format!(
        "{element}.btn .button-loader {{ display: none; position: absolute; top: 5px; }}\n\
         {element}.btn.loading .button-loader {{ display: inline; }}\n\
         {element}.btn.loading .button-loader circle {{ stroke: {WHITE}; }}\n"
    ));
}

fn write_primary_rules(css: &mut String, element: &str, style: ButtonStyle) {
    let palette = theme_palette(style);
    let sel = format!("{element}.btn.{style}");
    css.push_str(&format!(
        "{sel} {{ color: {WHITE}; background-color: {color}; }}\n\
         {DESKTOP} {{ {sel}:active {{ color: {WHITE}; background-color: {hover}; }} }}\n\
         {sel} svg circle {{ stroke: {WHITE}; }}\n\
         {sel}:hover svg circle {{ stroke: {WHITE}; }}\n\
         {DESKTOP} {{ {sel}:hover {{ color: {WHITE}; background-color: {hover}; }} }}\n",
        color = palette.color,
        hover = palette.hover,
    ));
}

fn write_secondary_rules(css: &mut String, element: &str, style: ButtonStyle) {
    let palette = theme_palette(style);
    let sel = format!("{element}.btn.{style}");
    css.push_str(&format!(
        "{sel} {{ color: {color}; background-color: {WHITE}; border: 1px solid {color}; }}\n\
         {DESKTOP} {{ {sel}:active {{ color: {WHITE}; background-color: {color}; }} }}\n\
         {sel} svg circle {{ stroke: {color}; }}\n\
         {sel}:hover svg circle {{ stroke: {WHITE}; }}\n\
         {DESKTOP} {{ {sel}:hover {{ color: {WHITE}; background-color: {color}; }} }}\n",
        color = palette.color,
    ));
}

// Only the control reserves room for the loader; links keep their padding.
fn write_control_loading_rules(css: &mut String) {
    css.push_str(
        "button.btn.loading { padding-left: 44px; }\n\
         button.btn.loading .button-loader { left: 10px; }\n\
         button.btn[dir=\"rtl\"].loading { padding-left: 30px; padding-right: 44px; }\n\
         button.btn[dir=\"rtl\"].loading .button-loader { left: auto; right: 10px; }\n",
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_theme_for_both_elements() {
        let css = stylesheet();
        for style in ButtonStyle::ALL {
            assert!(css.contains(&format!("button.btn.{style} {{")), "{style}");
            assert!(css.contains(&format!("a.btn.{style} {{")), "{style}");
        }
    }

    #[test]
    fn primary_theme_fills_with_theme_color() {
        let css = stylesheet();
        assert!(css.contains(
            "a.btn.primary-teal { color: var(--white); background-color: var(--teal); }"
        ));
        assert!(css.contains(
            "@media screen and (min-width: 768px) { a.btn.primary-teal:hover { color: var(--white); background-color: var(--light-teal); } }"
        ));
    }

    #[test]
    fn secondary_theme_is_outlined() {
        let css = stylesheet();
        assert!(css.contains(
            "button.btn.secondary-indigo { color: var(--indigo); background-color: var(--white); border: 1px solid var(--indigo); }"
        ));
        assert!(css.contains("button.btn.secondary-indigo svg circle { stroke: var(--indigo); }"));
    }

    #[test]
    fn sizes_and_loader_rules_present() {
        let css = stylesheet();
        assert!(css.contains("padding: 7px 30px;"));
        assert!(css.contains("padding: 12px 30px;"));
        assert!(css.contains("a.btn .button-loader { display: none;"));
        assert!(css.contains("button.btn.loading .button-loader { display: inline; }"));
    }

    #[test]
    fn base_and_size_blocks_are_complete() {
        let css = stylesheet();
        assert!(css.contains(
            "a.btn {\n  display: inline-block;\n  box-sizing: border-box;\n  font-weight: 600;\n"
        ));
        assert!(css.contains("  position: relative;\n}\n"));
        assert!(css.contains(
            "button.btn.small {\n  font-size: calc(14px + var(--zoom));\n  font-weight: normal;\n  letter-spacing: 0.05px;\n  line-height: normal;\n  padding: 7px 30px;\n}\n"
        ));
    }

    #[test]
    fn loading_padding_only_applies_to_control() {
        let css = stylesheet();
        assert!(css.contains("button.btn.loading { padding-left: 44px; }"));
        assert!(!css.contains("a.btn.loading { padding-left"));
        assert!(css.contains("button.btn[dir=\"rtl\"].loading .button-loader"));
    }

    #[test]
    fn wrapper_focus_outline() {
        assert!(stylesheet().contains(".btn-wrapper:focus { outline: 2px solid #b2c6e9; outline-offset: 1px; }"));
    }
}
