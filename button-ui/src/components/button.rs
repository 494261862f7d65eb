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

//! Themed button that renders either an action control or a link.
//!
//! With `on_click_action` set the button is a `<button>` that hands every
//! click to the callback (which decides whether to `prevent_default`).
//! Without it the button is an `<a>` pointing at `url`. Both share the same
//! decorations: `btn <size> <style> <class_name>` classes, an optional
//! leading icon, the loader ring, the label and the analytics data
//! attributes. The result is wrapped in a `.btn-wrapper` `<div>`.

use yew::prelude::*;

use crate::components::icon::ButtonIcon;
use crate::components::loader::ButtonLoader;
use crate::link::{rel, LinkKind, LinkTarget};
use crate::loading::LOADING_CLASS;
use crate::styles::inject_stylesheet;
use crate::theme::{ButtonStyle, Size};

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct ButtonProps {
    /// Accessible name, rendered as the `title` attribute.
    pub title: AttrValue,
    /// Navigation target for the link rendering.
    #[prop_or_default]
    pub url: Option<AttrValue>,
    #[prop_or_default]
    pub size: Size,
    /// Visible text.
    pub label: AttrValue,
    #[prop_or_default]
    pub icon: Option<ButtonIcon>,
    #[prop_or_default]
    pub style: ButtonStyle,
    #[prop_or(false)]
    pub open_in_new_window: bool,
    /// Extra classes appended after the size and style tokens.
    #[prop_or_default]
    pub class_name: AttrValue,
    /// Presence selects the `<button>` rendering.
    #[prop_or_default]
    pub on_click_action: Option<Callback<MouseEvent>>,
    /// Emitted as `data-analytics-event-category`.
    #[prop_or_default]
    pub event_category: Option<AttrValue>,
    /// Emitted as `data-action-detail`.
    #[prop_or_default]
    pub event_label: Option<AttrValue>,
    /// Decides whether a link gets `rel="noopener noreferrer"`.
    #[prop_or_else(rel::never)]
    pub should_contain_no_opener_no_referrer: Callback<Option<AttrValue>, bool>,
    /// Render with the loader already visible.
    #[prop_or(false)]
    pub loading: bool,
    /// Place the loader on the right of the control.
    #[prop_or(false)]
    pub rtl: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rendering {
    Control,
    Link(LinkKind),
}

impl Rendering {
    fn of(props: &ButtonProps) -> Self {
        if props.on_click_action.is_some() {
            Rendering::Control
        } else {
            Rendering::Link(LinkKind::classify(props.url.as_deref()))
        }
    }
}

impl ButtonProps {
    /// `btn <size> <style> <class_name>`, plus `loading` when requested.
    pub fn classes(&self) -> Classes {
        classes!(
            "btn",
            self.size.to_string(),
            self.style.to_string(),
            (!self.class_name.trim().is_empty()).then(|| self.class_name.to_string()),
            self.loading.then_some(LOADING_CLASS),
        )
    }
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    use_effect_with((), |_| {
        inject_stylesheet();
        || ()
    });

    let rendering = Rendering::of(props);
    log::debug!("button \"{}\": rendering {:?}", props.title, rendering);

    let class = props.classes();
    let title = props.title.clone();
    let event_category = props.event_category.clone();
    let event_label = props.event_label.clone();
    let content = html! {
        <>
            { props.icon.as_ref().map(ButtonIcon::render).unwrap_or_default() }
            <ButtonLoader />
            { props.label.clone() }
        </>
    };

    let value = match props.on_click_action.clone() {
        Some(onclick) => html! {
            <button
                {class}
                {title}
                {onclick}
                dir={props.rtl.then_some("rtl")}
                data-analytics-event-category={event_category}
                data-action-detail={event_label}
            >
                { content }
            </button>
        },
        // External and internal links render the same; only the kind differs.
        None => {
            let href = props.url.clone();
            let target = LinkTarget::from_new_window(props.open_in_new_window).as_str();
            let rel = rel::resolve(
                &props.should_contain_no_opener_no_referrer,
                props.url.as_ref(),
            );
            html! {
                <a
                    {class}
                    {title}
                    {href}
                    {target}
                    {rel}
                    data-analytics-event-category={event_category}
                    data-action-detail={event_label}
                >
                    { content }
                </a>
            }
        }
    };

    html! {
        <div class="btn-wrapper">
            { value }
        </div>
    }
}
