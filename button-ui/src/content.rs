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

//! Authored button content.
//!
//! Content files use the camelCase keys content authors already know
//! (`openInNewWindow`, `className`, `eventCategory`, ...). Callbacks cannot be
//! authored, so [`ButtonContent::into_props`] takes the click action
//! separately.

use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use yew::prelude::{AttrValue, Callback, MouseEvent};

use crate::components::button::ButtonProps;
use crate::components::icon::ButtonIcon;
use crate::link::rel;
use crate::theme::{ButtonStyle, Size};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonContent {
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub size: Size,
    pub label: String,
    #[serde(default)]
    pub icon: Option<ButtonIcon>,
    #[serde(default)]
    pub style: ButtonStyle,
    #[serde(default)]
    pub open_in_new_window: bool,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub event_category: Option<String>,
    #[serde(default)]
    pub event_label: Option<String>,
}

impl ButtonContent {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("failed to parse button content")
    }

    pub fn from_js(value: JsValue) -> anyhow::Result<Self> {
        if value.is_undefined() || value.is_null() {
            bail!("button content is missing");
        }
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| anyhow!("failed to read button content: {e}"))
    }

    /// Reads content published by the host page as `window[key]`.
    pub fn from_window(key: &str) -> anyhow::Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(key))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_js(value).with_context(|| format!("window.{key}"))
    }

    /// The "Buy it now" content used by the demo and the tests.
    pub fn sample() -> Self {
        Self {
            title: "Buy it now".into(),
            url: Some("/buy-it-now".into()),
            size: Size::Medium,
            label: "Buy it NOW".into(),
            icon: Some(ButtonIcon {
                title: "Buy it now icon".into(),
                image: "/assets/buy-it-now.png".into(),
                description: "Buy it now icon".into(),
            }),
            style: ButtonStyle::PrimaryOrange,
            open_in_new_window: true,
            class_name: "otherClass".into(),
            event_category: None,
            event_label: None,
        }
    }

    pub fn into_props(self, on_click_action: Option<Callback<MouseEvent>>) -> ButtonProps {
        ButtonProps {
            title: self.title.into(),
            url: self.url.map(AttrValue::from),
            size: self.size,
            label: self.label.into(),
            icon: self.icon,
            style: self.style,
            open_in_new_window: self.open_in_new_window,
            class_name: self.class_name.into(),
            on_click_action,
            event_category: self.event_category.map(AttrValue::from),
            event_label: self.event_label.map(AttrValue::from),
            should_contain_no_opener_no_referrer: rel::never(),
            loading: false,
            rtl: false,
        }
    }
}
