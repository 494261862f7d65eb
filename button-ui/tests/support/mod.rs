// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for button-ui component tests.
//
// Provides mount/cleanup helpers and small DOM queries so that individual
// test files stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use yew::platform::time::sleep;
use yew::prelude::*;

use button_ui::{Button, ButtonProps};

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

#[function_component(Host)]
fn host(props: &ButtonProps) -> Html {
    html! { <Button ..props.clone() /> }
}

/// Render a single `Button` with `props` into a fresh mount point and yield
/// to the scheduler so the DOM is populated.
pub async fn render_button(props: ButtonProps) -> web_sys::Element {
    let mount = create_mount_point();
    yew::Renderer::<Host>::with_root_and_props(mount.clone(), props).render();
    sleep(Duration::ZERO).await;
    mount
}

/// The `.btn-wrapper` container.
pub fn wrapper(mount: &web_sys::Element) -> web_sys::Element {
    mount
        .query_selector(".btn-wrapper")
        .unwrap()
        .expect("should render a .btn-wrapper")
}

/// The control or link inside the wrapper.
pub fn first_child(mount: &web_sys::Element) -> web_sys::Element {
    wrapper(mount)
        .first_element_child()
        .expect("wrapper should have a child")
}
