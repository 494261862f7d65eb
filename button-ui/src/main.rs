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

//! Demo gallery: every theme in both sizes, as links and as controls.

use button_ui::{rel, set_loading, Button, ButtonContent, ButtonStyle, Size};
use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

/// Host pages may publish their own content under this key.
const CONTENT_KEY: &str = "__BUTTON_CONTENT";
const LOADING_MS: u32 = 1500;

fn featured_content() -> ButtonContent {
    match ButtonContent::from_window(CONTENT_KEY) {
        Ok(content) => content,
        Err(e) => {
            log::info!("using sample button content: {e:#}");
            ButtonContent::sample()
        }
    }
}

#[function_component(App)]
fn app_component() -> Html {
    let featured = use_memo((), |_| featured_content());

    // Show the loader for a moment, the way a form submit would.
    let on_click_action = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        let Some(target) = e.target_dyn_into::<Element>() else {
            return;
        };
        if set_loading(&target, true) {
            Timeout::new(LOADING_MS, move || {
                set_loading(&target, false);
            })
            .forget();
        }
    });

    let rows = ButtonStyle::ALL.into_iter().map(|style| {
        html! {
            <div class="gallery-row" key={style.to_string()}>
                { for Size::ALL.into_iter().map(|size| html! {
                    <>
                        <Button
                            title={format!("{style} {size} link")}
                            label={format!("{style} link")}
                            url="https://github.com/security-union/videocall-rs"
                            open_in_new_window=true
                            should_contain_no_opener_no_referrer={rel::external_only()}
                            {size}
                            {style}
                            event_category="gallery"
                            event_label={format!("{style}-{size}-link")}
                        />
                        <Button
                            title={format!("{style} {size} control")}
                            label={format!("{style} control")}
                            on_click_action={on_click_action.clone()}
                            {size}
                            {style}
                            event_category="gallery"
                            event_label={format!("{style}-{size}-control")}
                        />
                    </>
                }) }
            </div>
        }
    });

    html! {
        <main class="gallery">
            <h1>{ "Buttons" }</h1>
            <Button ..(*featured).clone().into_props(None) />
            { for rows }
        </main>
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("failed to init logger: {e}").into());
    }
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
