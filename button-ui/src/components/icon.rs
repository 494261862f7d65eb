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

use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Leading icon of a button. `image` is the `src`, `description` the `alt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonIcon {
    pub title: String,
    pub image: String,
    pub description: String,
}

impl ButtonIcon {
    pub fn render(&self) -> Html {
        html! {
            <img
                class="btn__icon"
                src={self.image.clone()}
                alt={self.description.clone()}
                title={self.title.clone()}
            />
        }
    }
}
