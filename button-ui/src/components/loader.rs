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

use yew::prelude::*;

/// Spinning ring shown while the owning `.btn` carries the `loading` class.
/// Always rendered; the style sheet keeps it hidden otherwise.
#[function_component(ButtonLoader)]
pub fn button_loader() -> Html {
    html! {
        <svg
            class="button-loader"
            xmlns="http://www.w3.org/2000/svg"
            width="28px"
            height="28px"
            viewBox="0 0 100 100"
            preserveAspectRatio="xMidYMid"
        >
            <circle
                cx="50"
                cy="50"
                fill="none"
                stroke-width="13"
                r="35"
                stroke-dasharray="164.93361431346415 56.97787143782138"
                transform="rotate(5.90328 50 50)"
            >
                <animateTransform
                    attributeName="transform"
                    type="rotate"
                    repeatCount="indefinite"
                    dur="1s"
                    values="0 50 50;360 50 50"
                    keyTimes="0;1"
                />
            </circle>
        </svg>
    }
}
