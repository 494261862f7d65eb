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

//! button-ui library root.
//!
//! Re-exports the [`Button`] component and its supporting types so that the
//! demo binary (`main.rs`) and integration tests (under `tests/`) share them.

pub mod components;
pub mod content;
pub mod link;
pub mod loading;
pub mod styles;
pub mod theme;

pub use components::{Button, ButtonIcon, ButtonProps};
pub use content::ButtonContent;
pub use link::{rel, LinkKind, LinkTarget};
pub use loading::{is_loading, set_loading};
pub use styles::{inject_stylesheet, stylesheet};
pub use theme::{
    theme_palette, ButtonStyle, Size, COLORS, PRIMARY_THEME, SECONDARY_THEME, THEME_COLORS,
    THEME_COLORS_HOVER,
};
