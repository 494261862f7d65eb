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

pub mod button;
pub mod icon;
pub mod loader;

pub use button::{Button, ButtonProps};
pub use icon::ButtonIcon;
pub use loader::ButtonLoader;
