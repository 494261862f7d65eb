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

//! Button sizes, theme names and the color tokens behind them.
//!
//! Every theme comes in a "primary" (filled) and a "secondary" (outlined)
//! flavour sharing the same color token. The pairing lives in
//! [`PRIMARY_THEME`] / [`SECONDARY_THEME`] together with [`THEME_COLORS`] and
//! [`THEME_COLORS_HOVER`]; [`theme_palette`] exposes it as a lookup table
//! keyed by [`ButtonStyle`].

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::anyhow;
use enum_display::EnumDisplay;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumDisplay, Serialize, Deserialize,
)]
#[enum_display(case = "Kebab")]
#[serde(rename_all = "kebab-case")]
pub enum Size {
    Small,
    #[default]
    Medium,
}

impl Size {
    pub const ALL: [Size; 2] = [Size::Small, Size::Medium];
}

impl FromStr for Size {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.to_string() == token)
            .ok_or_else(|| anyhow!("unknown button size `{token}`"))
    }
}

/// List of button colors. The `Display` form is the CSS class token.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, EnumDisplay, Serialize, Deserialize,
)]
#[enum_display(case = "Kebab")]
#[serde(rename_all = "kebab-case")]
pub enum ButtonStyle {
    #[default]
    PrimaryOrange,
    SecondaryOrange,
    PrimaryCoral,
    SecondaryCoral,
    PrimaryTeal,
    SecondaryTeal,
    PrimaryIndigo,
    SecondaryIndigo,
}

impl ButtonStyle {
    pub const ALL: [ButtonStyle; 8] = [
        ButtonStyle::PrimaryOrange,
        ButtonStyle::SecondaryOrange,
        ButtonStyle::PrimaryCoral,
        ButtonStyle::SecondaryCoral,
        ButtonStyle::PrimaryTeal,
        ButtonStyle::SecondaryTeal,
        ButtonStyle::PrimaryIndigo,
        ButtonStyle::SecondaryIndigo,
    ];

    pub fn variant(self) -> ThemeVariant {
        theme_palette(self).variant
    }
}

impl FromStr for ButtonStyle {
    type Err = anyhow::Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.to_string() == token)
            .ok_or_else(|| anyhow!("unknown button style `{token}`"))
    }
}

/// CSS custom properties the host page is expected to define.
#[derive(Debug)]
pub struct Colors {
    pub orange: &'static str,
    pub dark_orange: &'static str,
    pub coral: &'static str,
    pub light_coral: &'static str,
    pub teal: &'static str,
    pub light_teal: &'static str,
    pub indigo: &'static str,
    pub light_indigo: &'static str,
}

pub const COLORS: Colors = Colors {
    orange: "var(--orange)",
    dark_orange: "var(--dark-orange)",
    coral: "var(--coral)",
    light_coral: "var(--coral-hover)",
    teal: "var(--teal)",
    light_teal: "var(--light-teal)",
    indigo: "var(--indigo)",
    light_indigo: "var(--light-indigo)",
};

pub const PRIMARY_THEME: [ButtonStyle; 4] = [
    ButtonStyle::PrimaryOrange,
    ButtonStyle::PrimaryCoral,
    ButtonStyle::PrimaryTeal,
    ButtonStyle::PrimaryIndigo,
];

pub const SECONDARY_THEME: [ButtonStyle; 4] = [
    ButtonStyle::SecondaryOrange,
    ButtonStyle::SecondaryCoral,
    ButtonStyle::SecondaryTeal,
    ButtonStyle::SecondaryIndigo,
];

pub const THEME_COLORS: [&str; 4] = [COLORS.orange, COLORS.coral, COLORS.teal, COLORS.indigo];

pub const THEME_COLORS_HOVER: [&str; 4] = [
    COLORS.dark_orange,
    COLORS.light_coral,
    COLORS.light_teal,
    COLORS.light_indigo,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Filled with the theme color.
    Primary,
    /// White fill, theme-colored text and border.
    Secondary,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub variant: ThemeVariant,
    pub color: &'static str,
    pub hover: &'static str,
}

static THEME_TABLE: Lazy<HashMap<ButtonStyle, ThemePalette>> = Lazy::new(|| {
    let paired = |themes: [ButtonStyle; 4], variant: ThemeVariant| {
        themes
            .into_iter()
            .zip(THEME_COLORS.into_iter().zip(THEME_COLORS_HOVER))
            .map(move |(style, (color, hover))| {
                (
                    style,
                    ThemePalette {
                        variant,
                        color,
                        hover,
                    },
                )
            })
    };
    paired(PRIMARY_THEME, ThemeVariant::Primary)
        .chain(paired(SECONDARY_THEME, ThemeVariant::Secondary))
        .collect()
});

pub fn theme_palette(style: ButtonStyle) -> ThemePalette {
    // Every style sits in exactly one of PRIMARY_THEME / SECONDARY_THEME.
    THEME_TABLE[&style]
}
