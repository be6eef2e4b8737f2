// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color tokens and the fixed four-color palette.
//!
//! The palette order is the order in which the search tries colors, so two
//! palettes holding the same colors in a different order produce different
//! (but equally valid) colorings.

use crate::error::{ColoringError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// Number of colors in a palette.
pub const NCOLORS: usize = 4;

const _: () = assert!(<Color as EnumCount>::COUNT == NCOLORS);

/// A color token.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
}

impl Color {
    /// Display color name understood by plotting tools.
    pub fn display_name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }

    /// Hex RGB value of the display color.
    pub fn rgb(self) -> &'static str {
        match self {
            Color::Red => "#ff0000",
            Color::Yellow => "#ffff00",
            Color::Blue => "#0000ff",
            Color::Green => "#008000",
        }
    }
}

/// An ordered sequence of four distinct colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette([Color; NCOLORS]);

impl Palette {
    /// Create a palette, rejecting repeated colors.
    pub fn new(colors: [Color; NCOLORS]) -> Result<Self> {
        for (i, color) in colors.iter().enumerate() {
            if colors[..i].contains(color) {
                return Err(ColoringError::InvalidPalette(format!(
                    "{} appears more than once",
                    color
                )));
            }
        }
        Ok(Self(colors))
    }

    /// Create a palette from color names such as `["Red", "Yellow", "Blue", "Green"]`.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        if names.len() != NCOLORS {
            return Err(ColoringError::InvalidPalette(format!(
                "expected {} colors, got {}",
                NCOLORS,
                names.len()
            )));
        }
        let mut colors = [Color::Red; NCOLORS];
        for (slot, name) in colors.iter_mut().zip(names) {
            let name = name.as_ref().trim();
            *slot = Color::from_str(name)
                .map_err(|_| ColoringError::InvalidPalette(format!("unknown color {:?}", name)))?;
        }
        Self::new(colors)
    }

    /// The colors in try-order.
    pub fn colors(&self) -> &[Color; NCOLORS] {
        &self.0
    }

    /// The color tried at position `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NCOLORS`.
    pub fn get(&self, index: usize) -> Color {
        self.0[index]
    }

    /// The first color tried.
    pub fn first(&self) -> Color {
        self.0[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.0.contains(&color)
    }

    pub fn len(&self) -> usize {
        NCOLORS
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Red, Yellow, Blue, Green.
impl Default for Palette {
    fn default() -> Self {
        let mut colors = [Color::Red; NCOLORS];
        for (slot, color) in colors.iter_mut().zip(Color::iter()) {
            *slot = color;
        }
        Self(colors)
    }
}

/// Parses a comma separated list, e.g. `"Blue,Red,Green,Yellow"`.
impl FromStr for Palette {
    type Err = ColoringError;

    fn from_str(s: &str) -> Result<Self> {
        let names: Vec<&str> = s.split(',').collect();
        Self::from_names(&names)
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|c| c.to_string()).collect();
        write!(f, "{}", names.join(","))
    }
}
