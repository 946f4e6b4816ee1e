//! Configuration for grid resolution

use serde::Deserialize;

/// Per-side margin in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    /// Same margin on all four sides
    pub fn uniform(all: f64) -> Self {
        Self {
            top: all,
            right: all,
            bottom: all,
            left: all,
        }
    }

    /// Vertical (top/bottom) and horizontal (right/left) margins
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Explicit top, right, bottom, left margins
    pub fn trbl(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// CSS-shorthand slice: `[all]`, `[vertical, horizontal]`, or
    /// `[top, right, bottom, left]`
    ///
    /// Returns None for any other length.
    pub fn from_shorthand(values: &[f64]) -> Option<Self> {
        match values {
            [all] => Some(Self::uniform(*all)),
            [v, h] => Some(Self::symmetric(*v, *h)),
            [t, r, b, l] => Some(Self::trbl(*t, *r, *b, *l)),
            _ => None,
        }
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl From<f64> for Margin {
    fn from(all: f64) -> Self {
        Self::uniform(all)
    }
}

// TOML/JSON side: `margin = 20` or `margin = [10, 20]` or `margin = [1, 2, 3, 4]`
#[derive(Deserialize)]
#[serde(untagged)]
enum MarginShorthand {
    Uniform(f64),
    Sides(Vec<f64>),
}

impl<'de> Deserialize<'de> for Margin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match MarginShorthand::deserialize(deserializer)? {
            MarginShorthand::Uniform(all) => Ok(Margin::uniform(all)),
            MarginShorthand::Sides(values) => {
                Margin::from_shorthand(&values).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "margin shorthand takes 1, 2, or 4 values, got {}",
                        values.len()
                    ))
                })
            }
        }
    }
}

/// Container size and margin for one grid resolution
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GridConfig {
    /// Container width in pixels
    pub width: f64,
    /// Container height in pixels
    pub height: f64,
    /// Margin between the container edge and the grid interior
    #[serde(default)]
    pub margin: Margin,
}

impl GridConfig {
    /// Create a configuration with no margin
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    /// Set the margin
    pub fn with_margin(mut self, margin: impl Into<Margin>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Interior width after subtracting margins, clamped at zero
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.horizontal()).max(0.0)
    }

    /// Interior height after subtracting margins, clamped at zero
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.vertical()).max(0.0)
    }
}
