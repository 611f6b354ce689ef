use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Layout axis of the header strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    /// Arrow names for the (backward, forward) controls.
    pub fn arrow_names(&self) -> (&'static str, &'static str) {
        match self {
            Orientation::Horizontal => ("left", "right"),
            Orientation::Vertical => ("top", "bottom"),
        }
    }

    /// CSS padding shorthand reserving `px` at both ends of the axis.
    pub fn arrow_padding(&self, px: f64) -> String {
        match self {
            Orientation::Horizontal => format!("0 {px}px"),
            Orientation::Vertical => format!("{px}px 0"),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" => Ok(Orientation::Horizontal),
            "vertical" => Ok(Orientation::Vertical),
            _ => Err(format!("unknown orientation: {s}")),
        }
    }
}

/// Visual style of the strip. Only `Line` draws the active indicator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Card,
    Line,
    #[serde(alias = "noborder-card")]
    BorderlessCard,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Card => "card",
            Variant::Line => "line",
            Variant::BorderlessCard => "borderless-card",
        }
    }

    pub fn draws_indicator(&self) -> bool {
        matches!(self, Variant::Line)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "card" => Ok(Variant::Card),
            "line" => Ok(Variant::Line),
            "borderless-card" | "noborder-card" => Ok(Variant::BorderlessCard),
            _ => Err(format!("unknown variant: {s}")),
        }
    }
}

/// Header sizing. Purely visual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            _ => Err(format!("unknown size: {s}")),
        }
    }
}

/// Which arrow control was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollDirection {
    Backward,
    Forward,
}

impl ScrollDirection {
    /// Sign applied to the page increment.
    pub fn sign(&self) -> f64 {
        match self {
            ScrollDirection::Backward => -1.0,
            ScrollDirection::Forward => 1.0,
        }
    }

    /// Arrow name for this direction under the given orientation.
    pub fn arrow_name(&self, orientation: Orientation) -> &'static str {
        let (backward, forward) = orientation.arrow_names();
        match self {
            ScrollDirection::Backward => backward,
            ScrollDirection::Forward => forward,
        }
    }
}
