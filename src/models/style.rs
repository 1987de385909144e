use serde::{Deserialize, Serialize};

/// Swatches offered by the color pickers
pub const PRESET_COLORS: [&str; 8] =
    ["#000000", "#FFFFFF", "#1E40AF", "#DC2626", "#16A34A", "#7C3AED", "#EA580C", "#0891B2"];

/// How the foreground is filled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GradientMode {
    #[default]
    None,
    Radial,
    #[serde(alias = "linear-bl-tr")]
    DiagonalDown,
    #[serde(alias = "linear-tl-br")]
    DiagonalUp,
}

impl GradientMode {
    pub const ALL: [GradientMode; 4] =
        [GradientMode::None, GradientMode::DiagonalDown, GradientMode::DiagonalUp, GradientMode::Radial];

    pub fn label(self) -> &'static str {
        match self {
            GradientMode::None => "Solid",
            GradientMode::Radial => "Radial",
            GradientMode::DiagonalDown => "Diagonal (45°)",
            GradientMode::DiagonalUp => "Diagonal (135°)",
        }
    }

    /// Rotation of a linear gradient in degrees
    pub fn rotation_degrees(self) -> Option<u16> {
        match self {
            GradientMode::DiagonalDown => Some(45),
            GradientMode::DiagonalUp => Some(135),
            GradientMode::None | GradientMode::Radial => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DotShape {
    #[default]
    Square,
    Rounded,
    Dots,
    Classy,
    ClassyRounded,
    ExtraRounded,
}

impl DotShape {
    pub const ALL: [DotShape; 6] = [
        DotShape::Square,
        DotShape::Rounded,
        DotShape::Dots,
        DotShape::Classy,
        DotShape::ClassyRounded,
        DotShape::ExtraRounded,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DotShape::Square => "Square",
            DotShape::Rounded => "Rounded",
            DotShape::Dots => "Dots",
            DotShape::Classy => "Classy",
            DotShape::ClassyRounded => "Classy Rounded",
            DotShape::ExtraRounded => "Extra Rounded",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerSquareShape {
    #[default]
    Square,
    Dot,
    ExtraRounded,
}

impl CornerSquareShape {
    pub const ALL: [CornerSquareShape; 3] =
        [CornerSquareShape::Square, CornerSquareShape::Dot, CornerSquareShape::ExtraRounded];

    pub fn label(self) -> &'static str {
        match self {
            CornerSquareShape::Square => "Square",
            CornerSquareShape::Dot => "Dot",
            CornerSquareShape::ExtraRounded => "Rounded",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerDotShape {
    #[default]
    Square,
    Dot,
}

impl CornerDotShape {
    pub const ALL: [CornerDotShape; 2] = [CornerDotShape::Square, CornerDotShape::Dot];

    pub fn label(self) -> &'static str {
        match self {
            CornerDotShape::Square => "Square",
            CornerDotShape::Dot => "Dot",
        }
    }
}

/// Visual styling applied by the renderer
///
/// Colors are free-form strings. The pickers validate them loosely; nothing
/// here rejects a malformed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleOptions {
    pub foreground_color: String,
    /// Second gradient stop, ignored while `gradient` is `None`
    #[serde(rename = "foregroundColor2")]
    pub secondary_color: String,
    #[serde(rename = "gradientType")]
    pub gradient: GradientMode,
    pub background_color: String,
    #[serde(rename = "dotType")]
    pub dot_shape: DotShape,
    #[serde(rename = "cornerSquareType")]
    pub corner_square_shape: CornerSquareShape,
    #[serde(rename = "cornerDotType")]
    pub corner_dot_shape: CornerDotShape,
    /// Embedded logo as a `data:` URI
    pub logo: Option<String>,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            foreground_color: "#000000".to_string(),
            secondary_color: "#7C3AED".to_string(),
            gradient: GradientMode::None,
            background_color: "#FFFFFF".to_string(),
            dot_shape: DotShape::Square,
            corner_square_shape: CornerSquareShape::Square,
            corner_dot_shape: CornerDotShape::Square,
            logo: None,
        }
    }
}

impl StyleOptions {
    /// CSS background for a small swatch previewing the foreground fill
    pub fn swatch_css(&self) -> String {
        let (from, to) = (&self.foreground_color, &self.secondary_color);
        match self.gradient {
            GradientMode::None => format!("background-color: {}", from),
            GradientMode::Radial => {
                format!("background: radial-gradient(circle, {} 0%, {} 100%)", from, to)
            }
            GradientMode::DiagonalDown | GradientMode::DiagonalUp => {
                let degrees = self.gradient.rotation_degrees().unwrap_or_default();
                format!("background: linear-gradient({}deg, {} 0%, {} 100%)", degrees, from, to)
            }
        }
    }

    pub fn has_logo(&self) -> bool {
        self.logo.as_deref().is_some_and(|logo| !logo.is_empty())
    }
}
