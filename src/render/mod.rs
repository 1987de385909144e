//! Contract with the external barcode renderer.
//!
//! Symbol encoding and drawing happen outside this crate. The pipeline only
//! builds a [`RenderRequest`] (payload plus concrete drawing options) and hands
//! it to a [`Renderer`] implementation.

use std::f64::consts::PI;
use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::models::{CornerDotShape, CornerSquareShape, DotShape, GradientMode, StyleOptions};

/// Margin around an embedded logo, in modules
pub const LOGO_MARGIN: u32 = 8;
/// Share of the symbol an embedded logo may cover
pub const LOGO_IMAGE_SIZE: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Png,
    Svg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn is_raster(self) -> bool {
        matches!(self, ExportFormat::Png)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Deterministic artifact name, e.g. `qr-code.png`
pub fn export_file_name(base_name: &str, format: ExportFormat) -> String {
    format!("{}.{}", base_name, format.extension())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub kind: GradientKind,
    /// Rotation in radians; linear gradients only
    pub rotation: Option<f64>,
    pub color_stops: Vec<ColorStop>,
}

/// Foreground paint shared by dots, corner squares and corner dots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    Solid(String),
    Gradient(Gradient),
}

impl Fill {
    pub fn from_style(style: &StyleOptions) -> Self {
        let stops = || {
            vec![
                ColorStop { offset: 0.0, color: style.foreground_color.clone() },
                ColorStop { offset: 1.0, color: style.secondary_color.clone() },
            ]
        };

        match style.gradient {
            GradientMode::None => Fill::Solid(style.foreground_color.clone()),
            GradientMode::Radial => Fill::Gradient(Gradient {
                kind: GradientKind::Radial,
                rotation: None,
                color_stops: stops(),
            }),
            GradientMode::DiagonalDown | GradientMode::DiagonalUp => {
                let degrees = style.gradient.rotation_degrees().unwrap_or_default();
                Fill::Gradient(Gradient {
                    kind: GradientKind::Linear,
                    rotation: Some(f64::from(degrees) * PI / 180.0),
                    color_stops: stops(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoOptions {
    pub data_uri: String,
    pub margin: u32,
    pub image_size: f64,
}

/// Everything the renderer needs to draw one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderRequest {
    pub data: String,
    pub width: u32,
    pub height: u32,
    pub dot_shape: DotShape,
    pub corner_square_shape: CornerSquareShape,
    pub corner_dot_shape: CornerDotShape,
    pub fill: Fill,
    pub background_color: String,
    pub logo: Option<LogoOptions>,
}

impl RenderRequest {
    /// Build a square request; an empty payload is replaced by `placeholder`
    pub fn new(payload: &str, style: &StyleOptions, size: u32, placeholder: &str) -> Self {
        let data = if payload.is_empty() { placeholder } else { payload };
        let logo = style.logo.as_ref().filter(|logo| !logo.is_empty()).map(|logo| LogoOptions {
            data_uri: logo.clone(),
            margin: LOGO_MARGIN,
            image_size: LOGO_IMAGE_SIZE,
        });

        Self {
            data: data.to_string(),
            width: size,
            height: size,
            dot_shape: style.dot_shape,
            corner_square_shape: style.corner_square_shape,
            corner_dot_shape: style.corner_dot_shape,
            fill: Fill::from_style(style),
            background_color: style.background_color.clone(),
            logo,
        }
    }

    /// Same drawing options at a different edge length
    pub fn resized(&self, size: u32) -> Self {
        Self { width: size, height: size, ..self.clone() }
    }
}

/// External barcode renderer
///
/// Implementations should supersede an in-flight draw rather than queue behind
/// it; the pipeline never serializes draw calls.
pub trait Renderer {
    /// (Re)draw the on-screen symbol
    fn draw(&mut self, request: &RenderRequest) -> Result<()>;

    /// Produce a downloadable artifact named `file_name`
    fn export(&mut self, request: &RenderRequest, format: ExportFormat, file_name: &str)
    -> Result<()>;
}
