use crate::color_utils::{parse_color, DEFAULT_FILL};
use crate::corner_size::{sanitize_extent, CornerSize};
use crate::error::G2Result;
use crate::path::Path;
use crate::shape::{LayoutDirection, RoundedCornerShape};
use crate::smoothness::{default_circle_fraction, CornerSmoothness, DEFAULT_EXTENDED_FRACTION};
use palette::Srgba;
use serde::{Deserialize, Serialize};

// Document defaults for the space around the box
/// Margin in pixels between the box and the edge of the output image
pub const DEFAULT_PADDING: f32 = 16.0;
pub const DEFAULT_BACKGROUND: &str = "#ffffff";

/// One corner as written in a document: `{"px": 24}` or `{"percent": 50}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CornerSizeSpec {
    Px(f32),
    Percent(i32),
}

impl From<CornerSizeSpec> for CornerSize {
    fn from(spec: CornerSizeSpec) -> Self {
        match spec {
            CornerSizeSpec::Px(px) => CornerSize::px(px),
            CornerSizeSpec::Percent(percent) => CornerSize::percent(percent),
        }
    }
}

/// Corner sizes keyed by logical position; `all` fills the ones left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CornersSpec {
    pub all: Option<CornerSizeSpec>,
    pub top_start: Option<CornerSizeSpec>,
    pub top_end: Option<CornerSizeSpec>,
    pub bottom_end: Option<CornerSizeSpec>,
    pub bottom_start: Option<CornerSizeSpec>,
}

impl CornersSpec {
    fn pick(&self, corner: Option<CornerSizeSpec>) -> CornerSize {
        corner.or(self.all).map(CornerSize::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothnessSpec {
    pub circle_fraction: f32,
    pub extended_fraction: f32,
}

impl Default for SmoothnessSpec {
    fn default() -> Self {
        Self {
            circle_fraction: default_circle_fraction(),
            extended_fraction: DEFAULT_EXTENDED_FRACTION,
        }
    }
}

impl From<SmoothnessSpec> for CornerSmoothness {
    fn from(spec: SmoothnessSpec) -> Self {
        CornerSmoothness::new(spec.circle_fraction, spec.extended_fraction)
    }
}

/// A single shape to render, as read from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeDocument {
    pub width: f32,
    pub height: f32,
    pub corners: CornersSpec,
    pub smoothness: SmoothnessSpec,
    pub direction: LayoutDirection,
    pub fill: String,
    pub background: String,
    pub baseline: bool,
    pub padding: f32,
}

impl Default for ShapeDocument {
    fn default() -> Self {
        Self {
            width: 240.0,
            height: 240.0,
            corners: CornersSpec::default(),
            smoothness: SmoothnessSpec::default(),
            direction: LayoutDirection::Ltr,
            fill: DEFAULT_FILL.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
            baseline: false,
            padding: DEFAULT_PADDING,
        }
    }
}

impl ShapeDocument {
    pub fn from_json_str(json: &str) -> G2Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &std::path::Path) -> G2Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> G2Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn width(&self) -> f32 {
        sanitize_extent(self.width)
    }

    pub fn height(&self) -> f32 {
        sanitize_extent(self.height)
    }

    pub fn padding(&self) -> f32 {
        sanitize_extent(self.padding)
    }

    pub fn shape(&self) -> RoundedCornerShape {
        let c = &self.corners;
        RoundedCornerShape::new(
            c.pick(c.top_start),
            c.pick(c.top_end),
            c.pick(c.bottom_end),
            c.pick(c.bottom_start),
            self.smoothness.into(),
        )
    }

    /// G2 outline in the box's local coordinates.
    pub fn path(&self) -> Path {
        self.shape().create_path(self.width(), self.height(), self.direction)
    }

    /// Radius of the conventional rounded rectangle drawn as the baseline overlay.
    pub fn baseline_radius(&self) -> f32 {
        self.shape()
            .resolve_radii(self.width(), self.height(), self.direction)
            .max_radius()
    }

    pub fn fill_color(&self) -> G2Result<Srgba<u8>> {
        parse_color(&self.fill)
    }

    pub fn background_color(&self) -> G2Result<Srgba<u8>> {
        parse_color(&self.background)
    }

    pub fn viewbox(&self) -> ViewBox {
        let padding = self.padding();
        ViewBox {
            min_x: -padding,
            min_y: -padding,
            width: self.width() + padding * 2.0,
            height: self.height() + padding * 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f32,
    pub min_y: f32,
    pub width: f32,
    pub height: f32,
}
