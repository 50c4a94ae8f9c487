use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Renderable chart kinds, 2D and 3D.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    /// Accepts the GPU-suffixed saved value and normalizes it on load.
    #[serde(alias = "scattergl")]
    Scatter,
    Bar,
    Line,
    Pie,
    Scatter3d,
    Surface,
    Mesh3d,
    Line3d,
}

impl ChartType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scatter => "scatter",
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
            Self::Scatter3d => "scatter3d",
            Self::Surface => "surface",
            Self::Mesh3d => "mesh3d",
            Self::Line3d => "line3d",
        }
    }

    #[must_use]
    pub fn is_three_dimensional(self) -> bool {
        matches!(
            self,
            Self::Scatter3d | Self::Surface | Self::Mesh3d | Self::Line3d
        )
    }
}

/// Strips the WebGL acceleration suffix from a renderer trace type so an
/// accelerated variant name types its base trace.
#[must_use]
pub fn strip_gl_suffix(trace_type: &str) -> &str {
    trace_type.strip_suffix("gl").unwrap_or(trace_type)
}

/// Free-form styling options attached to a chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    #[serde(default)]
    pub color_scheme: Option<String>,
    #[serde(default)]
    pub marker_size: Option<f64>,
    #[serde(default = "default_show_legend")]
    pub show_legend: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            color_scheme: None,
            marker_size: None,
            show_legend: default_show_legend(),
        }
    }
}

fn default_show_legend() -> bool {
    true
}

/// Chart selection plus axis bindings, produced by suggestion or host
/// edits and consumed read-only by preparation.
///
/// This type is serializable so hosts can persist and reload saved
/// analyses without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub chart_type: ChartType,
    #[serde(default)]
    pub x_axis: Option<String>,
    #[serde(default)]
    pub y_axis: Option<String>,
    #[serde(default)]
    pub z_axis: Option<String>,
    #[serde(default)]
    pub options: ChartOptions,
}

impl ChartConfig {
    #[must_use]
    pub fn new(chart_type: ChartType) -> Self {
        Self {
            chart_type,
            x_axis: None,
            y_axis: None,
            z_axis: None,
            options: ChartOptions::default(),
        }
    }

    /// Binds the x axis to a column name.
    #[must_use]
    pub fn with_x_axis(mut self, axis: impl Into<String>) -> Self {
        self.x_axis = Some(axis.into());
        self
    }

    /// Binds the y axis to a column name.
    #[must_use]
    pub fn with_y_axis(mut self, axis: impl Into<String>) -> Self {
        self.y_axis = Some(axis.into());
        self
    }

    /// Binds the z axis to a column name.
    #[must_use]
    pub fn with_z_axis(mut self, axis: impl Into<String>) -> Self {
        self.z_axis = Some(axis.into());
        self
    }

    /// Sets the named color scheme.
    #[must_use]
    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.options.color_scheme = Some(scheme.into());
        self
    }

    /// Sets an explicit marker size, overriding the row-count default.
    #[must_use]
    pub fn with_marker_size(mut self, size: f64) -> Self {
        self.options.marker_size = Some(size);
        self
    }

    /// Sets legend visibility.
    #[must_use]
    pub fn with_show_legend(mut self, show: bool) -> Self {
        self.options.show_legend = show;
        self
    }

    /// Serializes config to pretty JSON for saved analyses.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}
