//! Renderer trace contract and 2D trace builders.
//!
//! Field names follow the Plotly trace dialect since the downstream
//! renderer is fixed. Every field is optional and skipped when unset so
//! a neutral trace serializes to `{}`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::chart_config::{ChartConfig, ChartType, strip_gl_suffix};
use crate::api::theme::{ThemeContext, scheme_marker_color};
use crate::core::types::{CellValue, ProcessedRow};

/// Row count past which an exact `scatter` chart switches to the WebGL
/// renderer type.
pub const WEBGL_ROW_THRESHOLD: usize = 1000;

/// Default marker size, and the denser default past the WebGL threshold.
pub const DEFAULT_MARKER_SIZE: f64 = 8.0;
pub const DENSE_MARKER_SIZE: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Trace {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub trace_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<ZData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<CellValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delaunayaxis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contours: Option<SurfaceContours>,
}

impl Trace {
    /// Neutral trace for "no data" states; serializes to `{}`.
    #[must_use]
    pub fn neutral() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self == &Self::default()
    }
}

/// Either a per-row z column or a surface height grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ZData {
    Column(Vec<CellValue>),
    Grid(Vec<Vec<f64>>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
}

/// Surface contour projection config (`contours.z` in the renderer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceContours {
    pub z: ContourAxis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourAxis {
    pub show: bool,
    pub usecolormap: bool,
    pub project: ContourProjection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContourProjection {
    pub z: bool,
}

/// Column values across rows; absent columns and unbound axes propagate
/// as nulls, mirroring how the renderer tolerates sparse points.
#[must_use]
pub(crate) fn column_values(rows: &[ProcessedRow], axis: Option<&str>) -> Vec<CellValue> {
    rows.iter()
        .map(|row| {
            axis.and_then(|name| row.get(name))
                .cloned()
                .unwrap_or(CellValue::Null)
        })
        .collect()
}

#[must_use]
pub(crate) fn resolve_marker_size(config: &ChartConfig, row_count: usize) -> f64 {
    config.options.marker_size.unwrap_or(if row_count > WEBGL_ROW_THRESHOLD {
        DENSE_MARKER_SIZE
    } else {
        DEFAULT_MARKER_SIZE
    })
}

pub(crate) fn build_trace_2d(
    config: &ChartConfig,
    rows: &[ProcessedRow],
    theme: &ThemeContext,
) -> Trace {
    let xs = column_values(rows, config.x_axis.as_deref());
    let ys = column_values(rows, config.y_axis.as_deref());
    let color = scheme_marker_color(config.options.color_scheme.as_deref(), theme);
    let marker_size = resolve_marker_size(config, rows.len());

    match config.chart_type {
        ChartType::Pie => Trace {
            trace_type: Some("pie".to_owned()),
            labels: Some(xs),
            values: Some(ys),
            marker: Some(Marker {
                color: Some(color),
                ..Marker::default()
            }),
            ..Trace::default()
        },
        ChartType::Bar => Trace {
            trace_type: Some("bar".to_owned()),
            x: Some(xs),
            y: Some(ys),
            marker: Some(Marker {
                color: Some(color),
                ..Marker::default()
            }),
            ..Trace::default()
        },
        ChartType::Line => Trace {
            trace_type: Some("scatter".to_owned()),
            mode: Some("lines+markers".to_owned()),
            x: Some(xs),
            y: Some(ys),
            marker: Some(Marker {
                size: Some(marker_size),
                color: Some(color.clone()),
                ..Marker::default()
            }),
            line: Some(LineStyle {
                color: Some(color),
                width: Some(2.0),
            }),
            ..Trace::default()
        },
        other => {
            let mut trace_type = strip_gl_suffix(other.as_str()).to_owned();
            if other == ChartType::Scatter && rows.len() > WEBGL_ROW_THRESHOLD {
                debug!(rows = rows.len(), "switching scatter trace to the webgl renderer type");
                trace_type = "scattergl".to_owned();
            }
            Trace {
                trace_type: Some(trace_type),
                mode: Some("markers".to_owned()),
                x: Some(xs),
                y: Some(ys),
                marker: Some(Marker {
                    size: Some(marker_size),
                    color: Some(color),
                    ..Marker::default()
                }),
                ..Trace::default()
            }
        }
    }
}
