//! Preparation entry point: raw sample plus config into a renderer-ready
//! figure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::chart_config::ChartConfig;
use crate::api::layout::{Layout, build_layout};
use crate::api::theme::ThemeContext;
use crate::api::trace::{Trace, build_trace_2d};
use crate::api::trace_3d::build_trace_3d;
use crate::core::coerce::{process_rows, process_rows_loose};
use crate::core::types::DataSample;
use crate::error::{ChartError, ChartResult};

/// Renderer handoff payload: one trace plus its layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFigure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl ChartFigure {
    /// Serializes the figure to pretty JSON for the rendering host or for
    /// persistence alongside a saved analysis.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize figure: {e}")))
    }

    /// Deserializes a figure from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse figure: {e}")))
    }
}

/// Shapes raw rows into a renderer-ready trace and layout.
///
/// Pure over its inputs: identical arguments produce deep-equal figures.
/// Zero rows or a missing x/y binding yields a neutral trace so the host
/// can render a "no data" placeholder; the layout is still built.
#[must_use]
pub fn prepare_chart_data(
    config: &ChartConfig,
    sample: &DataSample,
    theme: &ThemeContext,
) -> ChartFigure {
    let layout = build_layout(config, theme);

    if sample.rows.is_empty() || config.x_axis.is_none() || config.y_axis.is_none() {
        debug!(
            rows = sample.rows.len(),
            chart = ?config.chart_type,
            "nothing to plot, emitting neutral trace"
        );
        return ChartFigure {
            data: vec![Trace::neutral()],
            layout,
        };
    }

    let processed = match &sample.column_types {
        Some(columns) => process_rows(columns, &sample.rows),
        // Saved analyses replay without column tags.
        None => process_rows_loose(&sample.headers, &sample.rows),
    };

    let trace = if config.chart_type.is_three_dimensional() {
        build_trace_3d(config, &processed, theme)
    } else {
        build_trace_2d(config, &processed, theme)
    };

    debug!(
        rows = processed.len(),
        chart = ?config.chart_type,
        "prepared chart figure"
    );

    ChartFigure {
        data: vec![trace],
        layout,
    }
}
