//! 3D trace builders: a shared base trace with per-type specialization,
//! and the surface grid path which replaces the base shape entirely.

use tracing::debug;

use crate::api::chart_config::{ChartConfig, ChartType};
use crate::api::theme::{ThemeContext, scheme_colorscale, scheme_marker_color};
use crate::api::trace::{
    ContourAxis, ContourProjection, LineStyle, Marker, SurfaceContours, Trace, ZData,
    column_values, resolve_marker_size,
};
use crate::core::surface::build_surface_grid;
use crate::core::types::{CellValue, ProcessedRow};

pub const MARKER_OPACITY_3D: f64 = 0.85;
pub const MARKER_OUTLINE_WIDTH: f64 = 0.5;
pub const MESH3D_OPACITY: f64 = 0.9;
pub const LINE3D_OPACITY: f64 = 0.95;
pub const LINE3D_WIDTH: f64 = 4.0;

pub(crate) fn build_trace_3d(
    config: &ChartConfig,
    rows: &[ProcessedRow],
    theme: &ThemeContext,
) -> Trace {
    let xs = column_values(rows, config.x_axis.as_deref());
    let ys = column_values(rows, config.y_axis.as_deref());
    let zs = match config.z_axis.as_deref() {
        Some(axis) => column_values(rows, Some(axis)),
        // No z binding: flat zero heights keep the trace renderable.
        None => vec![CellValue::Number(0.0); rows.len()],
    };

    if config.chart_type == ChartType::Surface {
        return build_surface_trace(config, &xs, &ys, &zs);
    }

    let color = scheme_marker_color(config.options.color_scheme.as_deref(), theme);
    let base = Trace {
        trace_type: Some("scatter3d".to_owned()),
        mode: Some("markers".to_owned()),
        x: Some(xs),
        y: Some(ys),
        z: Some(ZData::Column(zs)),
        marker: Some(Marker {
            size: Some(resolve_marker_size(config, rows.len())),
            color: Some(color.clone()),
            opacity: Some(MARKER_OPACITY_3D),
            line: Some(LineStyle {
                color: Some(theme.background.clone()),
                width: Some(MARKER_OUTLINE_WIDTH),
            }),
        }),
        ..Trace::default()
    };

    match config.chart_type {
        ChartType::Mesh3d => {
            let intensity = match &base.z {
                Some(ZData::Column(cells)) => cells
                    .iter()
                    .map(|cell| cell.as_number().unwrap_or(0.0))
                    .collect(),
                _ => Vec::new(),
            };
            Trace {
                trace_type: Some("mesh3d".to_owned()),
                mode: None,
                marker: None,
                intensity: Some(intensity),
                colorscale: Some(
                    scheme_colorscale(config.options.color_scheme.as_deref()).to_owned(),
                ),
                opacity: Some(MESH3D_OPACITY),
                delaunayaxis: Some("z".to_owned()),
                ..base
            }
        }
        // A 3D line ignores per-point marker styling entirely.
        ChartType::Line3d => Trace {
            mode: Some("lines".to_owned()),
            marker: None,
            line: Some(LineStyle {
                color: Some(color),
                width: Some(LINE3D_WIDTH),
            }),
            opacity: Some(LINE3D_OPACITY),
            ..base
        },
        _ => base,
    }
}

fn build_surface_trace(
    config: &ChartConfig,
    xs: &[CellValue],
    ys: &[CellValue],
    zs: &[CellValue],
) -> Trace {
    let grid = build_surface_grid(xs, ys, zs);
    debug!(
        cols = grid.xs.len(),
        rows = grid.ys.len(),
        "assembled surface grid"
    );

    Trace {
        trace_type: Some("surface".to_owned()),
        x: Some(grid.xs.into_iter().map(CellValue::Number).collect()),
        y: Some(grid.ys.into_iter().map(CellValue::Number).collect()),
        z: Some(ZData::Grid(grid.z)),
        colorscale: Some(scheme_colorscale(config.options.color_scheme.as_deref()).to_owned()),
        contours: Some(SurfaceContours {
            z: ContourAxis {
                show: true,
                usecolormap: true,
                project: ContourProjection { z: true },
            },
        }),
        ..Trace::default()
    }
}
