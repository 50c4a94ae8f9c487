//! plotprep-rs: chart-type suggestion and renderer-ready trace/layout
//! preparation for tabular datasets of mixed column types.
//!
//! The crate is a pure data-shaping layer: upstream collaborators supply
//! headers, raw rows, and externally inferred column tags; the output is
//! a Plotly-dialect figure the rendering host consumes as-is.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{
    ChartConfig, ChartFigure, ChartOptions, ChartType, ColorResolver, ThemeContext, ThemeMode,
    prepare_chart_data, suggest_chart_type,
};
pub use core::{CellValue, ColumnKind, ColumnType, DataSample};
pub use error::{ChartError, ChartResult};
