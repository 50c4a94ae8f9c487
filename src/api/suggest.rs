//! Chart-type suggestion from column metadata.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::api::chart_config::{ChartConfig, ChartType};
use crate::core::types::{ColumnKind, ColumnType};

/// String-typed column-name cardinality at or below which the
/// single-numeric branch suggests a pie chart.
pub const PIE_CATEGORY_LIMIT: usize = 8;

/// Proposes a chart type plus axis bindings from column tags.
///
/// Always returns a structurally complete configuration; degenerate
/// inputs yield unbound (`None`) axes rather than errors. `columns` and
/// `headers` must be positionally aligned; on a length mismatch the
/// pairing stays positional, headers win for axis naming, and a warning
/// is emitted.
#[must_use]
pub fn suggest_chart_type(columns: &[ColumnType], headers: &[String]) -> ChartConfig {
    if columns.len() != headers.len() {
        warn!(
            columns = columns.len(),
            headers = headers.len(),
            "column metadata and headers are misaligned"
        );
    }

    let numeric = count_kind(columns, ColumnKind::Numeric);
    let strings = count_kind(columns, ColumnKind::String);
    let dates = count_kind(columns, ColumnKind::Date);

    let (chart_type, x_axis, y_axis, z_axis) = if numeric >= 3 {
        (
            ChartType::Scatter3d,
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 0)),
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 1)),
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 2)),
        )
    } else if numeric >= 2 {
        (
            ChartType::Scatter,
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 0)),
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 1)),
            None,
        )
    } else if numeric == 1 && strings >= 1 {
        // The cardinality check counts string-typed column names, not the
        // category values inside the chosen column.
        let chart_type = if distinct_string_column_names(columns) <= PIE_CATEGORY_LIMIT {
            ChartType::Pie
        } else {
            ChartType::Bar
        };
        (
            chart_type,
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::String, 0)),
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 0)),
            None,
        )
    } else if dates >= 1 && numeric >= 1 {
        (
            ChartType::Line,
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Date, 0)),
            axis_name(columns, headers, nth_column_of_kind(columns, ColumnKind::Numeric, 0)),
            None,
        )
    } else {
        (
            ChartType::Scatter,
            headers.first().cloned(),
            headers.get(1).or_else(|| headers.first()).cloned(),
            None,
        )
    };

    debug!(numeric, strings, dates, chart = ?chart_type, "suggested chart configuration");

    let mut config = ChartConfig::new(chart_type);
    config.x_axis = x_axis;
    config.y_axis = y_axis;
    config.z_axis = z_axis;
    config
}

/// Index of the n-th column of `kind` (zero-based occurrence), cascading
/// down to the closest earlier occurrence when fewer exist.
///
/// The cascade guarantees a binding whenever at least one column of the
/// kind exists, at the cost of reusing a column across axes.
#[must_use]
pub fn nth_column_of_kind(
    columns: &[ColumnType],
    kind: ColumnKind,
    occurrence: usize,
) -> Option<usize> {
    let matches: Vec<usize> = columns
        .iter()
        .enumerate()
        .filter(|(_, column)| column.kind == kind)
        .map(|(index, _)| index)
        .collect();

    match matches.len() {
        0 => None,
        len => Some(matches[occurrence.min(len - 1)]),
    }
}

fn count_kind(columns: &[ColumnType], kind: ColumnKind) -> usize {
    columns.iter().filter(|column| column.kind == kind).count()
}

fn distinct_string_column_names(columns: &[ColumnType]) -> usize {
    columns
        .iter()
        .filter(|column| column.kind == ColumnKind::String)
        .map(|column| column.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn axis_name(columns: &[ColumnType], headers: &[String], index: Option<usize>) -> Option<String> {
    let index = index?;
    headers
        .get(index)
        .cloned()
        .or_else(|| columns.get(index).map(|column| column.name.clone()))
}
