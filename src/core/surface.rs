//! Surface-grid assembly from scattered (x, y, z) samples.

use std::collections::{BTreeMap, BTreeSet};

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::types::CellValue;

/// Rectangular z-height grid over the distinct x/y values of a sample.
///
/// `z[row][col]` is the height at (`ys[row]`, `xs[col]`). Combinations
/// absent from the input default to zero so the surface mesh stays gap
/// free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub z: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() || self.ys.is_empty()
    }
}

/// Builds the grid from positionally aligned x/y/z columns.
///
/// Distinct axis values are exact-match keys sorted ascending; near
/// duplicate floats stay separate grid lines. Only rows with numeric x
/// and y and a non-null numeric z populate cells.
#[must_use]
pub fn build_surface_grid(xs: &[CellValue], ys: &[CellValue], zs: &[CellValue]) -> SurfaceGrid {
    let mut distinct_x: BTreeSet<OrderedFloat<f64>> = BTreeSet::new();
    let mut distinct_y: BTreeSet<OrderedFloat<f64>> = BTreeSet::new();

    for value in xs {
        if let Some(number) = value.as_number() {
            distinct_x.insert(OrderedFloat(number));
        }
    }
    for value in ys {
        if let Some(number) = value.as_number() {
            distinct_y.insert(OrderedFloat(number));
        }
    }

    let x_index: BTreeMap<OrderedFloat<f64>, usize> = distinct_x
        .iter()
        .enumerate()
        .map(|(index, value)| (*value, index))
        .collect();
    let y_index: BTreeMap<OrderedFloat<f64>, usize> = distinct_y
        .iter()
        .enumerate()
        .map(|(index, value)| (*value, index))
        .collect();

    let mut grid: Vec<Vec<Option<f64>>> = vec![vec![None; x_index.len()]; y_index.len()];

    for ((x, y), z) in xs.iter().zip(ys).zip(zs) {
        let (Some(x), Some(y)) = (x.as_number(), y.as_number()) else {
            continue;
        };
        if z.is_null() {
            continue;
        }
        let Some(z) = z.as_number() else {
            continue;
        };
        let (Some(col), Some(row)) = (
            x_index.get(&OrderedFloat(x)),
            y_index.get(&OrderedFloat(y)),
        ) else {
            continue;
        };
        grid[*row][*col] = Some(z);
    }

    SurfaceGrid {
        xs: distinct_x.into_iter().map(OrderedFloat::into_inner).collect(),
        ys: distinct_y.into_iter().map(OrderedFloat::into_inner).collect(),
        z: grid
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.unwrap_or(0.0)).collect())
            .collect(),
    }
}
