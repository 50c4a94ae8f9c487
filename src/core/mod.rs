pub mod coerce;
pub mod surface;
pub mod types;

pub use coerce::{coerce_cell, coerce_cell_loose, parse_date_str, process_rows, process_rows_loose};
pub use surface::{SurfaceGrid, build_surface_grid};
pub use types::{CellValue, ColumnKind, ColumnType, DataSample, ProcessedRow};
