pub mod chart_config;
pub mod layout;
pub mod prepare;
pub mod suggest;
pub mod theme;
pub mod trace;
pub mod trace_3d;

pub use chart_config::{ChartConfig, ChartOptions, ChartType, strip_gl_suffix};
pub use layout::{
    AxisLayout, CAMERA_LINE3D, CAMERA_MESH3D, CAMERA_SCATTER3D, CAMERA_SURFACE, Camera, Font,
    Layout, Margin, SURFACE_MARGIN, Scene, SceneAxis, Title, Vec3, camera_for,
};
pub use prepare::{ChartFigure, prepare_chart_data};
pub use suggest::{PIE_CATEGORY_LIMIT, nth_column_of_kind, suggest_chart_type};
pub use theme::{
    ColorResolver, NullColorResolver, ThemeContext, ThemeMode, scheme_colorscale,
    scheme_marker_color,
};
pub use trace::{
    ContourAxis, ContourProjection, DEFAULT_MARKER_SIZE, DENSE_MARKER_SIZE, LineStyle, Marker,
    SurfaceContours, Trace, WEBGL_ROW_THRESHOLD, ZData,
};
pub use trace_3d::{
    LINE3D_OPACITY, LINE3D_WIDTH, MARKER_OPACITY_3D, MARKER_OUTLINE_WIDTH, MESH3D_OPACITY,
};
