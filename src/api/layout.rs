//! Layout and 3D scene construction.

use serde::{Deserialize, Serialize};

use crate::api::chart_config::{ChartConfig, ChartType};
use crate::api::theme::ThemeContext;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autosize: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<AxisLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dragmode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AxisLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zerolinecolor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub xaxis: SceneAxis,
    pub yaxis: SceneAxis,
    pub zaxis: SceneAxis,
    pub camera: Camera,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAxis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    pub gridcolor: String,
    pub backgroundcolor: String,
    pub showbackground: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

const CAMERA_CENTER: Vec3 = Vec3::new(0.0, 0.0, 0.0);
const CAMERA_UP: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// Fixed camera presets; the surface preset sits farther out for an
/// orbit-friendly first frame.
pub const CAMERA_SCATTER3D: Camera = Camera {
    eye: Vec3::new(1.5, 1.5, 1.3),
    center: CAMERA_CENTER,
    up: CAMERA_UP,
};
pub const CAMERA_MESH3D: Camera = Camera {
    eye: Vec3::new(1.6, 1.4, 1.2),
    center: CAMERA_CENTER,
    up: CAMERA_UP,
};
pub const CAMERA_LINE3D: Camera = Camera {
    eye: Vec3::new(1.4, 1.6, 1.2),
    center: CAMERA_CENTER,
    up: CAMERA_UP,
};
pub const CAMERA_SURFACE: Camera = Camera {
    eye: Vec3::new(2.1, 2.1, 1.5),
    center: CAMERA_CENTER,
    up: CAMERA_UP,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub l: f64,
    pub r: f64,
    pub t: f64,
    pub b: f64,
}

/// Tight margins used by the surface layout.
pub const SURFACE_MARGIN: Margin = Margin {
    l: 0.0,
    r: 0.0,
    t: 40.0,
    b: 0.0,
};

pub(crate) fn build_layout(config: &ChartConfig, theme: &ThemeContext) -> Layout {
    let title_text = [
        config.x_axis.as_deref(),
        config.y_axis.as_deref(),
        config.z_axis.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" vs ");

    let mut layout = Layout {
        title: (!title_text.is_empty()).then(|| Title::new(title_text)),
        paper_bgcolor: Some(theme.background.clone()),
        plot_bgcolor: Some(theme.background.clone()),
        font: Some(Font {
            color: theme.foreground.clone(),
        }),
        showlegend: Some(config.options.show_legend),
        autosize: Some(true),
        ..Layout::default()
    };

    if config.chart_type.is_three_dimensional() {
        layout.scene = Some(build_scene(config, theme));
        if config.chart_type == ChartType::Surface {
            layout.dragmode = Some("orbit".to_owned());
            layout.margin = Some(SURFACE_MARGIN);
        }
    } else {
        layout.xaxis = Some(axis_layout(config.x_axis.as_deref(), theme));
        layout.yaxis = Some(axis_layout(config.y_axis.as_deref(), theme));
    }

    layout
}

fn axis_layout(axis: Option<&str>, theme: &ThemeContext) -> AxisLayout {
    AxisLayout {
        title: axis.map(Title::new),
        gridcolor: Some(theme.grid.clone()),
        zerolinecolor: Some(theme.grid.clone()),
    }
}

fn build_scene(config: &ChartConfig, theme: &ThemeContext) -> Scene {
    let axis = |name: Option<&str>| SceneAxis {
        title: name.map(Title::new),
        gridcolor: theme.grid.clone(),
        backgroundcolor: theme.background.clone(),
        showbackground: true,
    };

    Scene {
        xaxis: axis(config.x_axis.as_deref()),
        yaxis: axis(config.y_axis.as_deref()),
        zaxis: axis(config.z_axis.as_deref()),
        camera: camera_for(config.chart_type),
    }
}

/// Camera preset for a 3D chart type; non-3D types take the scatter3d
/// preset if they ever reach scene construction.
#[must_use]
pub fn camera_for(chart_type: ChartType) -> Camera {
    match chart_type {
        ChartType::Surface => CAMERA_SURFACE,
        ChartType::Mesh3d => CAMERA_MESH3D,
        ChartType::Line3d => CAMERA_LINE3D,
        _ => CAMERA_SCATTER3D,
    }
}
