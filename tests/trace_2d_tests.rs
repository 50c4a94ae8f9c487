use plotprep_rs::api::{
    ChartConfig, ChartType, DEFAULT_MARKER_SIZE, DENSE_MARKER_SIZE, ThemeContext, ThemeMode,
    prepare_chart_data, strip_gl_suffix,
};
use plotprep_rs::core::{CellValue, ColumnKind, ColumnType, DataSample};

fn numeric_sample(rows: usize) -> DataSample {
    let data = (0..rows)
        .map(|index| {
            vec![
                CellValue::Number(index as f64),
                CellValue::Number(index as f64 * 2.0),
            ]
        })
        .collect();
    DataSample::new(vec!["x".to_owned(), "y".to_owned()], data).with_column_types(vec![
        ColumnType::new("x", ColumnKind::Numeric),
        ColumnType::new("y", ColumnKind::Numeric),
    ])
}

fn xy_config(chart_type: ChartType) -> ChartConfig {
    ChartConfig::new(chart_type)
        .with_x_axis("x")
        .with_y_axis("y")
}

fn light_theme() -> ThemeContext {
    ThemeContext::with_defaults(ThemeMode::Light)
}

#[test]
fn scatter_at_the_threshold_keeps_the_plain_renderer_type() {
    let figure = prepare_chart_data(&xy_config(ChartType::Scatter), &numeric_sample(1000), &light_theme());
    assert_eq!(figure.data[0].trace_type.as_deref(), Some("scatter"));
}

#[test]
fn scatter_past_the_threshold_switches_to_webgl() {
    let figure = prepare_chart_data(&xy_config(ChartType::Scatter), &numeric_sample(1001), &light_theme());
    assert_eq!(figure.data[0].trace_type.as_deref(), Some("scattergl"));
}

#[test]
fn line_charts_never_switch_to_webgl() {
    let figure = prepare_chart_data(&xy_config(ChartType::Line), &numeric_sample(1001), &light_theme());
    let trace = &figure.data[0];
    assert_eq!(trace.trace_type.as_deref(), Some("scatter"));
    assert_eq!(trace.mode.as_deref(), Some("lines+markers"));
}

#[test]
fn bar_traces_draw_without_a_point_mode() {
    let figure = prepare_chart_data(&xy_config(ChartType::Bar), &numeric_sample(5), &light_theme());
    let trace = &figure.data[0];
    assert_eq!(trace.trace_type.as_deref(), Some("bar"));
    assert_eq!(trace.mode, None);
    assert_eq!(trace.x.as_ref().expect("x").len(), 5);
    assert_eq!(trace.y.as_ref().expect("y").len(), 5);
}

#[test]
fn pie_traces_map_axis_columns_to_labels_and_values() {
    let sample = DataSample::new(
        vec!["slice".to_owned(), "share".to_owned()],
        vec![
            vec![CellValue::from("a"), CellValue::Number(30.0)],
            vec![CellValue::from("b"), CellValue::Number(70.0)],
        ],
    )
    .with_column_types(vec![
        ColumnType::new("slice", ColumnKind::String),
        ColumnType::new("share", ColumnKind::Numeric),
    ]);
    let config = ChartConfig::new(ChartType::Pie)
        .with_x_axis("slice")
        .with_y_axis("share");

    let figure = prepare_chart_data(&config, &sample, &light_theme());
    let trace = &figure.data[0];
    assert_eq!(trace.trace_type.as_deref(), Some("pie"));
    assert_eq!(
        trace.labels.as_ref().expect("labels"),
        &[CellValue::from("a"), CellValue::from("b")]
    );
    assert_eq!(
        trace.values.as_ref().expect("values"),
        &[CellValue::Number(30.0), CellValue::Number(70.0)]
    );
    assert_eq!(trace.x, None);
    assert_eq!(trace.y, None);
}

#[test]
fn marker_size_defaults_shrink_past_the_threshold() {
    let small = prepare_chart_data(&xy_config(ChartType::Scatter), &numeric_sample(10), &light_theme());
    let marker = small.data[0].marker.as_ref().expect("marker");
    assert_eq!(marker.size, Some(DEFAULT_MARKER_SIZE));

    let large = prepare_chart_data(&xy_config(ChartType::Scatter), &numeric_sample(1500), &light_theme());
    let marker = large.data[0].marker.as_ref().expect("marker");
    assert_eq!(marker.size, Some(DENSE_MARKER_SIZE));
}

#[test]
fn explicit_marker_size_overrides_the_row_count_default() {
    let config = xy_config(ChartType::Scatter).with_marker_size(12.0);
    let figure = prepare_chart_data(&config, &numeric_sample(1500), &light_theme());
    let marker = figure.data[0].marker.as_ref().expect("marker");
    assert_eq!(marker.size, Some(12.0));
}

#[test]
fn named_schemes_resolve_to_fixed_marker_colors() {
    let config = xy_config(ChartType::Scatter).with_color_scheme("viridis");
    let figure = prepare_chart_data(&config, &numeric_sample(3), &light_theme());
    let marker = figure.data[0].marker.as_ref().expect("marker");
    assert_eq!(marker.color.as_deref(), Some("#21918c"));
}

#[test]
fn unknown_schemes_fall_back_to_the_theme_default() {
    let config = xy_config(ChartType::Scatter).with_color_scheme("sunburst");
    let light = prepare_chart_data(&config, &numeric_sample(3), &light_theme());
    let dark = prepare_chart_data(
        &config,
        &numeric_sample(3),
        &ThemeContext::with_defaults(ThemeMode::Dark),
    );

    let light_color = light.data[0].marker.as_ref().expect("marker").color.clone();
    let dark_color = dark.data[0].marker.as_ref().expect("marker").color.clone();
    assert!(light_color.is_some());
    assert_ne!(light_color, dark_color);
}

#[test]
fn unbound_columns_propagate_as_nulls() {
    let config = ChartConfig::new(ChartType::Scatter)
        .with_x_axis("x")
        .with_y_axis("missing");
    let figure = prepare_chart_data(&config, &numeric_sample(3), &light_theme());
    let ys = figure.data[0].y.as_ref().expect("y");
    assert!(ys.iter().all(CellValue::is_null));
}

#[test]
fn gl_suffix_strips_back_to_the_base_type() {
    assert_eq!(strip_gl_suffix("scattergl"), "scatter");
    assert_eq!(strip_gl_suffix("scatter"), "scatter");
    assert_eq!(strip_gl_suffix("mesh3d"), "mesh3d");
}
