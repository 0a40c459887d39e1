use corrgrid::{
    CellIndex, CorrelationMatrix, FontSpec, GridTheme, HeuristicTextMeasurer, Hit, Rgba, RowType,
    TextMeasurer,
};
use corrgrid::tooltip::tooltip_text;
use corrgrid::utils::{abbreviate, abbreviate_to_width, format_correlation_value};

#[test]
fn interpolation_mixes_channels_proportionally() {
    let proportion = 0.7;
    let result = Rgba::BLACK.interpolate(Rgba::WHITE, proportion);
    let expected = 255.0 - 255.0 * proportion;
    assert!((f64::from(result.r) - expected).abs() <= 1.0);
    assert!((f64::from(result.g) - expected).abs() <= 1.0);
    assert!((f64::from(result.b) - expected).abs() <= 1.0);
}

#[test]
fn interpolating_a_color_with_itself_is_identity() {
    let color = Rgba::new(0x12, 0x84, 0xf0, 0x40);
    for proportion in [0.0, 0.1, 0.33, 0.5, 0.77, 1.0] {
        assert_eq!(color.interpolate(color, proportion), color);
    }
}

#[test]
fn hex_colors_round_trip() {
    let color = Rgba::parse_hex("#10ab30").unwrap();
    assert_eq!(color, Rgba::opaque(0x10, 0xab, 0x30));
    assert_eq!(Rgba::parse_hex("#10ab3080").unwrap().a, 0x80);
    assert_eq!(color.to_string(), "#10ab30ff");
    assert!(Rgba::parse_hex("#12345").is_err());
    assert!(Rgba::parse_hex("not-a-color").is_err());
}

#[test]
fn opaque_highlight_colors_are_rejected() {
    let mut theme = GridTheme::default();
    assert!(theme.set_highlight_color(Rgba::opaque(10, 20, 30)).is_err());
    assert!(theme
        .set_highlight_color(Rgba::new(10, 20, 30, 128))
        .is_ok());
    assert_eq!(theme.highlight_color(), Rgba::new(10, 20, 30, 128));
}

#[test]
fn theme_loads_from_json_and_revalidates() {
    let theme = GridTheme::default();
    let json = serde_json::to_string(&theme).unwrap();
    assert_eq!(GridTheme::from_json(&json).unwrap(), theme);

    // A hand-edited opaque highlight must not sneak past the setter contract.
    assert!(GridTheme::from_json(r##"{"highlight_color": "#ffffffff"}"##).is_err());
    // Partial configs fall back to defaults for everything else.
    let partial = GridTheme::from_json(r##"{"zoom_length": 7}"##).unwrap();
    assert_eq!(partial.zoom_length, 7);
    assert_eq!(partial.decimal_places, 4);
}

#[test]
fn abbreviation_caps_length_and_is_idempotent() {
    let source = "A".repeat(100);
    let abbreviated = abbreviate(&source, 64);
    assert_eq!(abbreviated.chars().count(), 64);
    assert!(abbreviated.ends_with("..."));
    assert_eq!(&abbreviated[..61], &source[..61]);

    assert_eq!(abbreviate(&abbreviated, 64), abbreviated);
    assert_eq!(abbreviate("short", 64), "short");
}

#[test]
fn pixel_budget_abbreviation_uses_text_hit_testing() {
    let measurer = HeuristicTextMeasurer::default();
    let font = FontSpec::new("sans-serif", 10.0);
    let advance = 6.0; // 10px font, 0.6 advance factor

    let label = "A".repeat(50);
    let fitted = abbreviate_to_width(&label, &font, advance * 20.0, &measurer);
    assert!(fitted.ends_with("..."));
    assert!(measurer.width(&font, &fitted) <= advance * 20.0);
    assert_eq!(fitted.chars().count(), 20);

    // A label already inside the budget is untouched.
    assert_eq!(abbreviate_to_width("tiny", &font, 1000.0, &measurer), "tiny");
}

#[test]
fn correlation_values_format_with_configured_places() {
    assert_eq!(format_correlation_value(1.0, 4), "1.0000");
    assert_eq!(format_correlation_value(-0.25, 4), "-0.2500");
    assert_eq!(format_correlation_value(0.5, 2), "0.50");
    assert_eq!(format_correlation_value(f64::NAN, 4), "N/A");
}

fn typed_matrix() -> CorrelationMatrix {
    let titles: Vec<String> = ["Duration", "Method", "Year"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let mut correlations = vec![vec![0.5; 3]; 3];
    correlations[0][1] = f64::NAN;
    let mut squared = vec![vec![0.25; 3]; 3];
    squared[0][1] = f64::NAN;
    CorrelationMatrix::new(
        vec![RowType::Numeric, RowType::Nominal, RowType::Numeric],
        titles,
        correlations,
        squared,
    )
    .unwrap()
}

#[test]
fn tooltip_reports_the_method_for_the_row_type_pairing() {
    let matrix = typed_matrix();
    let theme = GridTheme::default();

    let numeric = tooltip_text(Hit::DataCell(CellIndex::new(0, 2)), &matrix, &theme).unwrap();
    assert!(numeric.starts_with("Duration\nYear\n"));
    assert!(numeric.contains("Pearson's R² = 0.2500"));
    assert!(numeric.contains("Pearson's R = 0.5000"));

    let nominal = tooltip_text(Hit::DataCell(CellIndex::new(1, 1)), &matrix, &theme).unwrap();
    assert!(nominal.contains("Cramer's V = 0.2500"));

    let mixed = tooltip_text(Hit::DataCell(CellIndex::new(0, 1)), &matrix, &theme).unwrap();
    assert!(mixed.contains("ANOVA R² = N/A"));
}

#[test]
fn tooltip_over_a_title_cell_is_just_the_title() {
    let matrix = typed_matrix();
    let theme = GridTheme::default();
    assert_eq!(
        tooltip_text(Hit::TitleCell(CellIndex::new(2, 2)), &matrix, &theme),
        Some("Year".to_string())
    );
    assert_eq!(tooltip_text(Hit::Outside, &matrix, &theme), None);
}
