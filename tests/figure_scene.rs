use std::path::PathBuf;

use thread_colors::figure::{Figure, AXIS_LABELS, TITLE};
use thread_colors::palette::load_palette;

fn fixture_path() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", "colors.csv"]
        .iter()
        .collect()
}

#[test]
fn test_scene_has_one_marker_per_data_row() {
    let samples = load_palette(fixture_path()).unwrap();
    let figure = Figure::new(&samples);
    assert_eq!(figure.markers().len(), samples.len());
}

#[test]
fn test_marker_positions_match_marker_colors() {
    let samples = load_palette(fixture_path()).unwrap();
    let figure = Figure::new(&samples);

    for (marker, sample) in figure.markers().iter().zip(&samples) {
        assert_eq!(*marker, sample.normalized());
    }

    // End-to-end check from the palette file: White plots at the
    // (1, 1, 1) corner in white, Black at the origin in black.
    assert_eq!(figure.markers()[0].to_rgb8(), [255, 255, 255]);
    assert_eq!(figure.markers()[1].to_rgb8(), [0, 0, 0]);
}

#[test]
fn test_figure_annotations_are_fixed() {
    assert_eq!(TITLE, "DMC Thread Colors");
    assert_eq!(AXIS_LABELS, ["Red", "Green", "Blue"]);
}
