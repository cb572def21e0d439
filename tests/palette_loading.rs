use std::path::PathBuf;

use approx::assert_relative_eq;
use more_asserts::{assert_ge, assert_le};

use thread_colors::palette::{load_palette, normalize, PaletteError};

fn fixture_path() -> PathBuf {
    [env!("CARGO_MANIFEST_DIR"), "tests", "data", "colors.csv"]
        .iter()
        .collect()
}

#[test]
fn test_load_fixture_file() {
    let samples = load_palette(fixture_path()).unwrap();

    // Comment lines and the blank line contribute nothing; the data
    // rows come back in file order.
    let names: Vec<&str> = samples.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["White", "Black", "Red", "Kelly Green", "Royal Blue"]
    );

    let numbers: Vec<&str> = samples.iter().map(|s| s.number.as_str()).collect();
    assert_eq!(numbers, vec!["B5200", "310", "321", "702", "797"]);

    assert_eq!(
        (samples[2].red, samples[2].green, samples[2].blue),
        (199, 43, 59)
    );
}

#[test]
fn test_fixture_normalizes_into_unit_range() {
    let samples = load_palette(fixture_path()).unwrap();
    let units = normalize(&samples);
    assert_eq!(units.len(), samples.len());

    for unit in &units {
        for channel in [unit.r, unit.g, unit.b] {
            assert_ge!(channel, 0.0);
            assert_le!(channel, 1.0);
        }
    }

    // White and black hit the range boundaries exactly.
    assert_eq!((units[0].r, units[0].g, units[0].b), (1.0, 1.0, 1.0));
    assert_eq!((units[1].r, units[1].g, units[1].b), (0.0, 0.0, 0.0));

    // Interior values are the plain raw / 255 quotient.
    assert_relative_eq!(units[2].r, 199.0 / 255.0, epsilon = 1e-12);
}

#[test]
fn test_missing_file_is_an_io_error() {
    let result = load_palette("no_such_palette.csv");
    assert!(matches!(result, Err(PaletteError::Io(_))));
}
