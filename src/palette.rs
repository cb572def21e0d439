use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

/// Name of the palette file, read from the working directory.
pub const PALETTE_FILE: &str = "colors.csv";

const NAME_COLUMN: &str = "DMC Name";
const NUMBER_COLUMN: &str = "Floss Number";
const CHANNEL_COLUMNS: [&str; 3] = ["R", "G", "B"];

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("unable to read palette file: {0}")]
    Io(#[from] std::io::Error),

    #[error("palette file has no header row")]
    MissingHeader,

    #[error("header is missing required column: {0:?}")]
    MissingColumn(&'static str),

    #[error("line {line}: expected at least {expected} fields, found {found}")]
    RowTooShort {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid value for channel {channel}: {value:?}")]
    InvalidChannel {
        line: usize,
        channel: &'static str,
        value: String,
    },
}

/**
 * One row of the palette file: a named thread color with its catalog
 * number and raw RGB channel values.
 *
 * Channels are stored exactly as parsed. The nominal range is [0, 255],
 * but nothing clamps or rejects values outside it; they flow through
 * `normalized()` unchanged (a raw 300 becomes ~1.176).
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSample {
    pub name: String,
    pub number: String,
    pub red: i64,
    pub green: i64,
    pub blue: i64,
}

impl ColorSample {
    /// Scale the raw channels from [0, 255] down to unit range.
    /// Exact at the boundaries: 0 -> 0.0 and 255 -> 1.0.
    pub fn normalized(&self) -> UnitRgb {
        UnitRgb {
            r: self.red as f64 / 255.0,
            g: self.green as f64 / 255.0,
            b: self.blue as f64 / 255.0,
        }
    }
}

/**
 * A color in unit-range floating point, used both as a marker position
 * and as that marker's fill color.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl UnitRgb {
    /// Convert back to 8-bit channels for the drawing backend. The cast
    /// saturates, so out-of-range unit values clip to 0 or 255 here.
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
        ]
    }
}

/// Normalize every sample in order. The Nth output corresponds to the
/// Nth input row.
pub fn normalize(samples: &[ColorSample]) -> Vec<UnitRgb> {
    samples.iter().map(ColorSample::normalized).collect()
}

/// Read the palette file at `path` into an ordered list of samples.
pub fn load_palette<P: AsRef<Path>>(path: P) -> Result<Vec<ColorSample>, PaletteError> {
    let file = File::open(path)?;
    parse_palette(BufReader::new(file))
}

/**
 * Line-oriented parser for the palette format:
 * -- lines whose first non-whitespace character is '#' are comments
 * -- blank lines are skipped
 * -- the first remaining line is a comma-separated header naming the
 *    columns; "R", "G", and "B" must be present, "DMC Name" and
 *    "Floss Number" are picked up when they are
 * -- every later line is one data row, whitespace trimmed per field
 *
 * Any malformed row is a fatal error naming the offending line; there
 * is no recovery or row skipping.
 */
pub fn parse_palette<R: BufRead>(reader: R) -> Result<Vec<ColorSample>, PaletteError> {
    let mut columns: Option<ColumnIndices> = None;
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        match &columns {
            None => {
                columns = Some(ColumnIndices::from_header(trimmed)?);
            }
            Some(columns) => {
                samples.push(columns.parse_row(trimmed, line_number)?);
            }
        }
    }

    if columns.is_none() {
        return Err(PaletteError::MissingHeader);
    }
    Ok(samples)
}

/// Where each named column sits in a data row, resolved from the header.
struct ColumnIndices {
    name: Option<usize>,
    number: Option<usize>,
    channels: [usize; 3],
}

impl ColumnIndices {
    fn from_header(header: &str) -> Result<ColumnIndices, PaletteError> {
        let cells: Vec<&str> = header.split(',').map(str::trim).collect();
        let position = |column: &str| cells.iter().position(|cell| *cell == column);

        let mut channels = [0; 3];
        for (slot, column) in channels.iter_mut().zip(CHANNEL_COLUMNS) {
            *slot = position(column).ok_or(PaletteError::MissingColumn(column))?;
        }

        Ok(ColumnIndices {
            name: position(NAME_COLUMN),
            number: position(NUMBER_COLUMN),
            channels,
        })
    }

    fn parse_row(&self, row: &str, line_number: usize) -> Result<ColorSample, PaletteError> {
        let cells: Vec<&str> = row.split(',').map(str::trim_start).collect();

        let mut channels = [0i64; 3];
        for (slot, (index, column)) in channels
            .iter_mut()
            .zip(self.channels.into_iter().zip(CHANNEL_COLUMNS))
        {
            let cell = *cells.get(index).ok_or(PaletteError::RowTooShort {
                line: line_number,
                expected: index + 1,
                found: cells.len(),
            })?;
            *slot = cell
                .trim_end()
                .parse()
                .map_err(|_| PaletteError::InvalidChannel {
                    line: line_number,
                    channel: column,
                    value: cell.to_owned(),
                })?;
        }

        let text_cell = |index: Option<usize>| -> String {
            index
                .and_then(|index| cells.get(index))
                .map(|cell| cell.trim_end().to_owned())
                .unwrap_or_default()
        };

        let [red, green, blue] = channels;
        Ok(ColorSample {
            name: text_cell(self.name),
            number: text_cell(self.number),
            red,
            green,
            blue,
        })
    }
}
