use std::path::PathBuf;

use anyhow::Context;

const SNAPSHOT_BASE_NAME: &str = "dmc_thread_colors";

pub fn date_time_string() -> String {
    use chrono::{Datelike, Local, Timelike};
    let local_time = Local::now();
    format!(
        "{:04}{:02}{:02}_{:02}{:02}{:02}",
        local_time.year(),
        local_time.month(),
        local_time.day(),
        local_time.hour(),
        local_time.minute(),
        local_time.second()
    )
}

pub fn snapshot_path() -> PathBuf {
    PathBuf::from(format!("{}_{}.png", SNAPSHOT_BASE_NAME, date_time_string()))
}

/// Write the figure's RGB raster to a timestamped PNG in the working
/// directory and return the path it was written to.
pub fn save_snapshot(rgb_buffer: &[u8], width: u32, height: u32) -> anyhow::Result<PathBuf> {
    let path = snapshot_path();
    image::save_buffer(&path, rgb_buffer, width, height, image::ColorType::Rgb8)
        .with_context(|| format!("unable to write snapshot file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_path_shape() {
        let path = snapshot_path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with(SNAPSHOT_BASE_NAME));
        assert!(name.ends_with(".png"));
        // base + '_' + YYYYMMDD_HHMMSS + ".png"
        assert_eq!(name.len(), SNAPSHOT_BASE_NAME.len() + 1 + 15 + 4);
    }
}
