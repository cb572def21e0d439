use anyhow::Context;
use log::info;

use thread_colors::figure::Figure;
use thread_colors::palette::{self, PALETTE_FILE};
use thread_colors::viewer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let samples = palette::load_palette(PALETTE_FILE)
        .with_context(|| format!("unable to load color palette from {}", PALETTE_FILE))?;
    info!("loaded {} color samples from {}", samples.len(), PALETTE_FILE);

    let figure = Figure::new(&samples);
    viewer::show(figure)?;
    Ok(())
}
