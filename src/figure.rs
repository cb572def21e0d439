use plotters::prelude::*;

use crate::palette::{normalize, ColorSample, UnitRgb};

/// Fixed raster size of the figure, also used for the viewer window.
pub const FIGURE_WIDTH: u32 = 960;
pub const FIGURE_HEIGHT: u32 = 720;

pub const TITLE: &str = "DMC Thread Colors";
pub const AXIS_LABELS: [&str; 3] = ["Red", "Green", "Blue"];

const MARKER_SIZE: i32 = 4;

// Where the axis name text is anchored, in chart coordinates: the
// midpoint of each axis, nudged outward past the chart cube.
const AXIS_LABEL_ANCHORS: [(f64, f64, f64); 3] = [
    (0.5, -0.15, -0.15),
    (-0.15, 0.5, -0.15),
    (-0.15, -0.15, 0.5),
];

/**
 * Camera orientation for the 3D chart projection. Angles are radians;
 * `scale` is the overall zoom applied after rotation.
 */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewAngles {
    pub yaw: f64,
    pub pitch: f64,
    pub scale: f64,
}

impl Default for ViewAngles {
    fn default() -> Self {
        ViewAngles {
            yaw: 0.6,
            pitch: 0.3,
            scale: 0.8,
        }
    }
}

/**
 * The complete scene description for the scatter plot: one marker per
 * color sample, positioned at its normalized (r, g, b) triple and
 * filled with that same triple, plus the camera orientation.
 *
 * Building the scene is separate from rasterizing it so that the
 * marker geometry can be inspected without a drawing backend.
 */
pub struct Figure {
    markers: Vec<UnitRgb>,
    pub view: ViewAngles,
}

impl Figure {
    pub fn new(samples: &[ColorSample]) -> Figure {
        Figure {
            markers: normalize(samples),
            view: ViewAngles::default(),
        }
    }

    /// One entry per loaded data row; each is both a marker position
    /// and that marker's fill color.
    pub fn markers(&self) -> &[UnitRgb] {
        &self.markers
    }

    /**
     * Rasterize the scene into `buffer`, an RGB byte buffer of exactly
     * `FIGURE_WIDTH * FIGURE_HEIGHT * 3` bytes: white background, a 3D
     * cartesian grid over the unit cube, the scatter markers, the axis
     * names, and the title.
     */
    pub fn render_to(&self, buffer: &mut [u8]) -> anyhow::Result<()> {
        let root = BitMapBackend::with_buffer(buffer, (FIGURE_WIDTH, FIGURE_HEIGHT))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(TITLE, ("sans-serif", 28))
            .margin(20)
            .build_cartesian_3d(0.0..1.0, 0.0..1.0, 0.0..1.0)?;

        let view = self.view;
        chart.with_projection(|mut projection| {
            projection.yaw = view.yaw;
            projection.pitch = view.pitch;
            projection.scale = view.scale;
            projection.into_matrix()
        });

        chart
            .configure_axes()
            .x_labels(6)
            .y_labels(6)
            .z_labels(6)
            .draw()?;

        chart.draw_series(self.markers.iter().map(|unit| {
            let [r, g, b] = unit.to_rgb8();
            Circle::new((unit.r, unit.g, unit.b), MARKER_SIZE, RGBColor(r, g, b).filled())
        }))?;

        // The 3D coordinate system has no built-in axis titles, so
        // project each anchor point back to pixel space by hand.
        for (label, anchor) in AXIS_LABELS.iter().zip(AXIS_LABEL_ANCHORS) {
            let position = chart.plotting_area().map_coordinate(&anchor);
            root.draw(&Text::new(*label, position, ("sans-serif", 20).into_font()))?;
        }

        root.present()?;
        Ok(())
    }
}
