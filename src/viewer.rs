use log::{error, info};
use pixels::{Error, Pixels, SurfaceTexture};
use winit::{
    dpi::LogicalSize,
    event::{Event, VirtualKeyCode},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};
use winit_input_helper::WinitInputHelper;

use crate::figure::{Figure, FIGURE_HEIGHT, FIGURE_WIDTH, TITLE};
use crate::file_io;

// Parameters for GUI key-press interactions
const ROTATE_STEP_PER_KEY_PRESS: f64 = 0.08; // radians
const ZOOM_SCALE_FACTOR_PER_KEY_PRESS: f64 = 0.05;

/**
 * Owns the figure and its rasterized RGB buffer, re-rendering only
 * when the view orientation has changed since the last draw.
 */
struct Canvas {
    figure: Figure,
    rgb_buffer: Vec<u8>,
    stale: bool,
}

impl Canvas {
    fn new(figure: Figure) -> Canvas {
        Canvas {
            figure,
            rgb_buffer: vec![0; (FIGURE_WIDTH * FIGURE_HEIGHT * 3) as usize],
            stale: true,
        }
    }

    fn update(&mut self) -> anyhow::Result<()> {
        if self.stale {
            self.figure.render_to(&mut self.rgb_buffer)?;
            self.stale = false;
        }
        Ok(())
    }

    /// Copy the RGB raster into the RGBA screen buffer.
    fn draw(&self, screen: &mut [u8]) {
        for (rgba, rgb) in screen
            .chunks_exact_mut(4)
            .zip(self.rgb_buffer.chunks_exact(3))
        {
            rgba[..3].copy_from_slice(rgb);
            rgba[3] = 0xff;
        }
    }
}

/**
 * Open a window showing the figure and block until it is closed.
 * Supported interactions:
 * -- arrow keys rotate the view (yaw / pitch)
 * -- W/S keys for zoom control
 * -- P saves a timestamped PNG snapshot to the working directory
 * -- Escape (or closing the window) exits
 */
pub fn show(figure: Figure) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let mut input = WinitInputHelper::new();

    let window = {
        let logical_size = LogicalSize::new(FIGURE_WIDTH as f64, FIGURE_HEIGHT as f64);
        WindowBuilder::new()
            .with_title(TITLE)
            .with_inner_size(logical_size)
            .with_min_inner_size(logical_size)
            .build(&event_loop)
            .unwrap()
    };

    let mut pixels = {
        let window_size = window.inner_size();
        let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
        Pixels::new(FIGURE_WIDTH, FIGURE_HEIGHT, surface_texture)?
    };

    let mut canvas = Canvas::new(figure);

    event_loop.run(move |event, _, control_flow| {
        if let Event::RedrawRequested(_) = event {
            if let Err(draw_error) = canvas.update() {
                error!("unable to draw the figure: {draw_error}");
                *control_flow = ControlFlow::Exit;
                return;
            }
            canvas.draw(pixels.frame_mut());
            if pixels.render().is_err() {
                error!("unable to render pixels, aborting");
                *control_flow = ControlFlow::Exit;
                return;
            }
        }

        // Let winit_input_helper collect events to build its state; it
        // returns `true` when it is time to process the key presses.
        if input.update(&event) {
            if input.key_pressed(VirtualKeyCode::Escape) || input.close_requested() {
                *control_flow = ControlFlow::Exit;
                return;
            }

            // Rotation --> arrow keys
            if input.key_pressed(VirtualKeyCode::Left) {
                canvas.figure.view.yaw -= ROTATE_STEP_PER_KEY_PRESS;
                canvas.stale = true;
            }
            if input.key_pressed(VirtualKeyCode::Right) {
                canvas.figure.view.yaw += ROTATE_STEP_PER_KEY_PRESS;
                canvas.stale = true;
            }
            if input.key_pressed(VirtualKeyCode::Up) {
                canvas.figure.view.pitch += ROTATE_STEP_PER_KEY_PRESS;
                canvas.stale = true;
            }
            if input.key_pressed(VirtualKeyCode::Down) {
                canvas.figure.view.pitch -= ROTATE_STEP_PER_KEY_PRESS;
                canvas.stale = true;
            }

            // Zoom control --> W and S keys
            if input.key_pressed(VirtualKeyCode::W) {
                canvas.figure.view.scale *= 1.0 + ZOOM_SCALE_FACTOR_PER_KEY_PRESS;
                canvas.stale = true;
            }
            if input.key_pressed(VirtualKeyCode::S) {
                canvas.figure.view.scale *= 1.0 - ZOOM_SCALE_FACTOR_PER_KEY_PRESS;
                canvas.stale = true;
            }

            if input.key_pressed(VirtualKeyCode::P) {
                match file_io::save_snapshot(&canvas.rgb_buffer, FIGURE_WIDTH, FIGURE_HEIGHT) {
                    Ok(path) => info!("wrote snapshot to: {}", path.display()),
                    Err(save_error) => error!("unable to save snapshot: {save_error}"),
                }
            }

            window.request_redraw();
        }
    });
}
