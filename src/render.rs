// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The render controller.  Owns the session: the view transform, the
//! Julia parameter, and the RGBA buffer the host presents.  Every
//! regeneration repaints every pixel; zooming only moves the view, so
//! the host has to regenerate afterwards (or use
//! `apply_zoom_and_regenerate`, which does both).

use std::time::Instant;

use crossbeam;
use itertools::iproduct;
use num::Complex;

use color::color_for;
use config::SessionConfig;
use error::{JuliaError, Result};
use escape::iterate;
use input::{Click, ZoomCommand};
use view::ViewTransform;

/// Bytes per RGBA8 pixel.
pub const CHANNELS: usize = 4;

/// Everything a worker needs to paint pixels, copied out of the
/// renderer so the buffer can be lent out mutably at the same time.
#[derive(Copy, Clone)]
struct Frame {
    view: ViewTransform,
    parameter: Complex<f64>,
    max_iterations: usize,
    width: usize,
}

impl Frame {
    /// Paint `band`, which holds whole rows starting at `first_row`.
    fn paint(&self, band: &mut [u8], first_row: usize) {
        let rows = band.len() / (self.width * CHANNELS);
        for (row, column) in iproduct!(0..rows, 0..self.width) {
            let iterations = iterate(
                column,
                first_row + row,
                self.max_iterations,
                self.parameter,
                &self.view,
            );
            let color = color_for(iterations, self.max_iterations);
            let offset = (row * self.width + column) * CHANNELS;
            band[offset] = color.0;
            band[offset + 1] = color.1;
            band[offset + 2] = color.2;
            band[offset + 3] = 255;
        }
    }
}

/// The explorer's session state.  Width, height, iteration cap and
/// parameter are fixed when it is built; the view moves with every
/// click.
pub struct Renderer {
    width: usize,
    height: usize,
    max_iterations: usize,
    parameter: Complex<f64>,
    view: ViewTransform,
    buffer: Vec<u8>,
}

impl Renderer {
    /// Start a session with the initial view for the configured
    /// viewport.  The buffer starts out transparent black; call
    /// `generate_image` before presenting it.
    pub fn new(config: SessionConfig) -> Result<Self> {
        let view = ViewTransform::for_viewport(config.width, config.height);
        Renderer::with_view(config, view)
    }

    /// Start a session with an explicit view.
    pub fn with_view(config: SessionConfig, view: ViewTransform) -> Result<Self> {
        config.validate()?;
        Ok(Renderer {
            width: config.width,
            height: config.height,
            max_iterations: config.max_iterations,
            parameter: config.parameter,
            view,
            buffer: vec![0; config.width * config.height * CHANNELS],
        })
    }

    /// Viewport width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Viewport height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The iteration cap.
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The `c` of this session.
    pub fn parameter(&self) -> Complex<f64> {
        self.parameter
    }

    /// The current view.
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    /// The current contents of the RGBA buffer, row-major, four bytes
    /// to the pixel.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// The escape time of one pixel under the current view.
    pub fn iterations_at(&self, x: usize, y: usize) -> usize {
        iterate(x, y, self.max_iterations, self.parameter, &self.view)
    }

    fn frame(&self) -> Frame {
        Frame {
            view: self.view,
            parameter: self.parameter,
            max_iterations: self.max_iterations,
            width: self.width,
        }
    }

    /// Repaint every pixel under the current view.
    pub fn generate_image(&mut self) {
        let started = Instant::now();
        let frame = self.frame();
        frame.paint(&mut self.buffer, 0);
        info!(
            "Rendered {}x{} at zoom {} in {:?}",
            self.width,
            self.height,
            self.view.zoom(),
            started.elapsed()
        );
    }

    /// Repaint every pixel, splitting the rows into `threads` bands
    /// painted in parallel.  The result is byte-for-byte the same as
    /// `generate_image`.
    pub fn generate_image_threaded(&mut self, threads: usize) -> Result<()> {
        if threads == 0 {
            return Err(JuliaError::NoThreads);
        }
        if threads == 1 {
            self.generate_image();
            return Ok(());
        }

        let started = Instant::now();
        let frame = self.frame();
        let rows_per_band = (self.height + threads - 1) / threads;
        let bands: Vec<&mut [u8]> = self
            .buffer
            .chunks_mut(rows_per_band * self.width * CHANNELS)
            .collect();
        let frame = &frame;
        crossbeam::scope(|spawner| {
            for (i, band) in bands.into_iter().enumerate() {
                spawner.spawn(move |_| frame.paint(band, i * rows_per_band));
            }
        })
        .map_err(|_| JuliaError::WorkerPanicked)?;

        info!(
            "Rendered {}x{} at zoom {} on {} threads in {:?}",
            self.width,
            self.height,
            self.view.zoom(),
            threads,
            started.elapsed()
        );
        Ok(())
    }

    /// Zoom around the pixel at `(x, y)`.  This only moves the view;
    /// the buffer is stale until the next `generate_image`.
    pub fn zoom(&mut self, x: f64, y: f64, factor: f64, zoom_in: bool) -> Result<()> {
        self.view.zoom_at(x, y, factor, zoom_in)?;
        debug!(
            "Zoomed {} by {} at ({}, {}): {:?}",
            if zoom_in { "in" } else { "out" },
            factor,
            x,
            y,
            self.view
        );
        Ok(())
    }

    /// Apply a zoom command and repaint, returning the fresh buffer.
    pub fn apply_zoom_and_regenerate(&mut self, command: ZoomCommand) -> Result<&[u8]> {
        self.zoom(command.x, command.y, command.factor, command.zoom_in)?;
        self.generate_image();
        Ok(&self.buffer)
    }

    /// Handle a pointer click the way the explorer does.
    pub fn click(&mut self, click: Click) -> Result<&[u8]> {
        self.apply_zoom_and_regenerate(click.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color::{Rgb, BLACK};
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    fn tiny(max_iterations: usize) -> SessionConfig {
        SessionConfig {
            max_iterations,
            ..SessionConfig::with_size(4, 4)
        }
    }

    fn pixel(r: &Renderer, x: usize, y: usize) -> (Rgb, u8) {
        let o = (y * r.width() + x) * CHANNELS;
        let b = r.buffer();
        (Rgb(b[o], b[o + 1], b[o + 2]), b[o + 3])
    }

    #[test]
    fn new_sessions_start_at_the_initial_view() {
        let r = Renderer::new(SessionConfig::default()).unwrap();
        assert_eq!(*r.view(), ViewTransform::for_viewport(1024, 768));
        assert_eq!(r.buffer().len(), 1024 * 768 * 4);
        assert_eq!(r.parameter(), Complex::new(-0.4, 0.6));
        assert_eq!(r.max_iterations(), 1000);
    }

    #[test]
    fn bad_sessions_are_refused() {
        assert_eq!(
            Renderer::new(tiny(0)).err(),
            Some(JuliaError::NoIterations)
        );
        assert_eq!(
            Renderer::new(SessionConfig::with_size(0, 4)).err(),
            Some(JuliaError::EmptyViewport)
        );
    }

    #[test]
    fn a_tiny_default_viewport_is_entirely_inside() {
        let mut r = Renderer::new(tiny(5)).unwrap();
        assert_eq!(r.iterations_at(0, 0), 5);
        assert_eq!(r.iterations_at(3, 3), 5);
        r.generate_image();
        for (x, y) in iproduct!(0..4, 0..4) {
            assert_eq!(pixel(&r, x, y), (BLACK, 255));
        }
    }

    #[test]
    fn a_tiny_wide_view_matches_the_recurrence() {
        let view = ViewTransform::new(-2.0, -2.0, 0.0, 0.0, 1.0).unwrap();
        let mut r = Renderer::with_view(tiny(5), view).unwrap();
        let expected = [[1, 1, 2, 1], [1, 2, 5, 3], [2, 4, 5, 4], [1, 3, 5, 2]];
        r.generate_image();
        for (y, x) in iproduct!(0..4, 0..4) {
            assert_eq!(r.iterations_at(x, y), expected[y][x], "at ({}, {})", x, y);
            assert_eq!(pixel(&r, x, y), (color_for(expected[y][x], 5), 255));
        }
        assert_eq!(pixel(&r, 0, 0).0, Rgb(255, 6, 0));
        assert_eq!(pixel(&r, 3, 3).0, Rgb(255, 12, 0));
        assert_eq!(pixel(&r, 2, 1).0, BLACK);
    }

    #[test]
    fn generate_writes_every_pixel_after_zooms() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut r = Renderer::new(SessionConfig {
            max_iterations: 64,
            ..SessionConfig::with_size(32, 24)
        })
        .unwrap();
        r.generate_image();
        for _ in 0..8 {
            let x = rng.gen_range(0, 32) as f64;
            let y = rng.gen_range(0, 24) as f64;
            r.zoom(x, y, 2.0, rng.gen()).unwrap();
            // Poison the buffer so a skipped pixel would show.
            for b in r.buffer.iter_mut() {
                *b = 7;
            }
            r.generate_image();
            for (y, x) in iproduct!(0..24, 0..32) {
                let expected = color_for(r.iterations_at(x, y), 64);
                assert_eq!(pixel(&r, x, y), (expected, 255));
            }
        }
    }

    #[test]
    fn zoom_only_moves_the_view() {
        let mut r = Renderer::new(tiny(5)).unwrap();
        r.generate_image();
        let before = r.buffer().to_vec();
        r.zoom(1.0, 1.0, 2.0, false).unwrap();
        assert_eq!(r.view().zoom(), 125.0);
        assert_eq!(r.buffer(), &before[..]);
    }

    #[test]
    fn zoom_in_then_out_at_the_center_restores_the_view() {
        let mut r = Renderer::new(SessionConfig::with_size(800, 600)).unwrap();
        r.zoom(100.0, 500.0, 2.0, true).unwrap();
        let before = *r.view();
        r.zoom(400.0, 300.0, 2.0, true).unwrap();
        r.zoom(400.0, 300.0, 2.0, false).unwrap();
        assert_eq!(*r.view(), before);
    }

    #[test]
    fn failed_zooms_keep_the_session() {
        let mut r = Renderer::new(tiny(5)).unwrap();
        let before = *r.view();
        assert_eq!(
            r.apply_zoom_and_regenerate(ZoomCommand {
                x: 1.0,
                y: 1.0,
                factor: 0.0,
                zoom_in: true
            })
            .err(),
            Some(JuliaError::InvalidZoomFactor(0.0))
        );
        assert_eq!(*r.view(), before);
    }

    #[test]
    fn clicks_zoom_and_regenerate() {
        let config = SessionConfig {
            max_iterations: 100,
            ..SessionConfig::with_size(40, 30)
        };
        let mut clicked = Renderer::new(config).unwrap();
        let fresh = clicked.click(Click::at(5.0, 7.0)).unwrap().to_vec();

        let mut manual = Renderer::new(config).unwrap();
        manual.zoom(5.0, 7.0, 2.0, true).unwrap();
        manual.generate_image();

        assert_eq!(fresh, manual.buffer());
        assert_eq!(clicked.view(), manual.view());
    }

    #[test]
    fn threaded_rendering_is_identical() {
        let config = SessionConfig {
            max_iterations: 200,
            ..SessionConfig::with_size(37, 23)
        };
        let mut single = Renderer::new(config).unwrap();
        single.zoom(30.0, 4.0, 2.0, true).unwrap();
        single.generate_image();

        for threads in 1..9 {
            let mut threaded = Renderer::with_view(config, *single.view()).unwrap();
            threaded.generate_image_threaded(threads).unwrap();
            assert_eq!(threaded.buffer(), single.buffer(), "{} threads", threads);
        }
    }

    #[test]
    fn more_threads_than_rows_is_fine() {
        let mut r = Renderer::new(tiny(5)).unwrap();
        r.generate_image_threaded(16).unwrap();
        assert!(r.buffer().chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn zero_threads_is_an_error() {
        let mut r = Renderer::new(tiny(5)).unwrap();
        assert_eq!(r.generate_image_threaded(0), Err(JuliaError::NoThreads));
    }
}
