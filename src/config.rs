// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Session settings, and a small catalog of Julia parameters that are
//! worth looking at.  Values from http://paulbourke.net/fractals/juliaset/
//! and https://rosettacode.org/wiki/Julia_set

use num::Complex;

use error::{JuliaError, Result};

/// Default viewport width.
pub const DEFAULT_WIDTH: usize = 1024;

/// Default viewport height.
pub const DEFAULT_HEIGHT: usize = 768;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// The parameter the explorer opens with.
pub const DEFAULT_PARAMETER: (f64, f64) = (-0.4, 0.6);

/// Named parameters, as `(name, re, im)`.
pub const PRESETS: &[(&str, f64, f64)] = &[
    ("default", -0.4, 0.6),
    ("rabbit", -0.123, 0.745),
    ("siegel", -0.391, -0.587),
    ("cauliflower", -0.7, -0.3),
    ("dendrite", 0.0, 0.8),
    ("spiral", 0.285, 0.01),
    ("dragon", -0.8, 0.156),
    ("galaxy", -0.7, 0.27015),
    ("starfish", -0.54, 0.54),
    ("sparks", 0.355, 0.355),
    ("flower", 0.37, 0.1),
    ("lace", -0.512511498387847167, 0.521295573094847167),
];

/// Look a preset up by name, ignoring case.
pub fn preset(name: &str) -> Result<Complex<f64>> {
    PRESETS
        .iter()
        .find(|p| p.0.eq_ignore_ascii_case(name))
        .map(|p| Complex::new(p.1, p.2))
        .ok_or_else(|| JuliaError::UnknownPreset(name.to_string()))
}

/// Everything fixed at the start of a session.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Viewport width in pixels.
    pub width: usize,
    /// Viewport height in pixels.
    pub height: usize,
    /// Iteration cap per pixel.
    pub max_iterations: usize,
    /// The `c` in `z² + c`.
    pub parameter: Complex<f64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            parameter: Complex::new(DEFAULT_PARAMETER.0, DEFAULT_PARAMETER.1),
        }
    }
}

impl SessionConfig {
    /// The default session with a different viewport.
    pub fn with_size(width: usize, height: usize) -> Self {
        SessionConfig {
            width,
            height,
            ..Default::default()
        }
    }

    /// Check the preconditions the renderer relies on.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations < 1 {
            return Err(JuliaError::NoIterations);
        }
        if self.width == 0 || self.height == 0 {
            return Err(JuliaError::EmptyViewport);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_explorer() {
        let c = SessionConfig::default();
        assert_eq!(c.max_iterations, 1000);
        assert_eq!(c.parameter, Complex::new(-0.4, 0.6));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn presets_are_found_by_name() {
        assert_eq!(preset("rabbit").unwrap(), Complex::new(-0.123, 0.745));
        assert_eq!(preset("Cauliflower").unwrap(), Complex::new(-0.7, -0.3));
        assert_eq!(preset("default").unwrap(), Complex::new(-0.4, 0.6));
    }

    #[test]
    fn unknown_presets_are_errors() {
        assert_eq!(
            preset("mandelbrot"),
            Err(JuliaError::UnknownPreset("mandelbrot".to_string()))
        );
    }

    #[test]
    fn validation_catches_empty_sessions() {
        let mut c = SessionConfig::with_size(0, 10);
        assert_eq!(c.validate(), Err(JuliaError::EmptyViewport));
        c = SessionConfig::with_size(10, 10);
        c.max_iterations = 0;
        assert_eq!(c.validate(), Err(JuliaError::NoIterations));
    }
}
