// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the ViewTransform struct, which describes a relationship
//! between the integral pixel plane of the viewport, with an origin at
//! 0,0 in the upper-left corner, and the complex plane.  Unlike a
//! fixed pair of corners, the mapping is an offset (which centers the
//! viewport), a pan, and a scale, because clicking on the image moves
//! all three around.

use num::Complex;

use error::{JuliaError, Result};

/// Initial horizontal pan, in pixels at the initial scale.
pub const INITIAL_PAN_X: f64 = -50.0;

/// Initial vertical pan.
pub const INITIAL_PAN_Y: f64 = 0.0;

/// Initial number of pixels per unit of the complex plane.
pub const INITIAL_ZOOM: f64 = 250.0;

/// The affine map from a pixel to a point on the complex plane:
///
/// ```text
/// a = (px + offset_x + pan_x) / zoom
/// b = (py + offset_y + pan_y) / zoom
/// ```
///
/// `zoom` is always positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewTransform {
    /// Shift that puts pixel column `width / 2` at the pan center.
    pub offset_x: f64,
    /// Shift that puts pixel row `height / 2` at the pan center.
    pub offset_y: f64,
    /// Horizontal pan, in scaled pixels.
    pub pan_x: f64,
    /// Vertical pan, in scaled pixels.
    pub pan_y: f64,
    zoom: f64,
}

impl ViewTransform {
    /// Build a transform from its parts.  The scale has to be a
    /// positive, finite number.
    pub fn new(offset_x: f64, offset_y: f64, pan_x: f64, pan_y: f64, zoom: f64) -> Result<Self> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(JuliaError::InvalidZoom(zoom));
        }
        Ok(ViewTransform {
            offset_x,
            offset_y,
            pan_x,
            pan_y,
            zoom,
        })
    }

    /// The starting view for a viewport of the given size: centered,
    /// nudged fifty pixels to the left, 250 pixels to the unit.
    pub fn for_viewport(width: usize, height: usize) -> Self {
        ViewTransform {
            offset_x: -(width as f64) / 2.0,
            offset_y: -(height as f64) / 2.0,
            pan_x: INITIAL_PAN_X,
            pan_y: INITIAL_PAN_Y,
            zoom: INITIAL_ZOOM,
        }
    }

    /// Pixels per unit of the complex plane.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Given a pixel on the integral plane, return the point on the
    /// complex plane it stands for.  Pixels are taken as floats so that
    /// sub-pixel positions (and positions outside the viewport) map
    /// too.
    #[inline]
    pub fn pixel_to_point(&self, x: f64, y: f64) -> Complex<f64> {
        Complex::new(
            (x + self.offset_x + self.pan_x) / self.zoom,
            (y + self.offset_y + self.pan_y) / self.zoom,
        )
    }

    /// The pixel that sits at the pan center, i.e. the one that maps
    /// to `(pan_x, pan_y) / zoom`.
    pub fn center_pixel(&self) -> (f64, f64) {
        (-self.offset_x, -self.offset_y)
    }

    /// Zoom by `factor` around the pixel at `(x, y)`.  The clicked
    /// point becomes the new center of the view, and the scale is
    /// multiplied (zooming in) or divided (zooming out) by the factor.
    /// A factor of 1 just re-centers.
    ///
    /// On error the transform is left untouched.
    pub fn zoom_at(&mut self, x: f64, y: f64, factor: f64, zoom_in: bool) -> Result<()> {
        if !(factor.is_finite() && factor > 0.0) {
            return Err(JuliaError::InvalidZoomFactor(factor));
        }

        let (zoom, pan_x, pan_y) = if zoom_in {
            (
                self.zoom * factor,
                factor * (x + self.offset_x + self.pan_x),
                factor * (y + self.offset_y + self.pan_y),
            )
        } else {
            (
                self.zoom / factor,
                (x + self.offset_x + self.pan_x) / factor,
                (y + self.offset_y + self.pan_y) / factor,
            )
        };

        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(JuliaError::InvalidZoom(zoom));
        }

        self.zoom = zoom;
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        Ok(())
    }
}
