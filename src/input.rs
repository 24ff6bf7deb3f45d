// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pointer input.  The host hands us clicks; we turn them into zoom
//! commands the renderer can apply.

/// How much a plain click magnifies.
pub const DEFAULT_ZOOM_FACTOR: f64 = 2.0;

/// The factor used when the low-zoom modifier is held.  Zooming by 1
/// leaves the scale alone and only re-centers on the click.
pub const PAN_ZOOM_FACTOR: f64 = 1.0;

/// A pointer click, in buffer pixels, with the two modifiers the
/// explorer understands.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Click {
    /// Column of the click.
    pub x: f64,
    /// Row of the click.
    pub y: f64,
    /// Zoom out instead of in.
    pub zoom_out: bool,
    /// Re-center without changing the scale.
    pub pan_only: bool,
}

impl Click {
    /// A plain click with no modifiers held.
    pub fn at(x: f64, y: f64) -> Self {
        Click {
            x,
            y,
            zoom_out: false,
            pan_only: false,
        }
    }
}

/// An explicit zoom request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomCommand {
    /// Column to zoom around.
    pub x: f64,
    /// Row to zoom around.
    pub y: f64,
    /// Magnification; must be positive.
    pub factor: f64,
    /// Multiply the scale if true, divide it if false.
    pub zoom_in: bool,
}

impl From<Click> for ZoomCommand {
    fn from(click: Click) -> Self {
        ZoomCommand {
            x: click.x,
            y: click.y,
            factor: if click.pan_only {
                PAN_ZOOM_FACTOR
            } else {
                DEFAULT_ZOOM_FACTOR
            },
            zoom_in: !click.zoom_out,
        }
    }
}

/// Scale a pointer position reported relative to a displayed element
/// (which may be stretched) into the pixel grid of the buffer behind
/// it, rounding to the nearest pixel.  `origin` is the element's
/// top-left corner, `extent` its displayed size, and `buffer` the
/// buffer's size in pixels.
pub fn pointer_to_pixel(
    client: (f64, f64),
    origin: (f64, f64),
    extent: (f64, f64),
    buffer: (usize, usize),
) -> (f64, f64) {
    (
        ((client.0 - origin.0) / extent.0 * buffer.0 as f64).round(),
        ((client.1 - origin.1) / extent.1 * buffer.1 as f64).round(),
    )
}
