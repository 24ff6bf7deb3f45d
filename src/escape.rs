// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Escape-time evaluation of the Julia recurrence.
//!
//! The Julia set for a fixed parameter `c` is the set of points `z` on
//! the complex plane whose orbit under `z -> z² + c` stays bounded
//! forever.  Once `|z|` exceeds 2 the orbit is certain to run off to
//! infinity, so we iterate until that happens and report how long it
//! took: the "velocity" of the point.  Points that are still inside
//! the radius when we run out of patience are treated as members of
//! the set.

use num::Complex;

use view::ViewTransform;

/// Square of the escape radius.
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// Iterate the point `z` under `z -> z² + c`.  The counter starts at 1
/// and is checked before every step; the count at which `|z|² > 4` is
/// returned, or `limit` if the orbit has not escaped by then.  The
/// result is therefore always in `1..=limit`, and equals `limit`
/// exactly when the point is taken to be in the set.
///
/// `limit` must be at least 1.  No care is taken with overflow: values
/// that blow up simply fail the radius test.
#[inline]
pub fn escape_time(z: Complex<f64>, c: Complex<f64>, limit: usize) -> usize {
    let (mut a, mut b) = (z.re, z.im);
    let mut iterations = 1;
    while iterations < limit {
        let za = a * a;
        let zb = b * b;
        if za + zb > ESCAPE_RADIUS_SQR {
            return iterations;
        }
        b = 2.0 * a * b + c.im;
        a = za - zb + c.re;
        iterations += 1;
    }
    limit
}

/// Map the pixel at `(x, y)` through the view onto the complex plane
/// and return its escape time.  The caller keeps the pixel inside the
/// buffer.
#[inline]
pub fn iterate(x: usize, y: usize, max_iterations: usize, c: Complex<f64>, view: &ViewTransform) -> usize {
    escape_time(view.pixel_to_point(x as f64, y as f64), c, max_iterations)
}
