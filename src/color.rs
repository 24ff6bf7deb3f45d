// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turns an escape velocity into a color.  Points that never escaped
//! are painted black; everything else walks around a six-phase
//! rainbow, one full turn every `CYCLE_LENGTH` iterations no matter
//! what the iteration cap is.

/// Number of iterations it takes to go once around the rainbow.
pub const CYCLE_LENGTH: usize = 250;

/// An 8-bit RGB triple.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The color of points inside the filled Julia set.
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Map an iteration count to a color.  A count equal to the cap means
/// the orbit stayed bounded, and those points are black.
pub fn color_for(iterations: usize, max_iterations: usize) -> Rgb {
    if iterations == max_iterations {
        return BLACK;
    }

    // Reduce in integers first so that k and k + CYCLE_LENGTH land on
    // exactly the same float.
    let p = (iterations % CYCLE_LENGTH) as f64 / CYCLE_LENGTH as f64;
    let scaled = p * 6.0;
    let sector = scaled.floor();
    let o = scaled - sector;
    let q = 1.0 - o;

    let (r, g, b) = match (sector as usize) % 6 {
        0 => (1.0, o, 0.0),
        1 => (q, 1.0, 0.0),
        2 => (0.0, 1.0, o),
        3 => (0.0, q, 1.0),
        4 => (o, 0.0, 1.0),
        _ => (1.0, 0.0, q),
    };

    // Truncate, don't round.
    Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}
