// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Precondition failures.  The arithmetic itself is total; these are
//! the inputs we refuse at the door rather than let them turn the
//! view transform into NaNs.

/// Everything the session can reject.
#[derive(Debug, Fail, PartialEq)]
pub enum JuliaError {
    /// The iteration cap must allow at least one iteration.
    #[fail(display = "The iteration cap must be at least 1.")]
    NoIterations,

    /// A viewport with no pixels in it.
    #[fail(display = "The viewport must be at least one pixel wide and one pixel high.")]
    EmptyViewport,

    /// Zoom factors must be positive, finite numbers.
    #[fail(display = "Zoom factor {} is not a positive, finite number.", _0)]
    InvalidZoomFactor(f64),

    /// The zoom operation would have left the scale unusable.
    #[fail(display = "Zooming would leave the scale at {}.", _0)]
    InvalidZoom(f64),

    /// The threaded renderer needs at least one worker.
    #[fail(display = "At least one render thread is required.")]
    NoThreads,

    /// One of the render workers died.
    #[fail(display = "A render worker panicked.")]
    WorkerPanicked,

    /// The named parameter preset does not exist.
    #[fail(display = "No parameter preset named '{}'.", _0)]
    UnknownPreset(String),
}

/// Result alias for the library.
pub type Result<T> = ::std::result::Result<T, JuliaError>;
