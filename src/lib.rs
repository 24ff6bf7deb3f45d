#![deny(missing_docs)]
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Julia set explorer
//!
//! A Julia set is drawn by picking a fixed complex number `c` and,
//! for every point `z` on the complex plane, repeatedly replacing `z`
//! with `z² + c`.  Some points run off to infinity, some never do.
//! The points that never do make up the (filled) Julia set, and are
//! painted black; the rest are painted by how quickly they ran away,
//! which gives the familiar bands of color around the set.
//!
//! The library holds the whole session: a view transform mapping
//! pixels onto the complex plane, the parameter `c`, and an RGBA
//! buffer.  A host (a window, a test, or the `julia` command-line
//! tool) asks for the buffer to be regenerated, forwards clicks,
//! which zoom and re-center the view, and presents the buffer however
//! it likes.

extern crate crossbeam;
#[macro_use]
extern crate failure;
extern crate itertools;
#[macro_use]
extern crate log;
extern crate num;

#[cfg(test)]
extern crate rand;

pub mod color;
pub mod config;
pub mod error;
pub mod escape;
pub mod input;
pub mod render;
pub mod view;

pub use color::{color_for, Rgb};
pub use config::SessionConfig;
pub use error::JuliaError;
pub use escape::iterate;
pub use input::{Click, ZoomCommand};
pub use render::Renderer;
pub use view::ViewTransform;
