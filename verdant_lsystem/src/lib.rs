// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! L-system plumbing for the Verdant plant engine.
//!
//! This crate owns everything that happens *before* a frame is drawn:
//! - **Grammar expansion**: an axiom string rewritten through a fixed number
//!   of generations into the final symbol sequence.
//! - **Deterministic jitter**: a stateless index → `[0, 1)` hash used for
//!   angle noise and ornament placement.
//! - **Turtle interpretation**: a single shared walker over the symbol
//!   sequence with an explicit branch stack, abstracted over a visitor so
//!   the measure pass and the draw pass cannot drift apart.
//! - **Geometry analysis**: the measure visitor, producing the tight
//!   bounding box of the fully-grown plant.
//!
//! Rendering lives downstream in `verdant_render`; this crate has no drawing
//! dependencies and is `no_std + alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bounds;
#[cfg(not(feature = "std"))]
mod float;
mod grammar;
mod jitter;
mod turtle;

pub use bounds::{PlantBounds, measure};
pub use grammar::{Grammar, Symbol};
pub use jitter::jitter;
pub use turtle::{TurtleVisitor, WalkError, walk};
