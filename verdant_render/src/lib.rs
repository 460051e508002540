// Copyright 2025 the Verdant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Growth-keyed plant rendering on top of `verdant_lsystem`.
//!
//! The crate is organized around one type, [`PlantEngine`]: constructed once
//! (grammar expansion and geometry analysis happen exactly once, up front),
//! fed a growth fraction by an external timer through
//! [`PlantEngine::set_growth_progress`], and asked for a [`Frame`] on every
//! display refresh.
//!
//! A frame is a backend-neutral display list: a circular clip plus an
//! ordered run of [`DrawOp`]s (`kurbo` paths painted with `peniko` brushes).
//! Backends only replay it; the SVG and Vello demo crates are both thin
//! consumers of the same list. No backend API leaks into this crate.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod color;
mod engine;
#[cfg(not(feature = "std"))]
mod float;
mod growth;
mod ornaments;
mod pipeline;
mod style;

pub use engine::{EngineError, PlantEngine, Size};
pub use growth::{GrowthProgress, MIN_VISIBLE_SCALE};
pub use pipeline::{DrawOp, Frame, PlantPart};
pub use style::PlantStyle;
