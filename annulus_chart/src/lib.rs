// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive pie/donut chart widget, reduced to plain functions and draw commands.
//!
//! Three small, independent pieces do all the work:
//! - **Slice geometry** ([`compute_slices`]) turns a value sequence into contiguous
//!   clockwise angular spans with percent labels.
//! - **Hit testing** ([`hit_test`]) maps a pointer offset to the slice under it, rejecting
//!   points outside the ring or inside the donut hole; [`PieChartState`] holds the one
//!   piece of interaction state (the active slice) across a drag gesture.
//! - **Color assignment** ([`Palette`]) resolves slice indices to colors, with a
//!   deterministic or random fallback for indices past the configured list.
//!
//! [`PieChartSpec`] composes them: `render(config, active)` produces positioned
//! [`Mark`] draw commands (ring wedges, percent labels, hole, center readout, legend) that
//! a host paints in z order. There is no retained scene, no reactivity, and no text
//! shaping; text marks carry unshaped strings and layout uses a [`TextMeasurer`] callback.

#![no_std]

extern crate alloc;

mod chart;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod hit;
mod layout;
mod legend;
mod mark;
mod measure;
mod palette;
mod slices;
pub mod z_order;

pub use chart::PieChartSpec;
pub use format::{FixedFormatter, ValueFormatter};
pub use hit::{PieChartState, hit_test};
pub use layout::{ChartLayout, ChartLayoutSpec, Size, SizeClass};
pub use legend::{LegendEntry, LegendSpec};
pub use mark::{
    Mark, PathMark, RectMark, StrokeStyle, TextAnchor, TextBaseline, TextMark, sort_for_paint,
};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use palette::{Fallback, Palette};
pub use slices::{Slice, compute_slices};
