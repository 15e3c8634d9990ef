// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart-generated marks.
//!
//! Every mark carries an explicit `z_index` for render ordering. The chart sets z-indexes
//! consistently so hosts don't have to hand-tune paint order: wedges are painted first, the
//! donut hole covers their inner portion, and text sits on top.
//!
//! Renderers should sort marks by `z_index` with a stable sort; the chart emits marks in a
//! deterministic order, so a stable sort gives a deterministic paint order.

/// Ring wedges (one per nonzero-span slice).
pub const RING_SLICES: i32 = 0;
/// Percent labels placed on the wedges.
pub const SLICE_LABELS: i32 = 10;
/// The donut hole fill, painted over the inner part of the wedges.
pub const HOLE: i32 = 20;
/// The name/value readout inside the hole.
pub const CENTER_TEXT: i32 = 30;
/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 40;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 50;
