// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slice geometry: partitioning the full circle proportionally to a value sequence.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::format::percent_label;

/// One angular wedge of the chart, representing one value's share of the total.
///
/// Angles are in degrees, with 0 at 12 o'clock and values increasing clockwise in screen
/// coordinates. Slices are contiguous in input order: each slice starts where the previous
/// one ends, the first starts at 0, and the last ends at 360 when the value total is
/// positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    /// Start angle in degrees.
    pub start_angle: f64,
    /// End angle in degrees.
    pub end_angle: f64,
    /// Precomputed integer-percent label (e.g. `"71%"`).
    pub label: String,
}

impl Slice {
    /// The angular span of this slice in degrees.
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// The mid angle of this slice in degrees.
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }
}

/// Computes proportional slices for `values`, in input order.
///
/// Each slice's span is `value * 360 / total`. When the total is zero every slice
/// degenerates to a zero span at angle 0 and every label reads `"0%"`; no division by zero
/// occurs. Pure function: same input, same output.
pub fn compute_slices(values: &[f64]) -> Vec<Slice> {
    let total: f64 = values.iter().sum();
    let mut cursor = 0.0_f64;
    let mut out = Vec::with_capacity(values.len());
    for &value in values {
        let span = if total > 0.0 { value * 360.0 / total } else { 0.0 };
        out.push(Slice {
            start_angle: cursor,
            end_angle: cursor + span,
            label: percent_label(value, total),
        });
        cursor += span;
    }
    out
}
