// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer-to-slice hit testing and the active-slice state machine.

use core::f64::consts::TAU;

use kurbo::Vec2;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::slices::Slice;

/// Resolves a pointer position to the slice under it.
///
/// `offset` is the pointer position relative to the ring center, in screen coordinates
/// (y grows downward). Returns `None` outside the outer radius or inside the donut hole
/// (`distance < outer_radius * inner_radius_fraction`).
///
/// The pointer angle is measured from 12 o'clock, growing clockwise on screen, and is
/// matched against the ascending contiguous spans produced by
/// [`compute_slices`](crate::compute_slices): the first slice whose end angle strictly
/// exceeds the pointer angle wins, so a pointer exactly on a shared boundary resolves to
/// the later slice that starts there.
///
/// Never panics for finite input; a degenerate (zero-total) slice set resolves to `None`.
pub fn hit_test(
    offset: Vec2,
    outer_radius: f64,
    inner_radius_fraction: f64,
    slices: &[Slice],
) -> Option<usize> {
    let distance = (offset.x * offset.x + offset.y * offset.y).sqrt();
    if distance > outer_radius || distance < outer_radius * inner_radius_fraction {
        return None;
    }

    // atan2 against the upward direction puts 0 at 12 o'clock; negative results are the
    // counterclockwise half, folded into [0, 2pi).
    let mut radians = offset.x.atan2(-offset.y);
    if radians < 0.0 {
        radians += TAU;
    }
    let degrees = radians.to_degrees();

    slices.iter().position(|slice| degrees < slice.end_angle)
}

/// The single piece of widget state: which slice the pointer is currently over.
///
/// Owned by the hosting view for the duration of a pointer gesture. Drag start/move events
/// feed [`PieChartState::pointer_moved`]; the end of the gesture feeds
/// [`PieChartState::pointer_released`], which unconditionally clears the active slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PieChartState {
    active: Option<usize>,
}

impl PieChartState {
    /// Creates a state with no active slice.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active slice index, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Handles a drag start/move at `offset` from the ring center.
    ///
    /// Moving outside the ring or into the hole clears the active slice.
    pub fn pointer_moved(
        &mut self,
        offset: Vec2,
        outer_radius: f64,
        inner_radius_fraction: f64,
        slices: &[Slice],
    ) {
        self.active = hit_test(offset, outer_radius, inner_radius_fraction, slices);
    }

    /// Handles the end of a drag gesture.
    pub fn pointer_released(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use crate::slices::compute_slices;

    use super::*;

    const OUTER: f64 = 100.0;
    const HOLE_FRACTION: f64 = 0.6;

    /// Offset of a point at `degrees` (from 12 o'clock, clockwise) and `distance`.
    fn at(degrees: f64, distance: f64) -> Vec2 {
        let radians = degrees.to_radians();
        Vec2::new(distance * radians.sin(), -distance * radians.cos())
    }

    #[test]
    fn midpoint_probe_round_trips_to_its_slice() {
        let slices = compute_slices(&[1600.0, 300.0, 350.0]);
        let probe_distance = 0.5 * (OUTER + OUTER * HOLE_FRACTION);
        for (i, slice) in slices.iter().enumerate() {
            let hit = hit_test(
                at(slice.mid_angle(), probe_distance),
                OUTER,
                HOLE_FRACTION,
                &slices,
            );
            assert_eq!(hit, Some(i), "mid-angle probe of slice {i}");
        }
    }

    #[test]
    fn outside_and_hole_resolve_to_none() {
        let slices = compute_slices(&[1.0, 2.0]);
        let hit = |d| hit_test(at(45.0, d), OUTER, HOLE_FRACTION, &slices);

        assert_eq!(hit(OUTER + 1e-6), None, "just outside the ring");
        assert_eq!(hit(OUTER * HOLE_FRACTION - 1e-6), None, "just inside the hole");
        assert!(hit(OUTER).is_some(), "on the outer rim");
        assert!(hit(OUTER * HOLE_FRACTION).is_some(), "on the hole rim");
    }

    #[test]
    fn dead_center_is_inside_the_hole() {
        let slices = compute_slices(&[1.0, 1.0]);
        assert_eq!(hit_test(Vec2::ZERO, OUTER, HOLE_FRACTION, &slices), None);
    }

    #[test]
    fn dead_center_hits_when_there_is_no_hole() {
        let slices = compute_slices(&[1.0]);
        assert_eq!(hit_test(Vec2::ZERO, OUTER, 0.0, &slices), Some(0));
    }

    #[test]
    fn shared_boundary_resolves_to_the_later_slice() {
        // Two equal slices share the 180-degree boundary. Straight down is exactly on it
        // (atan2(+0, -1) is exactly pi), which must resolve to the slice starting there.
        let slices = compute_slices(&[1.0, 1.0]);
        let hit = hit_test(Vec2::new(0.0, 80.0), OUTER, HOLE_FRACTION, &slices);
        assert_eq!(hit, Some(1));
    }

    #[test]
    fn twelve_o_clock_belongs_to_the_first_slice() {
        let slices = compute_slices(&[1.0, 1.0, 1.0]);
        assert_eq!(hit_test(at(0.0, 80.0), OUTER, HOLE_FRACTION, &slices), Some(0));
    }

    #[test]
    fn zero_total_never_resolves() {
        let slices = compute_slices(&[0.0, 0.0]);
        assert_eq!(hit_test(at(90.0, 80.0), OUTER, HOLE_FRACTION, &slices), None);
    }

    #[test]
    fn state_machine_tracks_and_clears() {
        let slices = compute_slices(&[1.0, 1.0]);
        let mut state = PieChartState::new();
        assert_eq!(state.active(), None);

        // Drag onto the second slice.
        state.pointer_moved(at(270.0, 80.0), OUTER, HOLE_FRACTION, &slices);
        assert_eq!(state.active(), Some(1));

        // Drag out of the ring clears.
        state.pointer_moved(at(270.0, OUTER * 2.0), OUTER, HOLE_FRACTION, &slices);
        assert_eq!(state.active(), None);

        // Back in, then release clears from any state.
        state.pointer_moved(at(45.0, 80.0), OUTER, HOLE_FRACTION, &slices);
        assert_eq!(state.active(), Some(0));
        state.pointer_released();
        assert_eq!(state.active(), None);
    }
}
