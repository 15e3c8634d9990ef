// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The donut chart widget: configuration plus mark generation.
//!
//! Rendering is a plain function of the configuration and the active slice: the host calls
//! [`PieChartSpec::render`] whenever either changes and paints the returned marks. Pointer
//! events are resolved through [`PieChartSpec::hit_test`] against the returned layout; the
//! active slice itself lives in [`crate::PieChartState`], owned by the host.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::FRAC_PI_2;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::format::ValueFormatter;
use crate::layout::{ChartLayout, ChartLayoutSpec, Size, SizeClass};
use crate::legend::{LegendEntry, LegendSpec};
use crate::mark::{Mark, PathMark, TextAnchor, TextBaseline, TextMark};
use crate::measure::TextMeasurer;
use crate::palette::Palette;
use crate::slices::{Slice, compute_slices};
use crate::z_order;

/// Radial fraction at which percent labels sit, relative to the wedge radius.
const LABEL_RADIUS_FRACTION: f64 = 0.78;
/// Extra scale applied to the pointer-active wedge.
const ACTIVE_SCALE: f64 = 1.1;
/// Percent label font size.
const SLICE_LABEL_FONT_SIZE: f64 = 12.0;
/// Curve flattening tolerance when converting wedges and the hole to a `BezPath`.
const TOLERANCE: f64 = 0.1;

/// An interactive donut chart over parallel value/name sequences.
///
/// The configuration is immutable per render apart from the palette, whose random fallback
/// (if selected) advances its generator on lookup; that is why [`PieChartSpec::render`]
/// takes `&mut self`.
#[derive(Clone, Debug)]
pub struct PieChartSpec {
    values: Vec<f64>,
    names: Vec<String>,
    palette: Palette,
    background: Color,
    size_class: SizeClass,
    inner_radius_fraction: f64,
    legend_values: bool,
}

impl PieChartSpec {
    /// Creates a chart for parallel `values`/`names`.
    ///
    /// # Panics
    ///
    /// Panics when the two sequences differ in length, or when any value is negative or
    /// non-finite. Both are precondition violations on the caller's side; the chart never
    /// tries to render mismatched rows.
    pub fn new(values: Vec<f64>, names: Vec<String>) -> Self {
        assert_eq!(
            values.len(),
            names.len(),
            "values and names must be the same length"
        );
        assert!(
            values.iter().all(|v| v.is_finite() && *v >= 0.0),
            "values must be finite and non-negative"
        );
        Self {
            values,
            names,
            palette: Palette::default(),
            background: css::WHITE,
            size_class: SizeClass::Compact,
            inner_radius_fraction: 0.60,
            legend_values: false,
        }
    }

    /// Sets the slice palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the background color used for the donut hole.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the chart scale.
    pub fn with_size_class(mut self, size_class: SizeClass) -> Self {
        self.size_class = size_class;
        self
    }

    /// Sets the donut hole radius as a fraction of the outer radius.
    ///
    /// Fractions outside `[0, 0.99]` are clamped; 0 disables the hole entirely.
    pub fn with_inner_radius_fraction(mut self, fraction: f64) -> Self {
        self.inner_radius_fraction = fraction.clamp(0.0, 0.99);
        self
    }

    /// Enables or disables the legend's value/percent column.
    pub fn with_legend_values(mut self, legend_values: bool) -> Self {
        self.legend_values = legend_values;
        self
    }

    /// The configured values, in input order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The configured names, in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The donut hole radius as a fraction of the outer radius.
    pub fn inner_radius_fraction(&self) -> f64 {
        self.inner_radius_fraction
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Computes the angular slices for the current values.
    pub fn slices(&self) -> Vec<Slice> {
        compute_slices(&self.values)
    }

    /// Resolves a pointer position (in view coordinates) against a computed layout.
    pub fn hit_test(&self, layout: &ChartLayout, pointer: Point) -> Option<usize> {
        crate::hit::hit_test(
            pointer - layout.center,
            layout.outer_radius,
            self.inner_radius_fraction,
            &self.slices(),
        )
    }

    /// Renders the chart into draw commands for the given view size and active slice.
    ///
    /// Returns the computed layout (for subsequent hit testing) and the marks in emission
    /// order; sort by z before painting (see [`crate::sort_for_paint`]).
    pub fn render(
        &mut self,
        measurer: &dyn TextMeasurer,
        formatter: &dyn ValueFormatter,
        view: Size,
        active: Option<usize>,
    ) -> (ChartLayout, Vec<Mark>) {
        let active = active.filter(|i| *i < self.values.len());
        let slices = self.slices();
        let fills: Vec<Color> = (0..self.values.len())
            .map(|i| self.palette.color_for(i))
            .collect();

        let legend = self.legend_spec(formatter, &slices, &fills);
        let layout = ChartLayout::arrange(&ChartLayoutSpec {
            view_size: view,
            size_class: self.size_class,
            legend: Some(legend.measure(measurer)),
            ..ChartLayoutSpec::default()
        });

        let mut marks = Vec::new();
        self.ring_marks(&mut marks, &layout, &slices, &fills, active);
        self.center_marks(&mut marks, formatter, layout.center, active);
        marks.extend(legend.marks(Point::new(layout.legend.x0, layout.legend.y0), measurer));
        (layout, marks)
    }

    fn ring_marks(
        &self,
        out: &mut Vec<Mark>,
        layout: &ChartLayout,
        slices: &[Slice],
        fills: &[Color],
        active: Option<usize>,
    ) {
        for (i, slice) in slices.iter().enumerate() {
            if slice.span() <= 0.0 {
                continue;
            }
            let radius = if active == Some(i) {
                layout.outer_radius * ACTIVE_SCALE
            } else {
                layout.outer_radius
            };

            // Wedge angles are measured from the positive x axis in kurbo; the chart's 0 is
            // at 12 o'clock, a quarter turn earlier.
            let start = slice.start_angle.to_radians() - FRAC_PI_2;
            let sweep = slice.span().to_radians();
            let path: BezPath = Circle::new(layout.center, radius)
                .segment(0.0, start, sweep)
                .path_elements(TOLERANCE)
                .collect();
            out.push(Mark::Path(PathMark {
                path,
                fill: Brush::Solid(fills[i]),
                stroke: None,
                z_index: z_order::RING_SLICES,
            }));

            let mid = slice.mid_angle().to_radians();
            let label_radius = LABEL_RADIUS_FRACTION * radius;
            out.push(Mark::Text(TextMark {
                pos: Point::new(
                    layout.center.x + label_radius * mid.sin(),
                    layout.center.y - label_radius * mid.cos(),
                ),
                text: slice.label.clone(),
                font_size: SLICE_LABEL_FONT_SIZE,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                fill: css::WHITE.into(),
                z_index: z_order::SLICE_LABELS,
            }));
        }

        if self.inner_radius_fraction > 0.0 {
            let hole = Circle::new(
                layout.center,
                layout.outer_radius * self.inner_radius_fraction,
            );
            out.push(Mark::Path(PathMark {
                path: hole.path_elements(TOLERANCE).collect(),
                fill: Brush::Solid(self.background),
                stroke: None,
                z_index: z_order::HOLE,
            }));
        }
    }

    /// Emits the hole readout: the active slice's name and value, or the grand total.
    fn center_marks(
        &self,
        out: &mut Vec<Mark>,
        formatter: &dyn ValueFormatter,
        center: Point,
        active: Option<usize>,
    ) {
        let (name, value) = match active {
            Some(i) => (self.names[i].as_str(), self.values[i]),
            None => ("Total", self.total()),
        };
        let font_size = match self.size_class {
            SizeClass::Compact => 16.0,
            SizeClass::Large => 24.0,
        };

        out.push(Mark::Text(TextMark {
            pos: Point::new(center.x, center.y - 0.7 * font_size),
            text: String::from(name),
            font_size,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            fill: css::GRAY.into(),
            z_index: z_order::CENTER_TEXT,
        }));
        out.push(Mark::Text(TextMark {
            pos: Point::new(center.x, center.y + 0.7 * font_size),
            text: formatter.format(value),
            font_size,
            anchor: TextAnchor::Middle,
            baseline: TextBaseline::Middle,
            fill: css::DIM_GRAY.into(),
            z_index: z_order::CENTER_TEXT,
        }));
    }

    fn legend_spec(
        &self,
        formatter: &dyn ValueFormatter,
        slices: &[Slice],
        fills: &[Color],
    ) -> LegendSpec {
        let entries: Vec<LegendEntry> = self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                LegendEntry::new(
                    name.clone(),
                    fills[i],
                    formatter.format(self.values[i]),
                    slices[i].label.clone(),
                )
            })
            .collect();
        LegendSpec::new(entries).with_show_values(self.legend_values)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_lengths_panic_at_construction() {
        let _ = PieChartSpec::new(vec![1.0, 2.0], names(&["only one"]));
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn negative_values_panic_at_construction() {
        let _ = PieChartSpec::new(vec![1.0, -2.0], names(&["a", "b"]));
    }

    #[test]
    #[should_panic(expected = "finite and non-negative")]
    fn nan_values_panic_at_construction() {
        let _ = PieChartSpec::new(vec![f64::NAN], names(&["a"]));
    }

    #[test]
    fn inner_radius_fraction_is_clamped() {
        let chart = PieChartSpec::new(vec![1.0], names(&["a"])).with_inner_radius_fraction(7.0);
        assert_eq!(chart.inner_radius_fraction(), 0.99);
        let chart = PieChartSpec::new(vec![1.0], names(&["a"])).with_inner_radius_fraction(-1.0);
        assert_eq!(chart.inner_radius_fraction(), 0.0);
    }

    #[test]
    fn total_sums_the_values() {
        let chart = PieChartSpec::new(vec![1600.0, 300.0, 350.0], names(&["r", "g", "u"]));
        assert_eq!(chart.total(), 2250.0);
    }
}
