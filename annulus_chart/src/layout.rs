// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for the ring + legend pair.
//!
//! This follows the same basic shape as WPF-style layout:
//! - **Measure**: the legend reports its desired extents via a text measurer.
//! - **Arrange**: the ring square and legend column are placed inside the available view.
//!
//! The ring and legend form a horizontal pair: the legend sits to the right of the ring
//! with a fixed gap, both vertically centered, and the pair is packed toward the trailing
//! edge of the padded view.

use kurbo::{Point, Rect};

/// A width/height pair used by chart layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in chart coordinate units.
    pub width: f64,
    /// Height in chart coordinate units.
    pub height: f64,
}

/// The two supported chart scales.
///
/// The factor is applied to the padded view width to obtain the ring diameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeClass {
    /// A compact chart (45% of the available width).
    #[default]
    Compact,
    /// A large chart (75% of the available width).
    Large,
}

impl SizeClass {
    /// The fraction of the padded view width used for the ring diameter.
    pub fn factor(self) -> f64 {
        match self {
            Self::Compact => 0.45,
            Self::Large => 0.75,
        }
    }
}

/// Layout inputs for a single chart render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayoutSpec {
    /// Outer view bounds the chart must fit into.
    pub view_size: Size,
    /// Ring scale relative to the padded view width.
    pub size_class: SizeClass,
    /// Padding around the whole chart (applied on all sides).
    pub padding: f64,
    /// Horizontal gap between the ring and the legend.
    pub spacing: f64,
    /// Desired legend size, from the legend's measure pass. `None` hides the legend.
    pub legend: Option<Size>,
}

impl Default for ChartLayoutSpec {
    fn default() -> Self {
        Self {
            view_size: Size {
                width: 360.0,
                height: 180.0,
            },
            size_class: SizeClass::Compact,
            padding: 16.0,
            spacing: 20.0,
            legend: None,
        }
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// Outer chart bounds.
    pub view: Rect,
    /// The square the ring is drawn in.
    pub ring: Rect,
    /// The legend rectangle (zero-sized when no legend was measured).
    pub legend: Rect,
    /// Ring center in view coordinates.
    pub center: Point,
    /// Ring outer radius.
    pub outer_radius: f64,
}

impl ChartLayout {
    /// Computes a layout from the provided specification.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let padding = spec.padding.max(0.0);
        let view = Rect::new(0.0, 0.0, spec.view_size.width.max(0.0), spec.view_size.height.max(0.0));
        let inner = Rect::new(
            (view.x0 + padding).min(view.x1),
            (view.y0 + padding).min(view.y1),
            (view.x1 - padding).max(view.x0),
            (view.y1 - padding).max(view.y0),
        );

        let diameter = spec.size_class.factor() * inner.width();
        let legend_size = spec.legend.unwrap_or_default();
        let spacing = if spec.legend.is_some() {
            spec.spacing.max(0.0)
        } else {
            0.0
        };

        // Pack the pair toward the trailing edge, but never past the leading padding.
        let content_width = diameter + spacing + legend_size.width;
        let x0 = (inner.x1 - content_width).max(inner.x0);

        let ring_y0 = inner.y0 + 0.5 * (inner.height() - diameter);
        let ring = Rect::new(x0, ring_y0, x0 + diameter, ring_y0 + diameter);

        let legend_y0 = inner.y0 + 0.5 * (inner.height() - legend_size.height);
        let legend_x0 = ring.x1 + spacing;
        let legend = Rect::new(
            legend_x0,
            legend_y0,
            legend_x0 + legend_size.width,
            legend_y0 + legend_size.height,
        );

        Self {
            view,
            ring,
            legend,
            center: ring.center(),
            outer_radius: 0.5 * diameter,
        }
    }
}
