// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw commands produced by chart rendering.
//!
//! Rendering is an explicit call: the host asks the chart for its marks whenever the
//! configuration or the active slice changes, sorts them into paint order, and paints.
//! There is no retained scene and no diffing; a mark is a plain value.
//!
//! Text marks store unshaped strings; shaping and glyph layout are the renderer's concern.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect};
use peniko::{Brush, Color};

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    /// Anchor at the start (left) edge of the text.
    Start,
    /// Anchor at the horizontal center of the text.
    Middle,
    /// Anchor at the end (right) edge of the text.
    End,
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextBaseline {
    /// Center the text vertically on the anchor point.
    Middle,
    /// Place the alphabetic baseline on the anchor point.
    Alphabetic,
    /// Hang the text below the anchor point.
    Hanging,
}

/// An outline stroke (paint + width).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub width: f64,
}

impl StrokeStyle {
    /// Convenience constructor for a solid-color stroke.
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            brush: Brush::Solid(color),
            width,
        }
    }
}

/// A filled (and optionally stroked) path mark.
#[derive(Clone, Debug)]
pub struct PathMark {
    /// Path in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline stroke.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint.
    pub z_index: i32,
}

/// An axis-aligned filled rectangle mark.
#[derive(Clone, Debug)]
pub struct RectMark {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Corner radius (0 for sharp corners).
    pub corner_radius: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A text mark (unshaped string).
#[derive(Clone, Debug)]
pub struct TextMark {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

/// A single draw command.
#[derive(Clone, Debug)]
pub enum Mark {
    /// A filled/stroked path.
    Path(PathMark),
    /// A filled rectangle.
    Rect(RectMark),
    /// A text run.
    Text(TextMark),
}

impl Mark {
    /// Rendering order hint; renderers paint in ascending z.
    pub fn z_index(&self) -> i32 {
        match self {
            Self::Path(m) => m.z_index,
            Self::Rect(m) => m.z_index,
            Self::Text(m) => m.z_index,
        }
    }
}

/// Sorts marks into paint order (ascending z; stable within equal z).
pub fn sort_for_paint(marks: &mut [Mark]) {
    marks.sort_by_key(|m| m.z_index());
}
