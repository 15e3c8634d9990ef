// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend mark generation: one row per chart entry, a rounded color swatch plus the entry
//! name, with an optional trailing value/percent column.
//!
//! The value column is part of the layout contract but disabled by default, matching the
//! widget's host UI, which ships with slice details turned off.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::layout::Size;
use crate::mark::{Mark, RectMark, TextAnchor, TextBaseline, TextMark};
use crate::measure::TextMeasurer;
use crate::z_order;

/// A single legend row: swatch color, entry name, and preformatted value/percent strings.
#[derive(Clone, Debug)]
pub struct LegendEntry {
    /// The entry name shown next to the swatch.
    pub name: String,
    /// The swatch fill paint.
    pub fill: Brush,
    /// Formatted raw value (shown only when the value column is enabled).
    pub value: String,
    /// Formatted percent share (shown only when the value column is enabled).
    pub percent: String,
}

impl LegendEntry {
    /// Creates a row with a solid-color swatch.
    pub fn new(
        name: impl Into<String>,
        color: Color,
        value: impl Into<String>,
        percent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            fill: Brush::Solid(color),
            value: value.into(),
            percent: percent.into(),
        }
    }
}

/// A vertical list of legend rows.
///
/// Use this with a measure/arrange layout pass: [`LegendSpec::measure`] reports the desired
/// size, and [`LegendSpec::marks`] emits the rows once the origin is known.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    /// Swatch square size.
    pub swatch_size: f64,
    /// Swatch corner radius.
    pub corner_radius: f64,
    /// Vertical gap between rows.
    pub row_gap: f64,
    /// Horizontal gap between swatch and name.
    pub label_dx: f64,
    /// Horizontal gap between the name column and the value column.
    pub value_gap: f64,
    /// Label font size.
    pub font_size: f64,
    /// Name label paint.
    pub text_fill: Brush,
    /// Value/percent column paint.
    pub value_fill: Brush,
    /// Whether the trailing value/percent column is rendered.
    pub show_values: bool,
    /// Rows in display order.
    pub entries: Vec<LegendEntry>,
}

impl LegendSpec {
    /// Creates a legend with default styling and the value column disabled.
    pub fn new(entries: Vec<LegendEntry>) -> Self {
        Self {
            swatch_size: 20.0,
            corner_radius: 5.0,
            row_gap: 8.0,
            label_dx: 8.0,
            value_gap: 12.0,
            font_size: 13.0,
            text_fill: css::GRAY.into(),
            value_fill: css::GRAY.into(),
            show_values: false,
            entries,
        }
    }

    /// Enables or disables the trailing value/percent column.
    pub fn with_show_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the name label paint.
    pub fn with_text_fill(mut self, text_fill: impl Into<Brush>) -> Self {
        self.text_fill = text_fill.into();
        self
    }

    /// Sets the swatch size.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    fn row_height(&self) -> f64 {
        let text_height = if self.show_values {
            // Value over percent, stacked.
            2.2 * self.font_size
        } else {
            self.font_size
        };
        self.swatch_size.max(text_height)
    }

    /// Measures the desired legend size (width/height).
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let mut name_width = 0.0_f64;
        let mut value_width = 0.0_f64;
        for entry in &self.entries {
            let (w, _h) = measurer.measure(&entry.name, self.font_size);
            name_width = name_width.max(w);
            if self.show_values {
                let (vw, _) = measurer.measure(&entry.value, self.font_size);
                let (pw, _) = measurer.measure(&entry.percent, self.font_size);
                value_width = value_width.max(vw).max(pw);
            }
        }

        let mut width = self.swatch_size + self.label_dx + name_width;
        if self.show_values {
            width += self.value_gap + value_width;
        }

        let rows = self.entries.len();
        let height = if rows == 0 {
            0.0
        } else {
            rows as f64 * self.row_height() + (rows - 1) as f64 * self.row_gap
        };

        Size { width, height }
    }

    /// Generates legend marks for the given origin (top-left).
    pub fn marks(&self, origin: Point, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let width = self.measure(measurer).width;
        let row_height = self.row_height();
        let mut out = Vec::new();

        for (i, entry) in self.entries.iter().enumerate() {
            let y = origin.y + i as f64 * (row_height + self.row_gap);
            let center_y = y + 0.5 * row_height;
            let swatch_y = center_y - 0.5 * self.swatch_size;

            out.push(Mark::Rect(RectMark {
                rect: Rect::new(
                    origin.x,
                    swatch_y,
                    origin.x + self.swatch_size,
                    swatch_y + self.swatch_size,
                ),
                corner_radius: self.corner_radius,
                fill: entry.fill.clone(),
                z_index: z_order::LEGEND_SWATCHES,
            }));

            out.push(Mark::Text(TextMark {
                pos: Point::new(origin.x + self.swatch_size + self.label_dx, center_y),
                text: entry.name.clone(),
                font_size: self.font_size,
                anchor: TextAnchor::Start,
                baseline: TextBaseline::Middle,
                fill: self.text_fill.clone(),
                z_index: z_order::LEGEND_LABELS,
            }));

            if self.show_values {
                let trailing_x = origin.x + width;
                out.push(Mark::Text(TextMark {
                    pos: Point::new(trailing_x, center_y - 0.55 * self.font_size),
                    text: entry.value.clone(),
                    font_size: self.font_size,
                    anchor: TextAnchor::End,
                    baseline: TextBaseline::Middle,
                    fill: self.text_fill.clone(),
                    z_index: z_order::LEGEND_LABELS,
                }));
                out.push(Mark::Text(TextMark {
                    pos: Point::new(trailing_x, center_y + 0.55 * self.font_size),
                    text: entry.percent.clone(),
                    font_size: self.font_size,
                    anchor: TextAnchor::End,
                    baseline: TextBaseline::Middle,
                    fill: self.value_fill.clone(),
                    z_index: z_order::LEGEND_LABELS,
                }));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn entries() -> Vec<LegendEntry> {
        vec![
            LegendEntry::new("Rent", css::TOMATO, "$1600.00", "71%"),
            LegendEntry::new("Gas", css::GOLD, "$300.00", "13%"),
            LegendEntry::new("Utilities", css::TEAL, "$350.00", "16%"),
        ]
    }

    #[test]
    fn one_swatch_and_one_name_per_row_by_default() {
        let legend = LegendSpec::new(entries());
        let marks = legend.marks(Point::ZERO, &HeuristicTextMeasurer);
        assert_eq!(marks.len(), 6);

        let rects = marks.iter().filter(|m| matches!(m, Mark::Rect(_))).count();
        assert_eq!(rects, 3);
    }

    #[test]
    fn value_column_adds_two_texts_per_row() {
        let legend = LegendSpec::new(entries()).with_show_values(true);
        let marks = legend.marks(Point::ZERO, &HeuristicTextMeasurer);
        assert_eq!(marks.len(), 12);
    }

    #[test]
    fn value_column_widens_the_measured_size() {
        let measurer = HeuristicTextMeasurer;
        let without = LegendSpec::new(entries()).measure(&measurer);
        let with = LegendSpec::new(entries())
            .with_show_values(true)
            .measure(&measurer);
        assert!(with.width > without.width);
        assert!(with.height >= without.height);
    }

    #[test]
    fn rows_are_spaced_top_to_bottom() {
        let legend = LegendSpec::new(entries());
        let marks = legend.marks(Point::new(10.0, 20.0), &HeuristicTextMeasurer);
        let swatch_tops: Vec<f64> = marks
            .iter()
            .filter_map(|m| match m {
                Mark::Rect(r) => Some(r.rect.y0),
                _ => None,
            })
            .collect();
        assert!(swatch_tops.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn empty_legend_measures_to_nothing_tall() {
        let legend = LegendSpec::new(Vec::new());
        let size = legend.measure(&HeuristicTextMeasurer);
        assert_eq!(size.height, 0.0);
    }
}
