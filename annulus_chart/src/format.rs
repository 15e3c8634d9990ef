// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value formatting hooks.
//!
//! The chart never interprets raw values beyond summing them; how an amount reads on screen
//! (currency symbol, separators, precision) belongs to the host, which supplies a
//! [`ValueFormatter`] the same way it supplies a [`crate::TextMeasurer`].

extern crate alloc;

use alloc::format;
use alloc::string::String;

/// Formats raw values for display (the center readout and the legend value column).
pub trait ValueFormatter {
    /// Returns the display string for `value`.
    fn format(&self, value: f64) -> String;
}

/// A plain two-decimal formatter, suitable for demos and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedFormatter;

impl ValueFormatter for FixedFormatter {
    fn format(&self, value: f64) -> String {
        format!("{value:.2}")
    }
}

/// Integer-percent label for `value`'s share of `total` (e.g. `"71%"`).
///
/// A zero total reads as a zero share; no division happens in that case.
pub(crate) fn percent_label(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.0}%", value * 100.0 / total)
    } else {
        String::from("0%")
    }
}
