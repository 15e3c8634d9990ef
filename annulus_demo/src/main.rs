// Copyright 2025 the Annulus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut chart demos for `annulus_chart`.

mod svg;

use annulus_chart::{
    Fallback, FixedFormatter, HeuristicTextMeasurer, Palette, PieChartSpec, PieChartState, Size,
    SizeClass, ValueFormatter,
};
use kurbo::Vec2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const VIEW: Size = Size {
    width: 420.0,
    height: 200.0,
};

struct Section {
    title: String,
    note: String,
    svg: String,
}

/// A dollar-amount formatter matching the widget's host app.
struct Dollars;

impl ValueFormatter for Dollars {
    fn format(&self, value: f64) -> String {
        format!("${value:.2}")
    }
}

fn main() {
    let sections = vec![
        reference_demo(),
        active_slice_demo(),
        fallback_palette_demo(),
        zero_total_demo(),
    ];

    let html = render_report("annulus chart demo", &sections);
    std::fs::write("annulus_demo.html", html).expect("write annulus_demo.html");
    println!("wrote annulus_demo.html");
}

fn reference_chart() -> PieChartSpec {
    PieChartSpec::new(
        vec![1600.0, 300.0, 350.0],
        vec!["Rent".into(), "Gas".into(), "Utilities".into()],
    )
}

fn reference_demo() -> Section {
    let mut chart = reference_chart().with_legend_values(true);
    let (layout, marks) = chart.render(&HeuristicTextMeasurer, &Dollars, VIEW, None);
    Section {
        title: "Monthly expenses".into(),
        note: "Default state: the hole shows the grand total; the legend value column is \
               enabled here."
            .into(),
        svg: svg::render_svg(layout.view, &marks),
    }
}

fn active_slice_demo() -> Section {
    let mut chart = reference_chart();
    let (layout, _) = chart.render(&HeuristicTextMeasurer, &Dollars, VIEW, None);

    // Simulate a drag onto the midpoint of the "Rent" slice.
    let slices = chart.slices();
    let mid = slices[0].mid_angle().to_radians();
    let distance = 0.5 * (1.0 + chart.inner_radius_fraction()) * layout.outer_radius;
    let mut state = PieChartState::new();
    state.pointer_moved(
        Vec2::new(distance * mid.sin(), -distance * mid.cos()),
        layout.outer_radius,
        chart.inner_radius_fraction(),
        &slices,
    );

    let (layout, marks) = chart.render(&HeuristicTextMeasurer, &Dollars, VIEW, state.active());
    Section {
        title: "Pointer-active slice".into(),
        note: "A simulated drag rests on the first slice: its wedge scales up and the hole \
               readout switches to the slice's name and value."
            .into(),
        svg: svg::render_svg(layout.view, &marks),
    }
}

fn fallback_palette_demo() -> Section {
    let values: Vec<f64> = (1..=14).map(f64::from).collect();
    let names: Vec<String> = (1..=14).map(|i| format!("Series {i}")).collect();
    let palette = Palette::default().with_fallback(Fallback::Random(SmallRng::seed_from_u64(14)));

    let mut chart = PieChartSpec::new(values, names)
        .with_palette(palette)
        .with_size_class(SizeClass::Large);
    let (layout, marks) = chart.render(
        &HeuristicTextMeasurer,
        &FixedFormatter,
        Size {
            width: 560.0,
            height: 420.0,
        },
        None,
    );
    Section {
        title: "Past the palette".into(),
        note: "Fourteen slices against eleven predefined colors: the last three fills come \
               from the seeded random fallback."
            .into(),
        svg: svg::render_svg(layout.view, &marks),
    }
}

fn zero_total_demo() -> Section {
    let mut chart = PieChartSpec::new(vec![0.0, 0.0], vec!["a".into(), "b".into()]);
    let (layout, marks) = chart.render(&HeuristicTextMeasurer, &Dollars, VIEW, None);
    Section {
        title: "Zero total".into(),
        note: "All values are zero: the ring is empty, the legend still lists the entries, \
               and the readout shows a $0.00 total."
            .into(),
        svg: svg::render_svg(layout.view, &marks),
    }
}

fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{title}</title>"));
    out.push_str(
        "<style>body{font-family:sans-serif;margin:2em}section{margin-bottom:2em}\
         .note{color:#555;max-width:40em}</style>",
    );
    out.push_str("</head><body>\n");
    out.push_str(&format!("<h1>{title}</h1>\n"));
    for section in sections {
        out.push_str("<section>");
        out.push_str(&format!("<h2>{}</h2>", section.title));
        out.push_str(&format!("<p class=\"note\">{}</p>", section.note));
        out.push_str(&section.svg);
        out.push_str("</section>\n");
    }
    out.push_str("</body></html>\n");
    out
}
