use dioxus::prelude::*;

use crate::vm::{GraphVm, SeriesVm};

const WIDTH: f64 = 360.0;
const HEIGHT: f64 = 240.0;
const PAD: f64 = 16.0;
const COLORS: [&str; 2] = ["#1e88e5", "#f4511e"];

/// Maps graph coordinates onto the SVG canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    fn fit(graph: &GraphVm) -> Self {
        let xs = graph.series[0].points.iter().map(|(x, _)| *x);
        let (x_min, x_max) = bounds(xs.chain([graph.solution.0]));
        let ys = graph
            .series
            .iter()
            .flat_map(|series| series.points.iter().filter_map(|(_, y)| *y));
        let (y_min, y_max) = bounds(ys.chain([graph.solution.1]));
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    fn px(&self, x: f64, y: f64) -> (f64, f64) {
        let sx = PAD + (x - self.x_min) / (self.x_max - self.x_min) * (WIDTH - 2.0 * PAD);
        let sy = HEIGHT - PAD - (y - self.y_min) / (self.y_max - self.y_min) * (HEIGHT - 2.0 * PAD);
        (sx, sy)
    }
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !lo.is_finite() || !hi.is_finite() {
        return (-1.0, 1.0);
    }
    if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

/// `points` strings for each unbroken run of samples.
fn polylines(series: &SeriesVm, view: &Viewport) -> Vec<String> {
    let mut runs = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for (x, y) in &series.points {
        match y {
            Some(y) => {
                let (sx, sy) = view.px(*x, *y);
                current.push(format!("{sx:.1},{sy:.1}"));
            }
            None if !current.is_empty() => runs.push(std::mem::take(&mut current).join(" ")),
            None => {}
        }
    }
    if !current.is_empty() {
        runs.push(current.join(" "));
    }
    runs
}

/// Screen-space drawing data for one series.
struct Trace {
    color: &'static str,
    vertical_x: Option<String>,
    runs: Vec<String>,
}

#[component]
pub fn GraphView(graph: GraphVm) -> Element {
    let view = Viewport::fit(&graph);
    let (sol_x, sol_y) = view.px(graph.solution.0, graph.solution.1);
    let view_box = format!("0 0 {WIDTH} {HEIGHT}");
    let (top, bottom) = (format!("{PAD}"), format!("{}", HEIGHT - PAD));
    let traces: Vec<Trace> = graph
        .series
        .iter()
        .zip(COLORS)
        .map(|(series, color)| Trace {
            color,
            vertical_x: series
                .vertical_x
                .map(|x| format!("{:.1}", view.px(x, view.y_min).0)),
            runs: polylines(series, &view),
        })
        .collect();
    let [first, second] = &graph.series;

    rsx! {
        div { class: "graph",
            svg { class: "graph-plot", view_box: "{view_box}", width: "{WIDTH}", height: "{HEIGHT}",
                for trace in traces {
                    if let Some(x) = trace.vertical_x {
                        line {
                            x1: "{x}",
                            y1: "{bottom}",
                            x2: "{x}",
                            y2: "{top}",
                            stroke: trace.color,
                            stroke_width: "2",
                        }
                    }
                    for points in trace.runs {
                        polyline { points: "{points}", fill: "none", stroke: trace.color, stroke_width: "2" }
                    }
                }
                circle { cx: "{sol_x:.1}", cy: "{sol_y:.1}", r: "5", fill: "#2e7d32" }
            }
            ul { class: "graph-legend",
                li { class: "graph-legend-first", "{first.label}" }
                li { class: "graph-legend-second", "{second.label}" }
                li { class: "graph-solution", "{graph.solution_label}" }
            }
            table { class: "graph-samples",
                thead {
                    tr {
                        th { "x" }
                        th { "{first.label}" }
                        th { "{second.label}" }
                    }
                }
                tbody {
                    for row in graph.rows.iter() {
                        tr {
                            td { "{row.x}" }
                            td { "{row.first}" }
                            td { "{row.second}" }
                        }
                    }
                }
            }
        }
    }
}
