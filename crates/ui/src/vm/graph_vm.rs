use surf_core::format::format_number;
use surf_core::model::{Line, Question};
use surf_core::sampler::{GraphLine, sample_system};

/// One plotted line, ready for the chart renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesVm {
    pub label: String,
    pub points: Vec<(f64, Option<f64>)>,
    /// Set for `b = 0` lines, whose samples are all gaps.
    pub vertical_x: Option<f64>,
}

/// A row of the sample table: x and the y of each line (`-` for a gap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphRowVm {
    pub x: String,
    pub first: String,
    pub second: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphVm {
    pub series: [SeriesVm; 2],
    pub rows: Vec<GraphRowVm>,
    pub solution: (f64, f64),
    pub solution_label: String,
}

fn map_series(line: &GraphLine) -> SeriesVm {
    SeriesVm {
        label: line.label.clone(),
        points: line.points.iter().map(|p| (p.x, p.y)).collect(),
        vertical_x: match line.line {
            Line::Vertical { x } => Some(x),
            Line::Slope { .. } => None,
        },
    }
}

fn cell(y: Option<f64>) -> String {
    y.map_or_else(|| "-".to_string(), |y| format_number((y * 100.0).round() / 100.0))
}

#[must_use]
pub fn map_graph(question: &Question) -> GraphVm {
    let data = sample_system(question);
    let [first, second] = &data.lines;

    let rows = first
        .points
        .iter()
        .zip(&second.points)
        .map(|(a, b)| GraphRowVm {
            x: format_number(a.x),
            first: cell(a.y),
            second: cell(b.y),
        })
        .collect();

    GraphVm {
        series: [map_series(first), map_series(second)],
        rows,
        solution: (data.solution.x, data.solution.y),
        solution_label: format!(
            "Solution ({}, {})",
            format_number(data.solution.x),
            format_number(data.solution.y)
        ),
    }
}
