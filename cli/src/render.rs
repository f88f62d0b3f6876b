//! Terminal renderers for a [`CircleReport`]

use std::collections::{HashMap, HashSet};
use std::fmt;

use unit_circle::{CircleReport, CirclePoint};

/// Human-readable summary of a report
pub struct TextReport<'a>(pub &'a CircleReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "Unit circle over the field with p = {}", r.prime)?;
        writeln!(f, "   Points ({}): {}", r.cardinality, join(&r.points))?;
        writeln!(f, "   Generators ({}): {}", r.generators.len(), join(&r.generators))?;
        writeln!(f, "   Generator chosen: {} (order {})", r.generator, r.generator_order)?;
        writeln!(f, "   First {} powers:", r.count)?;
        for term in &r.powers {
            writeln!(f, "   {:>4}: {}", term.index, term.point)?;
        }
        Ok(())
    }
}

fn join(points: &[CirclePoint]) -> String {
    points.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Scatter plot of the p × p grid
///
/// Circle points are drawn as `·`; points reached by the power sequence
/// carry the index of the first power landing on them. Rows run from
/// y = p - 1 at the top down to y = 0.
pub struct Plot<'a>(pub &'a CircleReport);

const CELL: usize = 3;

impl fmt::Display for Plot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        let p = r.prime;

        let mut labels: HashMap<(u32, u32), u64> = HashMap::new();
        for term in &r.powers {
            labels.entry(term.point.coords()).or_insert(term.index);
        }
        let on_circle: HashSet<(u32, u32)> = r.points.iter().map(|pt| pt.coords()).collect();

        let margin = (p - 1).to_string().len();
        writeln!(f, "Unit circle mod {}, generator {}", p, r.generator)?;

        for y in (0..p).rev() {
            let mut row = format!("{:>margin$} |", y);
            for x in 0..p {
                let cell = match labels.get(&(x, y)) {
                    Some(index) => index.to_string(),
                    None if on_circle.contains(&(x, y)) => "·".to_string(),
                    None => String::new(),
                };
                row.push_str(&format!("{:>CELL$}", cell));
            }
            writeln!(f, "{}", row.trim_end())?;
        }

        writeln!(f, "{:>margin$} +{}", "", "-".repeat(CELL * p as usize))?;
        let mut axis = format!("{:>margin$}  ", "");
        for x in 0..p {
            axis.push_str(&format!("{:>CELL$}", x));
        }
        writeln!(f, "{}", axis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_circle::{compute, Request, TrialDivision};

    fn report(p: u32, n: u64) -> CircleReport {
        compute(Request::new(p, n), &TrialDivision).unwrap()
    }

    #[test]
    fn test_plot_p5() {
        let plot = Plot(&report(5, 4)).to_string();
        let lines: Vec<&str> = plot.lines().collect();

        assert_eq!(lines[0], "Unit circle mod 5, generator (0, 1)");
        // y = 4 down to y = 0
        assert_eq!(lines[1], "4 |  3");
        assert_eq!(lines[2], "3 |");
        assert_eq!(lines[4], "1 |  1");
        assert_eq!(lines[5].split_whitespace().collect::<Vec<_>>(), vec!["0", "|", "4", "2"]);
        assert_eq!(lines[7].split_whitespace().collect::<Vec<_>>(), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_plot_marks_unvisited_points() {
        let plot = Plot(&report(7, 1)).to_string();
        assert_eq!(plot.matches('·').count(), 7);
        assert!(plot.contains("2 |        1        ·"));
    }

    #[test]
    fn test_plot_keeps_first_index_on_wrap() {
        let plot = Plot(&report(5, 9)).to_string();
        let grid: Vec<&str> = plot.lines().skip(1).take(5).collect();
        assert!(grid[0].ends_with("  3"));
        assert!(grid.iter().all(|row| !row[3..].contains('5')));
    }

    #[test]
    fn test_text_report() {
        let text = TextReport(&report(5, 2)).to_string();
        assert!(text.contains("Points (4): (0, 1) (0, 4) (1, 0) (4, 0)"));
        assert!(text.contains("Generator chosen: (0, 1) (order 4)"));
        assert!(text.contains("      2: (4, 0)"));
    }
}
