//! Comparison figures
//!
//! [`SubplotGrid`] owns its cell array and hands out cells by (row, col);
//! cells never populated stay blank. [`comparison_figure`] arranges one
//! evaluated definition table into the pyramid layout: degree n on row n,
//! order m in column n_max + m, with the reference curve dotted.

use crate::definitions::EvaluatedTable;
use crate::error::{LegendreError, Result};
use crate::reference::associated_legendre_nm;
use plotly::common::{Anchor, DashType, Font, Line, Mode, Title};
use plotly::layout::{Annotation, GridPattern, LayoutGrid};
use plotly::{Layout, Plot, Scatter};

/// One line series inside a subplot cell.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Legend label
    pub label: String,
    /// Abscissa samples
    pub x: Vec<f64>,
    /// Ordinate samples; non-finite entries plot as gaps
    pub y: Vec<f64>,
    /// Dotted line style (used for the reference curve)
    pub dotted: bool,
}

impl Curve {
    /// Solid line series.
    pub fn solid(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Curve {
            label: label.into(),
            x,
            y,
            dotted: false,
        }
    }

    /// Dotted line series.
    pub fn dotted(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Curve {
            label: label.into(),
            x,
            y,
            dotted: true,
        }
    }
}

#[derive(Debug, Clone)]
struct Cell {
    title: String,
    curves: Vec<Curve>,
}

/// A figure made of a fixed grid of subplot cells.
///
/// The grid owns the cell array; populated cells carry their own curves and
/// title, unpopulated cells render as blank panels.
#[derive(Debug, Clone)]
pub struct SubplotGrid {
    title: String,
    rows: usize,
    cols: usize,
    cells: Vec<Option<Cell>>,
}

impl SubplotGrid {
    /// Empty grid of `rows x cols` cells.
    pub fn new(title: impl Into<String>, rows: usize, cols: usize) -> Self {
        SubplotGrid {
            title: title.into(),
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Grid row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Grid column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Place curves into the cell at (row, col), replacing prior contents.
    pub fn set_cell(
        &mut self,
        row: usize,
        col: usize,
        title: impl Into<String>,
        curves: Vec<Curve>,
    ) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(LegendreError::CellOutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[row * self.cols + col] = Some(Cell {
            title: title.into(),
            curves,
        });
        Ok(())
    }

    /// Number of populated cells.
    pub fn populated(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Compose the figure.
    ///
    /// Every cell gets its own axis pair so the layout grid keeps blank
    /// cells in place; only the first populated cell contributes legend
    /// entries.
    pub fn into_plot(self) -> Plot {
        let (rows, cols) = (self.rows, self.cols);
        let mut plot = Plot::new();
        let mut annotations = Vec::new();
        let mut legend_done = false;

        for (index, slot) in self.cells.into_iter().enumerate() {
            let axis_x = if index == 0 {
                "x".to_string()
            } else {
                format!("x{}", index + 1)
            };
            let axis_y = if index == 0 {
                "y".to_string()
            } else {
                format!("y{}", index + 1)
            };

            match slot {
                Some(cell) => {
                    let row = index / cols;
                    let col = index % cols;
                    annotations.push(
                        Annotation::new()
                            .text(cell.title)
                            .x_ref("paper")
                            .y_ref("paper")
                            .x((col as f64 + 0.5) / cols as f64)
                            .y(1.0 - row as f64 / rows as f64)
                            .x_anchor(Anchor::Center)
                            .y_anchor(Anchor::Bottom)
                            .show_arrow(false)
                            .font(Font::new().size(12)),
                    );
                    for curve in cell.curves {
                        let line = if curve.dotted {
                            Line::new().dash(DashType::Dot).width(2.0)
                        } else {
                            Line::new().width(2.0)
                        };
                        let trace = Scatter::new(curve.x, curve.y)
                            .mode(Mode::Lines)
                            .name(&curve.label)
                            .line(line)
                            .show_legend(!legend_done)
                            .x_axis(axis_x.as_str())
                            .y_axis(axis_y.as_str());
                        plot.add_trace(trace);
                    }
                    legend_done = true;
                }
                None => {
                    // Placeholder claims the axis pair; a lone null sample
                    // draws nothing.
                    let trace = Scatter::new(vec![f64::NAN], vec![f64::NAN])
                        .mode(Mode::Lines)
                        .show_legend(false)
                        .x_axis(axis_x.as_str())
                        .y_axis(axis_y.as_str());
                    plot.add_trace(trace);
                }
            }
        }

        let layout = Layout::new()
            .title(Title::with_text(self.title))
            .grid(
                LayoutGrid::new()
                    .rows(rows)
                    .columns(cols)
                    .pattern(GridPattern::Independent),
            )
            .annotations(annotations)
            .width(280 * cols.max(1))
            .height(60 + 240 * rows.max(1));
        plot.set_layout(layout);
        plot
    }
}

/// Pyramid comparison figure for one evaluated definition table.
///
/// Row n, column n_max + m; candidate curve solid, reference curve dotted.
pub fn comparison_figure(evaluated: &EvaluatedTable) -> Result<Plot> {
    let rows = evaluated.n_max as usize + 1;
    let cols = 2 * evaluated.n_max as usize + 1;
    let mut grid = SubplotGrid::new(
        format!(
            "Associated Legendre functions: {} vs reference",
            evaluated.definition
        ),
        rows,
        cols,
    );

    for cell in &evaluated.cells {
        let reference: Vec<f64> = evaluated
            .x
            .iter()
            .map(|&x| associated_legendre_nm(cell.n, cell.m, x))
            .collect();
        let curves = vec![
            Curve::solid(
                evaluated.definition.clone(),
                evaluated.x.clone(),
                cell.values.clone(),
            ),
            Curve::dotted("reference", evaluated.x.clone(), reference),
        ];
        let row = cell.n as usize;
        let col = (evaluated.n_max as i64 + cell.m as i64) as usize;
        grid.set_cell(
            row,
            col,
            format!("P<sub>{}</sub><sup>{}</sup>", cell.n, cell.m),
            curves,
        )?;
    }

    Ok(grid.into_plot())
}
