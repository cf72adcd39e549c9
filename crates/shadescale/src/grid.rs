//! A contrast report over a shade scale.
//!
//! The [`ContrastGrid`] pairs every shade of a scale, bracketed by white and
//! black, with every other one. Rows are white, the eleven shades from light
//! to dark, and black. Columns are the same minus black. Each [`GridCell`]
//! records the contrast between its row and column color and everything
//! needed to render the report.

use crate::{Color, ContrastSettings, Float, ShadeScale};

/// A labelled color in a contrast grid's rows or columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    label: String,
    color: Color,
}

impl Swatch {
    /// Create a new swatch.
    pub fn new<S: Into<String>>(label: S, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Get the label, which is `White`, `Black`, or the shade step.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Get the color.
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// One cell of a contrast grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    row: usize,
    column: usize,
    contrast: Float,
    percentage: Float,
    passes: bool,
    highlighted: bool,
    text_color: Color,
}

impl GridCell {
    /// Get the row index.
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Get the column index.
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Get the contrast between row and column color.
    pub const fn contrast(&self) -> Float {
        self.contrast
    }

    /// Get the contrast as a percentage.
    pub const fn percentage(&self) -> Float {
        self.percentage
    }

    /// Determine whether the contrast passes the configured score.
    pub const fn passes(&self) -> bool {
        self.passes
    }

    /// Determine whether the cell is shown with the column color as
    /// background.
    ///
    /// A cell is highlighted if it passes, is off the diagonal, and the
    /// larger of its row and column index is at least 6, i.e., it involves a
    /// mid to dark shade.
    pub const fn highlighted(&self) -> bool {
        self.highlighted
    }

    /// Get the color for text inside the cell.
    ///
    /// With automatic text color, this is white or black, whichever suits the
    /// column color. Otherwise, it is the row color.
    pub const fn text_color(&self) -> Color {
        self.text_color
    }

    /// Get the signed and rounded percentage.
    ///
    /// The percentage is negative above the diagonal and positive below. It
    /// is `None` on the diagonal and for cells that do not pass.
    pub fn signed_percentage(&self) -> Option<i64> {
        if !self.passes || self.row == self.column {
            return None;
        }

        let rounded = crate::core::round_half_up(self.percentage) as i64;
        if self.row < self.column {
            Some(-rounded)
        } else {
            Some(rounded)
        }
    }

    /// Get the label for the cell, e.g., `-53%`, `53%`, or the empty string.
    pub fn label(&self) -> String {
        match self.signed_percentage() {
            Some(percentage) => format!("{}%", percentage),
            None => String::new(),
        }
    }
}

/// A contrast grid.
#[derive(Clone, Debug)]
pub struct ContrastGrid {
    swatches: Vec<Swatch>,
    cells: Vec<GridCell>,
    settings: ContrastSettings,
}

impl ContrastGrid {
    /// The index from which on shades count as mid to dark.
    pub const HIGHLIGHT_INDEX: usize = 6;

    /// Create a new contrast grid for the given scale and settings.
    ///
    /// ```
    /// # use shadescale::{Color, ContrastGrid, ContrastSettings, GeneratorSettings, ShadeScale};
    /// let scale = ShadeScale::derive(Color::new(0x3b, 0x82, 0xf6), &GeneratorSettings::default());
    /// let grid = ContrastGrid::new(&scale, &ContrastSettings::default());
    /// assert_eq!(grid.rows().len(), 13);
    /// assert_eq!(grid.columns().len(), 12);
    /// assert_eq!(grid.cell(12, 0).label(), "106%");
    /// ```
    pub fn new(scale: &ShadeScale, settings: &ContrastSettings) -> Self {
        let mut swatches = Vec::with_capacity(scale.len() + 2);
        swatches.push(Swatch::new("White", Color::WHITE));
        swatches.extend(
            scale
                .iter()
                .map(|(step, color)| Swatch::new(step.to_string(), color)),
        );
        swatches.push(Swatch::new("Black", Color::BLACK));

        let column_count = swatches.len() - 1;
        let mut cells = Vec::with_capacity(swatches.len() * column_count);
        for (row, row_swatch) in swatches.iter().enumerate() {
            for (column, column_swatch) in swatches[..column_count].iter().enumerate() {
                cells.push(Self::make_cell(
                    row,
                    row_swatch.color,
                    column,
                    column_swatch.color,
                    settings,
                ));
            }
        }

        Self {
            swatches,
            cells,
            settings: *settings,
        }
    }

    fn make_cell(
        row: usize,
        row_color: Color,
        column: usize,
        column_color: Color,
        settings: &ContrastSettings,
    ) -> GridCell {
        let contrast = settings.contrast(row_color, column_color);
        let passes = settings.passes(contrast);
        let highlighted =
            passes && row != column && Self::HIGHLIGHT_INDEX <= row.max(column);

        let text_color = if !settings.auto_text_color {
            row_color
        } else if column_color.prefers_light_text() {
            Color::WHITE
        } else {
            Color::BLACK
        };

        GridCell {
            row,
            column,
            contrast,
            percentage: settings.percentage(contrast),
            passes,
            highlighted,
            text_color,
        }
    }

    /// Get the row swatches.
    pub fn rows(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Get the column swatches.
    pub fn columns(&self) -> &[Swatch] {
        &self.swatches[..self.swatches.len() - 1]
    }

    /// Get the settings used for this grid.
    pub const fn settings(&self) -> &ContrastSettings {
        &self.settings
    }

    /// Get the cell at the given row and column.
    ///
    /// # Panics
    ///
    /// If either index is out of bounds.
    pub fn cell(&self, row: usize, column: usize) -> &GridCell {
        let column_count = self.columns().len();
        assert!(
            row < self.swatches.len() && column < column_count,
            "cell ({}, {}) is outside the grid",
            row,
            column
        );
        &self.cells[row * column_count + column]
    }

    /// Get an iterator over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter()
    }

    /// Get an iterator over the cells of one row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = &GridCell> {
        let column_count = self.columns().len();
        self.cells.iter().skip(row * column_count).take(column_count)
    }
}

impl std::fmt::Display for ContrastGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>6}", "")?;
        for column in self.columns() {
            write!(f, " {:>6}", column.label())?;
        }
        writeln!(f)?;

        for (index, row) in self.rows().iter().enumerate() {
            write!(f, "{:>6}", row.label())?;
            for cell in self.row(index) {
                write!(f, " {:>6}", cell.label())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
