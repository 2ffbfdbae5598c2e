/// `Layout` describes the grid a sheet is divided along: the size of one
/// cell and the uniform margin preceding each cell on both axes, including
/// before the first row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) cell_width: u32,
    pub(crate) cell_height: u32,
    pub(crate) margin: u32,
}

/// `GridSize` is the number of full cell rows and columns that fit on a
/// sheet under some `Layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GridSize {
    pub(crate) rows: u32,
    pub(crate) cols: u32,
}

/// `Rect` is one cell's pixel rectangle within the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// `Cell` is one enumerated cell: its grid position and its rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) row: u32,
    pub(crate) col: u32,
    pub(crate) rect: Rect,
}

impl Layout {
    /// Counts the rows and columns of full cells that fit on a
    /// `sheet_width` x `sheet_height` sheet.
    ///
    /// A sheet smaller than a single margin would make the naive count
    /// negative; `saturating_sub` clamps that to an empty grid instead. The
    /// divisor is widened to `u64` so a margin near `u32::MAX` cannot
    /// overflow the cell-plus-margin pitch.
    pub(crate) fn grid_size(&self, sheet_width: u32, sheet_height: u32) -> GridSize {
        let row_pitch = u64::from(self.cell_height) + u64::from(self.margin);
        let col_pitch = u64::from(self.cell_width) + u64::from(self.margin);
        GridSize {
            rows: (u64::from(sheet_height.saturating_sub(self.margin)) / row_pitch) as u32,
            cols: (u64::from(sheet_width.saturating_sub(self.margin)) / col_pitch) as u32,
        }
    }

    /// The pixel rectangle of the cell at `(row, col)`.
    pub(crate) fn cell_rect(&self, row: u32, col: u32) -> Rect {
        Rect {
            x: self.margin + col * (self.cell_width + self.margin),
            y: self.margin + row * (self.cell_height + self.margin),
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    /// Walks every cell of the sheet in row-major order. Cells are only
    /// enumerated for `row < rows` and `col < cols`, so every yielded
    /// rectangle lies within the sheet bounds.
    pub(crate) fn cells(&self, sheet_width: u32, sheet_height: u32) -> Cells {
        Cells {
            layout: *self,
            size: self.grid_size(sheet_width, sheet_height),
            row: 0,
            col: 0,
        }
    }
}

impl GridSize {
    pub(crate) fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

/// `Cells` iterates the cells of one sheet, top-left to bottom-right,
/// row by row.
pub(crate) struct Cells {
    layout: Layout,
    size: GridSize,
    row: u32,
    col: u32,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size.cols == 0 || self.size.rows <= self.row {
            return None;
        }
        let ret = Cell {
            row: self.row,
            col: self.col,
            rect: self.layout.cell_rect(self.row, self.col),
        };
        self.col += 1;
        if self.size.cols <= self.col {
            self.row += 1;
            self.col = 0;
        }
        Some(ret)
    }
}
