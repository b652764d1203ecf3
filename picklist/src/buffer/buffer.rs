use super::Cell;
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::Style;

#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            Some(&mut self.cells[idx])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Fill `area` with blanks painted in `style`.
    pub fn fill(&mut self, area: Rect, style: &Style) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self.set(x, y, Cell::default().styled(style));
            }
        }
    }

    /// Write `text` starting at (x, y), never past `max_x` (exclusive).
    /// Wide characters that would straddle the limit are dropped.
    /// Returns the number of columns written.
    pub fn write_str(&mut self, x: u16, y: u16, text: &str, max_x: u16, style: &Style) -> u16 {
        let mut col = x;
        for ch in text.chars() {
            let w = char_width(ch) as u16;
            if w == 0 {
                continue;
            }
            if col.saturating_add(w) > max_x {
                break;
            }
            let base = self.get(col, y).copied().unwrap_or_default();
            self.set(col, y, Cell { char: ch, wide_continuation: false, ..base }.styled(style));
            for extra in 1..w {
                let base = self.get(col + extra, y).copied().unwrap_or_default();
                self.set(
                    col + extra,
                    y,
                    Cell { char: ' ', wide_continuation: true, ..base }.styled(style),
                );
            }
            col += w;
        }
        col - x
    }

    /// The visible characters of row `y`, skipping wide continuations.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn diff<'a>(&'a self, other: &'a Buffer) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
