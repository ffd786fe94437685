use crate::error::TerminalError;

/// What a piece of text is, so a backend can pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Plain,
    Label,
    RequestBar,
    ByteBar,
    Status,
}

/// The drawing primitives the compositor needs, and nothing else.
pub trait Surface {
    /// Current `(cols, rows)`.
    fn size(&mut self) -> Result<(u16, u16), TerminalError>;

    /// Blank the whole screen. Starts a new frame.
    fn clear(&mut self) -> Result<(), TerminalError>;

    /// Write `text` starting at `(row, col)`, clipped at the right edge.
    /// Returns [`TerminalError::OutOfBounds`] when the start is off screen.
    fn put(&mut self, row: u16, col: u16, text: &str, paint: Paint) -> Result<(), TerminalError>;

    /// Push the frame to the device.
    fn flush(&mut self) -> Result<(), TerminalError>;
}

pub(crate) fn check_bounds(row: u16, col: u16, cols: u16, rows: u16) -> Result<(), TerminalError> {
    if row >= rows || col >= cols {
        return Err(TerminalError::OutOfBounds {
            row,
            col,
            rows,
            cols,
        });
    }
    Ok(())
}

pub(crate) fn clip(text: &str, col: u16, cols: u16) -> &str {
    let room = usize::from(cols.saturating_sub(col));
    match text.char_indices().nth(room) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// In-memory character grid. Keeps the last flushed frame readable as text.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    cols: u16,
    rows: u16,
    cells: Vec<Vec<(char, Paint)>>,
    flushed: Vec<String>,
    flushes: usize,
}

impl MemorySurface {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: blank(cols, rows),
            flushed: Vec::new(),
            flushes: 0,
        }
    }

    /// Simulate the user resizing the terminal.
    pub fn set_size(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = blank(cols, rows);
    }

    /// Text of `row` in the last flushed frame, trailing blanks removed.
    pub fn line(&self, row: u16) -> &str {
        self.flushed
            .get(usize::from(row))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// All rows of the last flushed frame.
    pub fn screen(&self) -> &[String] {
        &self.flushed
    }

    /// Paint of the cell at `(row, col)` in the working frame.
    pub fn paint_at(&self, row: u16, col: u16) -> Option<Paint> {
        self.cells
            .get(usize::from(row))?
            .get(usize::from(col))
            .map(|(_, p)| *p)
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

fn blank(cols: u16, rows: u16) -> Vec<Vec<(char, Paint)>> {
    vec![vec![(' ', Paint::Plain); usize::from(cols)]; usize::from(rows)]
}

impl Surface for MemorySurface {
    fn size(&mut self) -> Result<(u16, u16), TerminalError> {
        Ok((self.cols, self.rows))
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.cells = blank(self.cols, self.rows);
        Ok(())
    }

    fn put(&mut self, row: u16, col: u16, text: &str, paint: Paint) -> Result<(), TerminalError> {
        check_bounds(row, col, self.cols, self.rows)?;

        let line = &mut self.cells[usize::from(row)];
        for (i, ch) in clip(text, col, self.cols).chars().enumerate() {
            line[usize::from(col) + i] = (ch, paint);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.flushed = self
            .cells
            .iter()
            .map(|line| {
                let text: String = line.iter().map(|(c, _)| *c).collect();
                text.trim_end().to_string()
            })
            .collect();
        self.flushes += 1;
        Ok(())
    }
}
