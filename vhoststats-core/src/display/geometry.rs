/// Digits reserved for a counter value before it starts pushing the bar right.
pub const COUNTER_DIGITS: usize = 10;

/// Rows above the chart: the header line and a blank separator.
pub const HEADER_ROWS: u16 = 2;

// "[R:" + digits + "] "
const COUNTER_WIDTH: usize = COUNTER_DIGITS + 5;

// Gaps between label, counter and bar plus a right margin.
const PADDING: usize = 4;

/// Layout constants derived from the terminal size and the host label width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub cols: u16,
    pub rows: u16,
    pub center_row: u16,
    pub label_width: usize,
    pub counter_width: usize,
    pub counter_column: u16,
    pub bar_column: u16,
    pub bar_width: u16,
    /// Hosts that fit around the center row.
    pub max_hosts: usize,
}

impl Geometry {
    /// A label wider than the screen is cut to the screen width.
    pub fn compute(cols: u16, rows: u16, label_width: usize) -> Self {
        let label_width = label_width.min(usize::from(cols));
        let center_row = rows / 2;
        let counter_column = clamp_u16(label_width.saturating_add(1));
        let bar_column = clamp_u16(label_width.saturating_add(COUNTER_WIDTH + 2));
        let reserved = label_width.saturating_add(COUNTER_WIDTH + PADDING);
        let bar_width = clamp_u16(usize::from(cols).saturating_sub(reserved));

        Self {
            cols,
            rows,
            center_row,
            label_width,
            counter_width: COUNTER_WIDTH,
            counter_column,
            bar_column,
            bar_width,
            max_hosts: usize::from(center_row.saturating_sub(HEADER_ROWS)),
        }
    }

    /// Row of the bytes line for the host at `rank` (0 = busiest) when `shown`
    /// hosts are drawn. The requests line sits directly above it.
    pub fn bytes_row(&self, rank: usize, shown: usize) -> Option<u16> {
        let bottom = usize::from(self.center_row) + shown.checked_sub(1)?;
        let row = bottom.checked_sub(rank * 2)?;
        u16::try_from(row).ok()
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Tracks terminal size and label width, and recomputes [`Geometry`] when
/// either changes. A change always forces the next frame to be a full repaint.
#[derive(Debug)]
pub struct GeometryMonitor {
    fixed_label: Option<usize>,
    widest_label: usize,
    geometry: Geometry,
    repaint: bool,
}

impl GeometryMonitor {
    pub fn new(cols: u16, rows: u16, fixed_label: Option<usize>) -> Self {
        let label = fixed_label.unwrap_or(0);
        Self {
            fixed_label,
            widest_label: 0,
            geometry: Geometry::compute(cols, rows, label),
            repaint: true,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn widest_label(&self) -> usize {
        self.widest_label
    }

    /// Returns `true` when the layout changed.
    pub fn resize(&mut self, cols: u16, rows: u16) -> bool {
        self.relayout(cols, rows)
    }

    /// Record the length of a host label. Returns `true` when the layout changed.
    pub fn observe_label(&mut self, len: usize) -> bool {
        if len <= self.widest_label {
            return false;
        }
        self.widest_label = len;
        self.relayout(self.geometry.cols, self.geometry.rows)
    }

    pub fn repaint_pending(&self) -> bool {
        self.repaint
    }

    /// Whether the next frame must be a full repaint. Clears the flag.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint)
    }

    fn relayout(&mut self, cols: u16, rows: u16) -> bool {
        let label = self.fixed_label.unwrap_or(self.widest_label);
        let next = Geometry::compute(cols, rows, label);
        if next == self.geometry {
            return false;
        }

        self.geometry = next;
        self.repaint = true;
        true
    }
}
