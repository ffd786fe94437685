use crate::display::surface::{Paint, Surface, check_bounds, clip};
use crate::error::TerminalError;
use crossterm::{
    QueueableCommand, cursor, execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use std::io::{self, BufWriter, Stdout, Write};
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

const FRAME_BUFFER: usize = 64 * 1024;

/// Scoped raw-mode session. The terminal is put back the way it was when this
/// is dropped, when [`TerminalGuard::restore`] is called, or when a panic
/// unwinds (or aborts) through it.
pub struct TerminalGuard {
    active: bool,
    previous_hook: Option<PanicHook>,
}

impl TerminalGuard {
    pub fn acquire() -> Result<Self, TerminalError> {
        terminal::enable_raw_mode()?;
        let mut guard = Self {
            active: true,
            previous_hook: None,
        };

        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;

        // Restore the terminal before the panic message is printed.
        guard.previous_hook = Some(chain_panic_hook(|| {
            let _ = leave();
        }));

        Ok(guard)
    }

    /// Restore the terminal and report whether that worked. The panic hook in
    /// place before [`TerminalGuard::acquire`] is reinstated.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.active = false;
        if let Some(previous) = self.previous_hook.take() {
            reinstate_panic_hook(previous);
        }
        leave()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = leave();
        }
        // The hook cannot be swapped from a panicking thread.
        if std::thread::panicking() {
            return;
        }
        if let Some(previous) = self.previous_hook.take() {
            reinstate_panic_hook(previous);
        }
    }
}

pub(crate) type PanicHook = Arc<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Install a hook that runs `before` and then the current hook. Returns the
/// hook that was current.
pub(crate) fn chain_panic_hook(before: impl Fn() + Send + Sync + 'static) -> PanicHook {
    let previous: PanicHook = Arc::from(panic::take_hook());
    let chained = Arc::clone(&previous);
    panic::set_hook(Box::new(move |info| {
        before();
        chained(info);
    }));
    previous
}

pub(crate) fn reinstate_panic_hook(previous: PanicHook) {
    let _ = panic::take_hook();
    panic::set_hook(Box::new(move |info| previous(info)));
}

fn leave() -> Result<(), TerminalError> {
    let shown = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    terminal::disable_raw_mode()?;
    shown?;
    Ok(())
}

/// Crossterm-backed surface. A frame is queued into one buffer between
/// [`Surface::clear`] and [`Surface::flush`] and written as a synchronized
/// update, so the screen never shows half a frame.
pub struct TerminalSurface {
    out: BufWriter<Stdout>,
    cols: u16,
    rows: u16,
}

impl TerminalSurface {
    pub fn new() -> Result<Self, TerminalError> {
        let (cols, rows) = terminal::size()?;
        Ok(Self {
            out: BufWriter::with_capacity(FRAME_BUFFER, io::stdout()),
            cols,
            rows,
        })
    }
}

fn color(paint: Paint) -> Option<Color> {
    match paint {
        Paint::Plain => None,
        Paint::Label => Some(Color::Cyan),
        Paint::RequestBar => Some(Color::Red),
        Paint::ByteBar => Some(Color::Green),
        Paint::Status => Some(Color::Yellow),
    }
}

impl Surface for TerminalSurface {
    fn size(&mut self) -> Result<(u16, u16), TerminalError> {
        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        Ok((cols, rows))
    }

    fn clear(&mut self) -> Result<(), TerminalError> {
        self.out.queue(BeginSynchronizedUpdate)?;
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    fn put(&mut self, row: u16, col: u16, text: &str, paint: Paint) -> Result<(), TerminalError> {
        check_bounds(row, col, self.cols, self.rows)?;

        self.out.queue(cursor::MoveTo(col, row))?;
        match color(paint) {
            Some(c) => {
                self.out.queue(SetForegroundColor(c))?;
                self.out.queue(Print(clip(text, col, self.cols)))?;
                self.out.queue(ResetColor)?;
            }
            None => {
                self.out.queue(Print(clip(text, col, self.cols)))?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), TerminalError> {
        self.out.queue(EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }
}
