use crate::conf::MonitorConfig;
use crate::display::{Surface, TerminalGuard, TerminalSurface};
use crate::error::{InputError, MonitorError};
use crate::monitor::constants::INPUT_POLL;
use crate::monitor::input::{InputEvent, InputSource, spawn_reader};
use crate::monitor::state::Monitor;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::BufRead;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The input stream ran out.
    Eof,
    /// The operator pressed a quit key.
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub end: SessionEnd,
    pub requests: u64,
    pub rejected: u64,
    pub hosts: usize,
}

/// Run a live session on the controlling terminal until the input ends or the
/// operator quits. The terminal is restored on every path out.
pub fn run(config: MonitorConfig, source: InputSource) -> Result<RunSummary, MonitorError> {
    let reader = source.open()?;

    let guard = TerminalGuard::acquire()?;
    let result = run_session(config, reader);
    let restored = guard.restore();

    let summary = result?;
    restored?;

    info!(
        end = ?summary.end,
        requests = summary.requests,
        rejected = summary.rejected,
        hosts = summary.hosts,
        "session finished"
    );
    Ok(summary)
}

fn run_session(
    config: MonitorConfig,
    reader: Box<dyn BufRead + Send>,
) -> Result<RunSummary, MonitorError> {
    let mut surface = TerminalSurface::new()?;
    let (cols, rows) = surface.size()?;

    let show_errors = config.show_errors;
    let mut monitor = Monitor::new(config, cols, rows);
    monitor.render(&mut surface)?;

    // Detached: on quit the reader may still be blocked in a read.
    let (lines, _reader) = spawn_reader(reader);

    let end = 'session: loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Resize(..) => {
                    let (cols, rows) = surface.size()?;
                    monitor.on_resize(cols, rows);
                }
                Event::Key(key) if is_quit(&key) => break 'session SessionEnd::Quit,
                _ => {}
            }
        }

        if monitor.repaint_pending() {
            monitor.render(&mut surface)?;
        }

        match lines.recv_timeout(INPUT_POLL) {
            Ok(InputEvent::Line(line)) => {
                if monitor.on_line(&line).is_ok() || show_errors {
                    monitor.render(&mut surface)?;
                }
            }
            Ok(InputEvent::Failed(e)) => return Err(InputError::Read(e).into()),
            Ok(InputEvent::Eof) | Err(RecvTimeoutError::Disconnected) => {
                break 'session SessionEnd::Eof;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
    };

    Ok(RunSummary {
        end,
        requests: monitor.requests(),
        rejected: monitor.rejected(),
        hosts: monitor.accountant().hosts().len(),
    })
}

pub(super) fn is_quit(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
