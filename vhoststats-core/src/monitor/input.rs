use crate::error::InputError;
use crate::monitor::constants::LINE_QUEUE;
use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind, IsTerminal};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

/// Where log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `None` and `-` both mean standard input.
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => InputSource::File(p.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    /// True when reading would block on the same terminal the chart is drawn on.
    pub fn is_interactive(&self) -> bool {
        matches!(self, InputSource::Stdin) && io::stdin().is_terminal()
    }

    pub fn open(&self) -> Result<Box<dyn BufRead + Send>, InputError> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|source| InputError::Open {
                    path: path.clone(),
                    source,
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

#[derive(Debug)]
pub enum InputEvent {
    Line(String),
    Eof,
    Failed(io::Error),
}

/// Read one line into `buf`, retrying reads interrupted by a signal (such as
/// the terminal resize notification). Returns `Ok(0)` only at end of input.
pub fn read_line_retrying<R: BufRead + ?Sized>(
    reader: &mut R,
    buf: &mut Vec<u8>,
) -> io::Result<usize> {
    loop {
        match reader.read_until(b'\n', buf) {
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}

/// Move lines off `reader` on a dedicated thread.
///
/// The thread owns no monitor state; it stops after sending `Eof` or
/// `Failed`, or as soon as the receiver is gone.
pub fn spawn_reader(mut reader: Box<dyn BufRead + Send>) -> (Receiver<InputEvent>, JoinHandle<()>) {
    let (tx, rx) = mpsc::sync_channel(LINE_QUEUE);

    let handle = thread::spawn(move || {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let event = match read_line_retrying(&mut *reader, &mut buf) {
                Ok(0) => InputEvent::Eof,
                Ok(_) => InputEvent::Line(String::from_utf8_lossy(&buf).into_owned()),
                Err(e) => InputEvent::Failed(e),
            };

            let last = !matches!(event, InputEvent::Line(_));
            if tx.send(event).is_err() || last {
                break;
            }
        }
    });

    (rx, handle)
}
