use std::io::{self, Write};
use std::sync::Mutex;

// ###################################
// ->   STRUCTS & TRAITS
// ###################################

/// Visual mode of the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// Where the form renders its outcome.
///
/// The host surface owns two channels: a blocking alert for input problems
/// and a status region that stays hidden until the first write. Writes from
/// overlapping clicks may interleave; each write fully replaces the region.
pub trait StatusSink {
    fn alert(&self, text: &str);
    fn status(&self, tone: Tone, text: &str);
}

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Terminal implementation: success lines in green, error lines in red,
/// alerts as plain text.
pub struct ConsoleSink<W: Write> {
    out: Mutex<W>,
}

// ###################################
// ->   IMPLS
// ###################################

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleSink::new(io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        ConsoleSink {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write> StatusSink for ConsoleSink<W> {
    fn alert(&self, text: &str) {
        let mut out = self.out.lock().expect("console sink lock poisoned");
        let _ = writeln!(out, "{text}");
        let _ = out.flush();
    }

    fn status(&self, tone: Tone, text: &str) {
        let color = match tone {
            Tone::Success => GREEN,
            Tone::Error => RED,
        };

        let mut out = self.out.lock().expect("console sink lock poisoned");
        let _ = writeln!(out, "{color}{text}{RESET}");
        let _ = out.flush();
    }
}
