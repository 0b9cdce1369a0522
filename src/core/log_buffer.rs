//! Bounded FIFO log buffer, one per monitored process

use std::collections::VecDeque;

/// Default line cap, matching the original UI
pub const DEFAULT_LOG_CAP: usize = 1000;

/// Ordered sequence of log lines with FIFO eviction past the cap.
///
/// Mutated only by the event handler for its process; rendering always
/// rebuilds from the full buffer, so hidden panels stay consistent.
#[derive(Debug)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    cap: usize,
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_CAP)
    }
}

impl LogBuffer {
    pub fn new(cap: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(cap.min(256)),
            cap: cap.max(1),
        }
    }

    /// Append a line, evicting the oldest if over the cap
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
        while self.lines.len() > self.cap {
            self.lines.pop_front();
        }
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}
