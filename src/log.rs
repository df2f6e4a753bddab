//! Bounded event log.
//!
//! Small ring buffer of short lines the simulator loop feeds with pipeline
//! activity (payload toggles, visibility flips). Heapless on purpose:
//! logging must never allocate on the render path.

use heapless::{Deque, String};

/// Maximum number of lines kept; older lines are dropped.
pub const LOG_LINES: usize = 8;

/// Maximum characters per line; longer messages are truncated.
pub const LOG_LINE_LEN: usize = 64;

/// Ring buffer of the most recent pipeline events, oldest first.
#[derive(Default)]
pub struct EventLog {
    lines: Deque<String<LOG_LINE_LEN>, LOG_LINES>,
}

impl EventLog {
    pub const fn new() -> Self {
        Self { lines: Deque::new() }
    }

    /// Append a line, truncating past [`LOG_LINE_LEN`] and dropping the
    /// oldest line once [`LOG_LINES`] are held.
    pub fn push(&mut self, msg: &str) {
        if self.lines.is_full() {
            self.lines.pop_front();
        }
        let mut line: String<LOG_LINE_LEN> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.lines.push_back(line).ok();
    }

    /// Iterate over held lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.as_str())
    }

    pub const fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_len() {
        let mut log = EventLog::new();
        assert!(log.is_empty());
        log.push("payload: fuel omitted");
        log.push("overlay: visible");
        assert_eq!(log.len(), 2);
        assert_eq!(log.iter().next().unwrap(), "payload: fuel omitted");
    }

    #[test]
    fn test_ring_drops_oldest() {
        let mut log = EventLog::new();
        for i in 0..=LOG_LINES {
            let mut msg: String<16> = String::new();
            let _ = core::fmt::Write::write_fmt(&mut msg, format_args!("line {i}"));
            log.push(&msg);
        }
        assert_eq!(log.len(), LOG_LINES);
        assert_eq!(log.iter().next().unwrap(), "line 1", "line 0 was dropped");
    }

    #[test]
    fn test_long_line_truncated() {
        let mut log = EventLog::new();
        let long = "x".repeat(LOG_LINE_LEN * 2);
        log.push(&long);
        assert_eq!(log.iter().next().unwrap().len(), LOG_LINE_LEN);
    }
}
