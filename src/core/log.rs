use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::fmt;

/// Severity level of an activity-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Routine progress information
    Info,
    /// An operation finished as intended
    Success,
    /// Something degraded but the application keeps going
    Warning,
    /// An operation failed
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", label)
    }
}

/// One timestamped entry of the activity log, immutable once created
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Wall-clock instant the entry was appended
    pub timestamp: DateTime<Local>,
    /// Severity of the entry
    pub level: LogLevel,
    /// Human-readable message
    pub message: String,
}

impl LogEntry {
    /// Creates an entry stamped with the current wall-clock time
    pub fn now(message: &str, level: LogLevel) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.to_string(),
        }
    }

    /// Renders the entry as `[HH:MM:SS] LEVEL: message`
    pub fn render(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.format("%H:%M:%S"),
            self.level,
            self.message
        )
    }
}

/// Ordered, capacity-bounded buffer of log entries.
///
/// Insertion order is significant; when an append would exceed the capacity
/// the oldest entries are evicted first, so the buffer always holds the most
/// recent `capacity` entries.
#[derive(Debug)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Appends an entry, evicting from the front if the bound is exceeded
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The buffered entries as one contiguous slice, oldest first
    pub fn entries(&mut self) -> &[LogEntry] {
        self.entries.make_contiguous()
    }

    /// Renders every entry on its own line, oldest first
    pub fn render_all(&self) -> String {
        self.entries
            .iter()
            .map(|entry| entry.render())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_most_recent_entries_in_order() {
        let mut buffer = LogBuffer::new(3);
        for i in 0..10 {
            buffer.push(LogEntry::now(&format!("entry {}", i), LogLevel::Info));
        }

        assert_eq!(buffer.len(), 3);
        let messages: Vec<&str> = buffer.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["entry 7", "entry 8", "entry 9"]);
    }

    #[test]
    fn stays_within_capacity_for_any_append_count() {
        let mut buffer = LogBuffer::new(5);
        for i in 0..1_000 {
            buffer.push(LogEntry::now(&i.to_string(), LogLevel::Info));
            assert!(buffer.len() <= 5);
        }
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn preserves_levels_verbatim() {
        let mut buffer = LogBuffer::new(10);
        buffer.push(LogEntry::now("ok", LogLevel::Success));
        buffer.push(LogEntry::now("oops", LogLevel::Error));

        let levels: Vec<LogLevel> = buffer.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Success, LogLevel::Error]);

        let rendered = buffer.render_all();
        assert!(rendered.contains("SUCCESS: ok"));
        assert!(rendered.contains("ERROR: oops"));
    }

    #[test]
    fn renders_the_documented_line_shape() {
        let entry = LogEntry::now("hello", LogLevel::Warning);
        let line = entry.render();
        // [HH:MM:SS] WARNING: hello
        assert!(line.starts_with('['));
        assert_eq!(&line[9..11], "] ");
        assert!(line.ends_with("WARNING: hello"));
    }

    #[test]
    fn clear_empties_the_buffer() {
        let mut buffer = LogBuffer::new(4);
        buffer.push(LogEntry::now("a", LogLevel::Info));
        buffer.push(LogEntry::now("b", LogLevel::Info));
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.render_all(), "");
    }
}
