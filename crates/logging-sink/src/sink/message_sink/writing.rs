use super::MessageSink;
use crate::timestamp::{format_timestamp, local_now};
use std::io::{self, Write};
use time::OffsetDateTime;

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `line` stamped with the current local time when timestamps are enabled.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        let now = if self.timestamps.is_timestamped() {
            Some(local_now())
        } else {
            None
        };
        self.render(line, now)
    }

    /// Writes `line` using `at` as the timestamp when timestamps are enabled.
    pub fn write_line_at(&mut self, line: &str, at: OffsetDateTime) -> io::Result<()> {
        let at = self.timestamps.is_timestamped().then_some(at);
        self.render(line, at)
    }

    /// Writes `line` without a timestamp regardless of the configured mode.
    pub fn write_plain_line(&mut self, line: &str) -> io::Result<()> {
        self.render(line, None)
    }

    fn render(&mut self, line: &str, at: Option<OffsetDateTime>) -> io::Result<()> {
        self.scratch.clear();
        if let Some(at) = at {
            self.scratch.push_str(&format_timestamp(at));
            self.scratch.push(' ');
        }
        self.scratch.push_str(line);
        self.scratch.push('\n');
        self.writer.write_all(self.scratch.as_bytes())?;
        self.writer.flush()
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use crate::{MessageSink, TimestampMode};
    use time::macros::datetime;

    fn plain_sink() -> MessageSink<Vec<u8>> {
        MessageSink::with_timestamps(Vec::new(), TimestampMode::Plain)
    }

    #[test]
    fn plain_sink_writes_line_verbatim() {
        let mut sink = plain_sink();
        sink.write_line("ready").expect("write succeeds");
        assert_eq!(sink.into_inner(), b"ready\n".to_vec());
    }

    #[test]
    fn timestamped_sink_prefixes_line() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write_line_at("[STATUS] (Net) up", datetime!(2009-01-23 01:23:23 UTC))
            .expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        assert_eq!(output, "2009/01/23 01:23:23 [STATUS] (Net) up\n");
    }

    #[test]
    fn write_line_at_honours_plain_mode() {
        let mut sink = plain_sink();
        sink.write_line_at("ready", datetime!(2009-01-23 01:23:23 UTC))
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"ready\n".to_vec());
    }

    #[test]
    fn plain_line_skips_timestamp() {
        let mut sink = MessageSink::new(Vec::new());
        sink.write_plain_line("Directing log to /tmp/x.log.")
            .expect("write succeeds");
        assert_eq!(sink.into_inner(), b"Directing log to /tmp/x.log.\n".to_vec());
    }

    #[test]
    fn toggling_timestamp_mode_applies_to_next_line() {
        let mut sink = MessageSink::new(Vec::new());
        let at = datetime!(2024-06-01 12:00:00 UTC);
        sink.write_line_at("one", at).expect("write succeeds");
        sink.set_timestamp_mode(TimestampMode::Plain);
        sink.write_line_at("two", at).expect("write succeeds");

        let output = String::from_utf8(sink.into_inner()).expect("utf-8");
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("2024/06/01 12:00:00 one"));
        assert_eq!(lines.next(), Some("two"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn each_line_is_a_single_write() {
        let buffer = test_support::SharedBuffer::new();
        let mut sink = MessageSink::new(buffer.clone());
        sink.write_line("one").expect("write succeeds");
        sink.write_line("two").expect("write succeeds");

        assert_eq!(buffer.write_calls(), 2);
        assert_eq!(buffer.contents().lines().count(), 2);
    }
}
