use std::fmt;

use crate::timestamp::TimestampMode;

/// Streaming sink that renders text lines into an [`std::io::Write`] target.
///
/// The sink owns the underlying writer together with a reusable scratch
/// buffer. Each call to [`write_line`](Self::write_line) renders the optional
/// timestamp, the line and its newline into the scratch buffer and hands the
/// result to the writer in one `write_all`.
///
/// # Examples
///
/// Collect timestamped lines into a [`Vec<u8>`]:
///
/// ```
/// use levellog_sink::MessageSink;
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write_line("[WARNING] (Net) conn lost 42")?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(output.ends_with(" [WARNING] (Net) conn lost 42\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    scratch: String,
    timestamps: TimestampMode,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("timestamps", &self.timestamps)
            .finish()
    }
}
