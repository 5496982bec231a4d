use super::MessageSink;
use crate::timestamp::TimestampMode;

impl<W> MessageSink<W> {
    /// Creates a sink that timestamps each line.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_timestamps(writer, TimestampMode::Timestamped)
    }

    /// Creates a sink with an explicit [`TimestampMode`].
    #[must_use]
    pub fn with_timestamps(writer: W, timestamps: TimestampMode) -> Self {
        Self {
            writer,
            scratch: String::new(),
            timestamps,
        }
    }

    /// Returns the current [`TimestampMode`].
    #[must_use]
    pub const fn timestamp_mode(&self) -> TimestampMode {
        self.timestamps
    }

    /// Updates the [`TimestampMode`] used for subsequent writes.
    pub fn set_timestamp_mode(&mut self, timestamps: TimestampMode) {
        self.timestamps = timestamps;
    }

    /// Borrows the underlying writer.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
