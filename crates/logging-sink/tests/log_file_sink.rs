//! Integration tests for sinks writing into append-mode log files.

use levellog_sink::{LogFile, MessageSink, TimestampMode};
use std::fs;
use test_support::LogDir;
use time::macros::datetime;

#[test]
fn lines_accumulate_across_reopens() {
    let dir = LogDir::new();
    let path = dir.file("session.log");
    let at = datetime!(2024-01-02 03:04:05 UTC);

    let mut sink = MessageSink::new(LogFile::open_append(&path).expect("open"));
    sink.write_line_at("[STATUS] (Main) first run", at)
        .expect("write succeeds");
    drop(sink);

    let mut sink = MessageSink::new(LogFile::open_append(&path).expect("reopen"));
    sink.write_line_at("[STATUS] (Main) second run", at)
        .expect("write succeeds");
    drop(sink);

    let content = fs::read_to_string(&path).expect("read");
    assert_eq!(
        content,
        "2024/01/02 03:04:05 [STATUS] (Main) first run\n\
         2024/01/02 03:04:05 [STATUS] (Main) second run\n"
    );
}

#[test]
fn file_grows_with_each_line() {
    let dir = LogDir::new();
    let path = dir.file("grow.log");
    let mut sink =
        MessageSink::with_timestamps(LogFile::open_append(&path).expect("open"), TimestampMode::Plain);

    let mut previous = 0;
    for index in 0..5 {
        sink.write_line(&format!("line {index}"))
            .expect("write succeeds");
        let len = fs::metadata(&path).expect("stat").len();
        assert!(len > previous);
        previous = len;
    }
}

#[test]
fn sink_reports_log_file_path() {
    let dir = LogDir::new();
    let path = dir.file("path.log");
    let sink = MessageSink::new(LogFile::open_append(&path).expect("open"));
    assert_eq!(sink.get_ref().path(), path.as_path());
}
