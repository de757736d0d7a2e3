//! Warnings emitted while rebuilding a dump.
//!
//! This binary installs its own logger, so it does not use `test_log`.
use std::sync::Mutex;

use lazy_static::lazy_static;
use log::{Level, LevelFilter, Log, Metadata, Record};
use tweetsent::processing::reconstruct;

lazy_static! {
    static ref WARNINGS: Mutex<Vec<String>> = Mutex::new(Vec::new());
}

struct Capture;

impl Log for Capture {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Warn
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            WARNINGS.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture;

fn init() {
    // already set by another test of this binary
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Warn);
    }
}

fn warned(message: &str) -> bool {
    WARNINGS.lock().unwrap().iter().any(|w| w == message)
}

#[test]
fn drop_rate_is_reported() {
    init();
    let data = "TextTW : kept\nTweetid : 100\n\
                TextTW : lost\nLang : en\n\
                TextTW : lost too\nLang : fr\n\
                TextTW : kept too\nTweetid : 101\n";
    let table = reconstruct(data).unwrap();

    assert_eq!(table.len(), 2);
    assert!(warned("dropped 2 malformed chunks (50.00%)"));
}

#[test]
fn merge_without_date_is_reported() {
    init();
    let data = "TextTW : rt @ann: no date here\nTweetid : 200\nUser_Author : ann\n\
                TextTW : rt @ann: dated\nTweetid : 201\nCreated_At : Wed Oct 10 20:19:24 +0000 2018\n";
    let table = reconstruct(data).unwrap();

    assert_eq!(table.len(), 2);
    assert!(warned("merged retweet 200 has no creation date"));
    assert!(!warned("merged retweet 201 has no creation date"));
}
