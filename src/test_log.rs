//! Log capture for unit tests
//!
//! Records are kept per thread so tests running in parallel only see their
//! own diagnostics.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::sync::Once;

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct ThreadLogger;

impl Log for ThreadLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: ThreadLogger = ThreadLogger;
static INIT: Once = Once::new();

/// Run `f` and return the log records it emitted
pub fn capture<F: FnOnce()>(f: F) -> Vec<(Level, String)> {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });

    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| records.take())
}
