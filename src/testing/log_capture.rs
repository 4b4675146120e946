//! Captures `tracing` output emitted while a closure runs.

use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

/// Log lines written by the capturing subscriber.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.buffer.lock().unwrap();
        String::from_utf8_lossy(&buffer).lines().map(str::to_string).collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines().into_iter().filter(|line| line.contains("WARN")).collect()
    }
}

pub struct CapturedWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter { buffer: Arc::clone(&self.buffer) }
    }
}

/// Run `f` with a thread-local subscriber recording INFO and above.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, CapturedLogs) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::INFO)
        .finish();
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, logs)
}
