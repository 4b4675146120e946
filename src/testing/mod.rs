mod log_capture;
pub mod ports;

pub use log_capture::{CapturedLogs, capture_logs};
pub use ports::{MemoryFilesystem, PatcherCall, RecordingRenderer, ScriptedPatcher, TestFiles};
