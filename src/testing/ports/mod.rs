mod memory_filesystem;
mod recording_renderer;
mod scripted_patcher;
mod test_files;

pub use self::memory_filesystem::MemoryFilesystem;
pub use self::recording_renderer::RecordingRenderer;
pub use self::scripted_patcher::{PatcherCall, ScriptedPatcher};
pub use self::test_files::TestFiles;
