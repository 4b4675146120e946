pub mod filesystem;
pub mod template_renderer;
pub mod text_patcher;

pub use filesystem::FilesystemStore;
