mod builder_renderer;
mod scaffold_filesystem;
mod scaffolder;
mod text_patcher;

pub use builder_renderer::BuilderRenderer;
pub use scaffold_filesystem::ScaffoldFilesystem;
pub use scaffolder::{ScaffoldReport, Scaffolder};
pub use text_patcher::TextPatcher;
