use crate::domain::AppError;
use crate::ports::{ScaffoldFilesystem, TextPatcher};

/// Text patcher editing files through a `ScaffoldFilesystem`.
pub struct FilesystemTextPatcher<'a, F: ScaffoldFilesystem> {
    fs: &'a F,
}

impl<'a, F: ScaffoldFilesystem> FilesystemTextPatcher<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }
}

impl<F: ScaffoldFilesystem> TextPatcher for FilesystemTextPatcher<'_, F> {
    fn insert_code_if_not_exist(
        &self,
        path: &str,
        anchor: &str,
        code: &str,
    ) -> Result<(), AppError> {
        let content = self.fs.read_file(path)?;
        if content.contains(code) {
            return Ok(());
        }

        let idx = find_anchor(&content, path, anchor)? + anchor.len();
        let (head, tail) = content.split_at(idx);
        self.fs.write_file(path, &format!("{}{}{}", head, code, tail))
    }

    fn uncomment_code(&self, path: &str, target: &str, marker: &str) -> Result<(), AppError> {
        let content = self.fs.read_file(path)?;
        let idx = find_anchor(&content, path, target)?;

        let uncommented = target
            .lines()
            .map(|line| line.strip_prefix(marker).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n");

        let head = &content[..idx];
        let tail = &content[idx + target.len()..];
        self.fs.write_file(path, &format!("{}{}{}", head, uncommented, tail))
    }

    fn has_file_content_with(&self, path: &str, text: &str) -> Result<bool, AppError> {
        Ok(self.fs.read_file(path)?.contains(text))
    }
}

fn find_anchor(content: &str, path: &str, anchor: &str) -> Result<usize, AppError> {
    content
        .find(anchor)
        .ok_or_else(|| AppError::AnchorNotFound { path: path.to_string(), anchor: anchor.to_string() })
}
