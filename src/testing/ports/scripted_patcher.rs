//! Test double for `TextPatcher` with scripted outcomes.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::domain::AppError;
use crate::ports::TextPatcher;

/// One recorded patcher call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatcherCall {
    Insert { path: String, anchor: String },
    Uncomment { path: String, target: String },
    Contains { path: String, text: String },
}

/// Records calls; edits fail for scripted targets and contains-checks answer
/// from a scripted set.
#[derive(Default)]
pub struct ScriptedPatcher {
    pub calls: RefCell<Vec<PatcherCall>>,
    failing_edits: HashSet<String>,
    present: HashSet<String>,
    failing_checks: HashMap<String, String>,
}

impl ScriptedPatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the edit whose anchor or target equals `target` fail.
    pub fn fail_edit(mut self, target: &str) -> Self {
        self.failing_edits.insert(target.to_string());
        self
    }

    /// Report `text` as present in any file.
    pub fn with_content(mut self, text: &str) -> Self {
        self.present.insert(text.to_string());
        self
    }

    /// Make the contains-check for `text` fail with an I/O error.
    pub fn fail_check(mut self, text: &str) -> Self {
        self.failing_checks.insert(text.to_string(), "Mock read failure".to_string());
        self
    }

    fn edit_result(&self, path: &str, target: &str) -> Result<(), AppError> {
        if self.failing_edits.contains(target) {
            return Err(AppError::AnchorNotFound {
                path: path.to_string(),
                anchor: target.to_string(),
            });
        }
        Ok(())
    }
}

impl TextPatcher for ScriptedPatcher {
    fn insert_code_if_not_exist(
        &self,
        path: &str,
        anchor: &str,
        _code: &str,
    ) -> Result<(), AppError> {
        self.calls
            .borrow_mut()
            .push(PatcherCall::Insert { path: path.to_string(), anchor: anchor.to_string() });
        self.edit_result(path, anchor)
    }

    fn uncomment_code(&self, path: &str, target: &str, _marker: &str) -> Result<(), AppError> {
        self.calls
            .borrow_mut()
            .push(PatcherCall::Uncomment { path: path.to_string(), target: target.to_string() });
        self.edit_result(path, target)
    }

    fn has_file_content_with(&self, path: &str, text: &str) -> Result<bool, AppError> {
        self.calls
            .borrow_mut()
            .push(PatcherCall::Contains { path: path.to_string(), text: text.to_string() });
        if let Some(reason) = self.failing_checks.get(text) {
            return Err(AppError::from(std::io::Error::other(reason.clone())));
        }
        Ok(self.present.contains(text))
    }
}
