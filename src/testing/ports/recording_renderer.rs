//! Test double for `BuilderRenderer` that records invocations.

use std::cell::RefCell;

use crate::domain::{AppError, Builder, ProjectConfig, Resource};
use crate::ports::BuilderRenderer;

/// Records every `execute` call and optionally fails it.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: RefCell<Vec<Vec<Builder>>>,
    pub should_fail: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { should_fail: true, ..Self::default() }
    }

    /// Builders passed to the single recorded call.
    pub fn rendered(&self) -> Vec<Builder> {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one render call");
        calls[0].clone()
    }
}

impl BuilderRenderer for RecordingRenderer {
    fn execute(
        &self,
        _config: &ProjectConfig,
        _resource: &Resource,
        builders: &[Builder],
    ) -> Result<(), AppError> {
        self.calls.borrow_mut().push(builders.to_vec());
        if self.should_fail {
            return Err(AppError::TemplateRender {
                template: "mock".to_string(),
                reason: "Mock render failure".to_string(),
            });
        }
        Ok(())
    }
}
