//! Builder renderer backed by embedded Minijinja templates.

use include_dir::{Dir, include_dir};
use minijinja::{Environment, UndefinedBehavior, Value, context};
use tracing::debug;

use crate::domain::builder::MARKER_PREFIX;
use crate::domain::{AppError, Builder, IfExistsAction, MarkerInsertion, ProjectConfig, Resource};
use crate::ports::{BuilderRenderer, ScaffoldFilesystem};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Renders builders from `src/assets/templates` and writes them through a
/// `ScaffoldFilesystem`.
pub struct TemplateRenderer<'a, F: ScaffoldFilesystem> {
    fs: &'a F,
    env: Environment<'static>,
}

impl<'a, F: ScaffoldFilesystem> TemplateRenderer<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { fs, env }
    }

    fn render_template(&self, name: &str, ctx: &Value) -> Result<String, AppError> {
        let source = TEMPLATES_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::TemplateNotFound(name.to_string()))?;

        self.env.render_str(source, ctx).map_err(|err| AppError::TemplateRender {
            template: name.to_string(),
            reason: err.to_string(),
        })
    }

    fn apply_insertions(&self, path: &str, insertions: &[MarkerInsertion]) -> Result<(), AppError> {
        if insertions.is_empty() {
            return Ok(());
        }

        let original = self.fs.read_file(path)?;
        let mut content = original.clone();
        for insertion in insertions {
            if fragment_present(&content, &insertion.code) {
                continue;
            }
            match insert_above_marker(&content, insertion.marker, &insertion.code) {
                Some(updated) => content = updated,
                None => debug!("Marker {} not found in {}", insertion.marker, path),
            }
        }

        if content != original {
            self.fs.write_file(path, &content)?;
        }
        Ok(())
    }
}

impl<F: ScaffoldFilesystem> BuilderRenderer for TemplateRenderer<'_, F> {
    fn execute(
        &self,
        config: &ProjectConfig,
        resource: &Resource,
        builders: &[Builder],
    ) -> Result<(), AppError> {
        let ctx = template_context(config, resource);

        for builder in builders {
            let path = builder.path(config, resource);

            if self.fs.file_exists(&path) && builder.if_exists() == IfExistsAction::Skip {
                debug!("Skipping existing file {}", path);
            } else {
                let content = self.render_template(builder.template(), &ctx)?;
                self.fs.write_file(&path, &content)?;
                debug!("Wrote {}", path);
            }

            self.apply_insertions(&path, &builder.insertions(config, resource))?;
        }
        Ok(())
    }
}

fn template_context(config: &ProjectConfig, resource: &Resource) -> Value {
    context! {
        project_name => config.name(),
        domain => config.domain.as_str(),
        resource => context! {
            group => resource.group.as_str(),
            version => resource.version.as_str(),
            kind => resource.kind.as_str(),
            plural => resource.plural(),
            qualified_group => resource.qualified_group(),
            crd_version => resource.crd_version(),
        },
    }
}

/// A fragment counts as present when its uncommented form is already in the file.
fn fragment_present(content: &str, code: &str) -> bool {
    content.contains(code.trim().trim_start_matches('#'))
}

/// Insert `code` on its own lines directly above the line holding `marker`,
/// using the marker line's indentation.
fn insert_above_marker(content: &str, marker: &str, code: &str) -> Option<String> {
    let marker_idx = content.find(&format!("{}{}", MARKER_PREFIX, marker))?;
    let line_start = content[..marker_idx].rfind('\n').map_or(0, |idx| idx + 1);
    let indent: String =
        content[line_start..].chars().take_while(|c| *c == ' ' || *c == '\t').collect();

    let mut updated = String::with_capacity(content.len() + code.len() + indent.len());
    updated.push_str(&content[..line_start]);
    for line in code.lines() {
        updated.push_str(&indent);
        updated.push_str(line);
        updated.push('\n');
    }
    updated.push_str(&content[line_start..]);
    Some(updated)
}
