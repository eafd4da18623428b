//! Template rendering and output writing.
//!
//! A [`Renderer`] owns its own `minijinja` environment bound to one template
//! directory; there is no process-global template state. Templates are
//! resolved by name (`<name>.html` in the template directory) at render time,
//! so a missing template surfaces as an error on the first job that needs it.

use std::path::{Path, PathBuf};

use minijinja::Environment;

use crate::pages::RenderJob;

/// Stylesheet asset expected in the template directory
const STYLESHEET: &str = "style.css";

/// Errors that can occur while rendering or writing pages
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Template lookup or rendering failed
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// A page or asset could not be written
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Executes render jobs against one template directory and one output root
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
    template_dir: PathBuf,
    output_dir: PathBuf,
}

impl Renderer {
    /// Create a renderer bound to a template directory and an output root.
    pub fn new(template_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        let template_dir = template_dir.into();
        let mut env = Environment::new();
        env.set_loader(minijinja::path_loader(template_dir.clone()));

        Self {
            env,
            template_dir,
            output_dir: output_dir.into(),
        }
    }

    /// Render every job in order, stopping at the first failure.
    ///
    /// Batch semantics: a failed job aborts the run and already-written pages
    /// are left in place; there is no partial-output cleanup.
    pub fn render_all(&self, jobs: &[RenderJob]) -> Result<(), RenderError> {
        for job in jobs {
            self.render_job(job)?;
        }
        tracing::info!("wrote {} pages under {}", jobs.len(), self.output_dir.display());
        Ok(())
    }

    fn render_job(&self, job: &RenderJob) -> Result<(), RenderError> {
        let template = self.env.get_template(&format!("{}.html", job.template))?;
        let html = template.render(&job.context)?;

        let path = self.output_dir.join(&job.path);
        if let Some(parent) = path.parent() {
            create_dir(parent)?;
        }
        std::fs::write(&path, html).map_err(|e| RenderError::Io { path, source: e })?;

        tracing::debug!("rendered {}", job.path.display());
        Ok(())
    }

    /// Copy the stylesheet from the template directory into the fixed
    /// static-assets subdirectory of the output tree.
    pub fn copy_static(&self) -> Result<(), RenderError> {
        let css_dir = self.output_dir.join("static").join("css");
        create_dir(&css_dir)?;

        let dest = css_dir.join(STYLESHEET);
        std::fs::copy(self.template_dir.join(STYLESHEET), &dest)
            .map_err(|e| RenderError::Io { path: dest, source: e })?;
        Ok(())
    }
}

fn create_dir(path: &Path) -> Result<(), RenderError> {
    std::fs::create_dir_all(path).map_err(|e| RenderError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
