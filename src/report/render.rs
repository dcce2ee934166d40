use std::{path::Path, process::Command};

use super::ReportError;

/// External Graphviz invocation: `<program> -T<format> <file>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub program: String,
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            format: "x11".to_string(),
        }
    }
}

impl RenderConfig {
    fn command(&self, dot_path: &Path) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(format!("-T{}", self.format)).arg(dot_path);
        cmd
    }
}

/// Draw `dot_path` and wait for the renderer to exit.
pub fn render(config: &RenderConfig, dot_path: &Path) -> Result<(), ReportError> {
    log::info!(
        "rendering {} with {} -T{}",
        dot_path.display(),
        config.program,
        config.format
    );

    let status = config
        .command(dot_path)
        .status()
        .map_err(|source| ReportError::RenderSpawn {
            program: config.program.clone(),
            source,
        })?;

    if !status.success() {
        return Err(ReportError::RenderFailed {
            program: config.program.clone(),
            status,
        });
    }
    Ok(())
}
