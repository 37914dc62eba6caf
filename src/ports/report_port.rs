//! Report generation port trait.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::domain::analysis::FullAnalysis;
use crate::domain::error::TradelabError;

/// Port for rendering and writing analysis reports.
pub trait ReportPort {
    fn render(&self, analysis: &FullAnalysis) -> Result<String, TradelabError>;

    /// Default implementation: render, then write to `output_path` or stdout.
    fn write(&self, analysis: &FullAnalysis, output_path: Option<&Path>) -> Result<(), TradelabError> {
        let content = self.render(analysis)?;
        match output_path {
            Some(path) => fs::write(path, content)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
