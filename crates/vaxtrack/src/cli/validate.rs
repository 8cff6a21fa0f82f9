//! Validate command implementation

use anyhow::Result;
use colored::Colorize;
use vaxtrack_diagnostics::{Diagnostic, Severity, VaxError};
use vaxtrack_loader::{DataSources, load_snapshot};

use super::output;

/// Configuration for validate command
pub struct ValidateConfig {
    pub sources: DataSources,
    /// Treat warnings as errors
    pub strict: bool,
    pub verbose: bool,
}

/// Check the data files and report every finding
pub fn validate(config: ValidateConfig) -> Result<()> {
    let diagnostics = collect_diagnostics(&config.sources);
    log::debug!("{} finding(s)", diagnostics.len());

    for diag in &diagnostics {
        if diag.severity == Severity::Info && !config.verbose {
            continue;
        }
        eprintln!("{}", diag.render_colored());
    }

    let errors = count(&diagnostics, Severity::Error);
    let warnings = count(&diagnostics, Severity::Warning);

    if errors == 0 && warnings == 0 {
        println!("{}", output::format_success("Data validated successfully"));
        return Ok(());
    }

    let mut summary = Vec::new();
    if errors > 0 {
        summary.push(format!("{} error(s)", errors).red().to_string());
    }
    if warnings > 0 {
        summary.push(format!("{} warning(s)", warnings).yellow().to_string());
    }
    eprintln!("{} Found {}", "Validation:".bold(), summary.join(", "));

    if errors > 0 {
        anyhow::bail!("validation failed with {} error(s)", errors);
    }
    if config.strict {
        anyhow::bail!("strict mode: {} warning(s) treated as errors", warnings);
    }
    Ok(())
}

/// Load the configured files and collect every finding
///
/// Missing files and malformed records are errors; integrity findings keep
/// the severity the engine gives them.
pub fn collect_diagnostics(sources: &DataSources) -> Vec<Diagnostic> {
    if let Err(err) = sources.validate() {
        return flatten(err);
    }
    match load_snapshot(sources) {
        Ok(snapshot) => snapshot.check_integrity(),
        Err(err) => flatten(err),
    }
}

fn flatten(err: VaxError) -> Vec<Diagnostic> {
    match err {
        VaxError::Multiple(errors) => errors.into_iter().flat_map(flatten).collect(),
        other => vec![other.to_diagnostic()],
    }
}

fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}
