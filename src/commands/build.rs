//! The `build` command: parse, render, assemble, compile.

use std::time::Duration;

use anyhow::{Context as _, Result, bail};

use crate::assemble;
use crate::build::toolchain::Latexmk;
use crate::build::{BuildOutcome, BuildRequest, run_build};
use crate::cli::{BuildOpts, GlobalOpts};
use crate::config::BuildSettings;
use crate::config::resume::Resume;
use crate::logging::Logger;
use crate::render::{RenderContext, RenderOptions};

use super::CommandSetup;

/// Run the build command end to end.
///
/// # Errors
///
/// Returns an error if configuration loading, document parsing, rendering,
/// or the build pipeline fails. On compile failure the toolchain log is
/// surfaced before the error is returned.
pub fn run(global: &GlobalOpts, opts: &BuildOpts, log: &Logger) -> Result<()> {
    let setup = CommandSetup::init(global, &opts.output_dir, log)?;

    if !Latexmk::is_available() {
        bail!("latexmk not found on PATH; install a TeX distribution to build resumes");
    }

    log.stage("Parsing resume document");
    let resume = Resume::load(&opts.input)?;
    log.info(&format!(
        "loaded {} work, {} education, {} skill, {} project, {} award entries",
        resume.work.len(),
        resume.education.len(),
        resume.skills.len(),
        resume.projects.len(),
        resume.awards.len()
    ));

    log.stage("Rendering sections");
    let options = RenderOptions {
        escape_keywords: opts.escape_keywords,
        link_website: opts.link_websites,
        show_summary: opts.show_summaries,
        ..RenderOptions::default()
    };
    let ctx = RenderContext::new(&setup.registry, options);
    let document = assemble::assemble(&resume, &ctx, &setup.templates, log)?;

    let output_name = resolve_output_name(opts)?;
    let settings = BuildSettings {
        compile_timeout: Duration::from_secs(opts.compile_timeout),
        keep_sources: opts.keep_sources,
    };
    let request = BuildRequest {
        document: &document,
        paths: &setup.paths,
        settings: &settings,
        output_name: &output_name,
    };

    let outcome = run_build(&Latexmk, &request, log)?;
    report(outcome, opts.compile_timeout, log)
}

/// Map the terminal build state to the process result, surfacing the
/// diagnostic log on failure.
fn report(outcome: BuildOutcome, timeout_secs: u64, log: &Logger) -> Result<()> {
    match &outcome {
        BuildOutcome::Success { .. } => return Ok(()),
        BuildOutcome::CompileFailed { log: Some(text), .. }
        | BuildOutcome::Timeout { log: Some(text) } => {
            log.error("LaTeX log:");
            log.error(text);
        }
        _ => {}
    }
    outcome.into_result(timeout_secs).map(|_| ()).map_err(Into::into)
}

/// Output base name: explicit argument or the input file stem.
fn resolve_output_name(opts: &BuildOpts) -> Result<String> {
    if let Some(name) = &opts.output_name {
        return Ok(name.clone());
    }
    opts.input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .context("cannot derive output name from input path")
}
