//! Resume typesetting engine.
//!
//! Converts a structured JSON-with-comments resume into a PDF by rendering
//! each record into a LaTeX fragment, assembling the fragments per a
//! configurable section order and per-section (begin, mid, end) template
//! triples, and driving an external `latexmk` toolchain in an isolated
//! temporary workspace with a bounded timeout.
//!
//! The public API is organised in pipeline order:
//!
//! - **[`config`]** — load the resume document, icon registry, and section
//!   template table
//! - **[`render`]** — one renderer per record kind, plus the per-build
//!   render context
//! - **[`assemble`]** — section ordering and document assembly
//! - **[`build`]** — workspace staging, toolchain invocation, artifact and
//!   log retrieval
//! - **[`commands`]** — top-level subcommand orchestration

pub mod assemble;
pub mod build;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod escape;
pub mod exec;
pub mod logging;
pub mod render;
