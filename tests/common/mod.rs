// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed resume repository and a fluent
// builder so each integration test can set up an isolated environment
// without repeating filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use resumake::config::Paths;
use resumake::config::icons::IconRegistry;
use resumake::config::templates::SectionTemplates;

/// Write the minimal repository layout the engine expects into `root`.
///
/// Creates:
/// - `template/macros.tex` and `template/resume.tex`
/// - `assets/data/social_profiles.json` — github + linkedin descriptors
/// - `assets/data/section_templates.json` — begin/mid/end triples
pub fn setup_minimal_repo(root: &Path) {
    std::fs::create_dir_all(root.join("template")).expect("create template dir");
    std::fs::create_dir_all(root.join("assets/data")).expect("create assets dir");

    std::fs::write(root.join("template/macros.tex"), "% macros\n").expect("write macros.tex");
    std::fs::write(
        root.join("template/resume.tex"),
        "\\input{meta.tex}\n\\input{content.tex}\n",
    )
    .expect("write resume.tex");

    std::fs::write(
        root.join("assets/data/social_profiles.json"),
        r#"{
  "custom_icons": {},
  "fontawesome": {
    "github": {"command": "\\ProfileLink", "color": "MaterialGrey900"},
    "linkedin": {"command": "\\ProfileLink", "color": "MaterialLightBlue800"}
  }
}"#,
    )
    .expect("write social_profiles.json");

    std::fs::write(
        root.join("assets/data/section_templates.json"),
        r#"{
  "profile_link": {
    "begin": ["\\newcommand{\\InsertProfileLinks}", "{", "\\begin{center}"],
    "mid": ["\\LinkSep", "%"],
    "end": ["\\end{center}", "}"]
  },
  "experience": {
    "begin": ["\\section{Experience}", ""],
    "mid": ["%", "\\bigskip", "%"],
    "end": [""]
  },
  "education": {
    "begin": ["\\section{Education}", ""],
    "mid": ["%", "\\bigskip", "%"],
    "end": [""]
  },
  "technical_skill": {
    "begin": ["\\section{Technical Skills}", "\\begin{ListSkills}"],
    "end": ["\\end{ListSkills}"]
  },
  "project": {
    "begin": ["\\section{Projects}", ""],
    "mid": ["\\smallskip"],
    "end": [""]
  },
  "achievement": {
    "begin": ["\\section{Achievements}", "\\begin{AchievementList}"],
    "end": ["\\end{AchievementList}"]
  }
}"#,
    )
    .expect("write section_templates.json");
}

/// An isolated test repository backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory containing the test resume repository.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new context with a minimal but valid repository structure.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        setup_minimal_repo(root.path());
        Self { root }
    }

    /// Path to the repository root.
    pub fn root_path(&self) -> &Path {
        self.root.path()
    }

    /// Derived [`Paths`] with `out/` under the repository root.
    pub fn paths(&self) -> Paths {
        Paths::new(self.root.path(), &self.root.path().join("out"))
    }

    /// Load the icon registry written by [`setup_minimal_repo`].
    pub fn registry(&self) -> IconRegistry {
        IconRegistry::load(&self.paths().social_profiles).expect("load registry")
    }

    /// Load the template table written by [`setup_minimal_repo`].
    pub fn templates(&self) -> SectionTemplates {
        SectionTemplates::load(&self.paths().section_templates).expect("load templates")
    }

    /// Write a resume document into the repository and return its path.
    pub fn write_resume(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("resume.jsonc");
        std::fs::write(&path, content).expect("write resume document");
        path
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new context backed by a minimal repository.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Overwrite a config file under `assets/data/`.
    pub fn with_data_file(self, filename: &str, content: &str) -> Self {
        let path = self.ctx.root.path().join("assets/data").join(filename);
        std::fs::write(path, content).expect("write data file");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}
