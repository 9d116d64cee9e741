//! Content validation command.
//!
//! Every file is classified, parsed and checked on its own; one broken file
//! never stops the others.

mod report;

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use parking_lot::Mutex;
use rayon::prelude::*;

use super::common::{collect_content_files, display_name};
use crate::cli::ValidateArgs;
use crate::config::{SiteConfig, ValidateLevel};
use crate::content::{ContentError, ContentFormat, Registry};
use crate::utils::{plural_count, plural_s};
use crate::{debug, log, logger::ProgressLine};

use report::ValidationReport;

/// Validate content files against their collection schemas
pub fn validate_site(args: &ValidateArgs, config: &SiteConfig, registry: &Registry) -> Result<()> {
    let content_dir = &config.build.content;
    let files = collect_content_files(&args.paths, content_dir)?;

    if files.is_empty() {
        log!("validate"; "no content files found");
        return Ok(());
    }

    log!("validate"; "validating {}", plural_count(files.len(), "file"));

    let report = check_files(&files, content_dir, registry, true);

    report.print(config.validate.unmatched);
    if !report.unmatched.is_empty() && !config.validate.unmatched {
        debug!("validate"; "{} not in any collection", plural_count(report.unmatched.len(), "file"));
    }

    eprintln!();
    log!("validate"; "{}", report);

    finish(&report, config.validate.level)
}

/// Validate `files` in parallel and collect the outcome.
fn check_files(
    files: &[PathBuf],
    content_dir: &Path,
    registry: &Registry,
    show_progress: bool,
) -> ValidationReport {
    let count = |format: ContentFormat| {
        files
            .iter()
            .filter(|f| ContentFormat::from_path(f) == Some(format))
            .count()
    };
    let progress = show_progress.then(|| {
        ProgressLine::new(
            "validate",
            &[
                (ContentFormat::Yaml.name(), count(ContentFormat::Yaml)),
                (ContentFormat::Markdown.name(), count(ContentFormat::Markdown)),
            ],
        )
    });

    let report = Mutex::new(ValidationReport::default());

    files.par_iter().for_each(|file| {
        let name = display_name(file, content_dir);

        match registry.load(content_dir, file) {
            Ok(Some(doc)) => report.lock().add_passed(doc.collection),
            Ok(None) => report.lock().add_unmatched(name),
            Err(ContentError::Invalid {
                collection, errors, ..
            }) => report.lock().add_invalid(name, collection, &errors),
            Err(err) => report.lock().add_unreadable(name, err.to_string()),
        }

        if let Some(progress) = &progress
            && let Some(format) = ContentFormat::from_path(file)
        {
            progress.inc(format.name());
        }
    });

    if let Some(progress) = progress {
        progress.finish();
    }

    report.into_inner()
}

/// Turn the report into the command's exit status.
fn finish(report: &ValidationReport, level: ValidateLevel) -> Result<()> {
    let failed = report.failed_file_count();
    if failed == 0 {
        return Ok(());
    }

    match level {
        ValidateLevel::Error => bail!(
            "validation failed: {} file{} with errors",
            failed,
            plural_s(failed)
        ),
        ValidateLevel::Warn => {
            log!("warning"; "{} failed validation (warn only)", plural_count(failed, "file"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const PROJECT: &str = "title: A\ndescription: B\nimage: /c.png\nurl: https://d.dev\ntags: []\ndate: 2024-01-01\n";

    fn site() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let content = crate::utils::path::normalize_path(dir.path());
        fs::create_dir_all(content.join("projects")).unwrap();
        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(content.join("projects/good.yml"), PROJECT).unwrap();
        fs::write(content.join("projects/empty-title.yml"), PROJECT.replace("title: A", "title: \"\"")).unwrap();
        fs::write(content.join("projects/broken.yml"), "title: [unclosed\n").unwrap();
        fs::write(content.join("pages.yml"), "links: []\n").unwrap();
        fs::write(content.join("blog.yml"), "links: []\n").unwrap();
        (dir, content)
    }

    #[test]
    fn test_check_files_isolates_failures() {
        let (_dir, content) = site();
        let files = collect_content_files(&[], &content).unwrap();
        let report = check_files(&files, &content, &Registry::standard(), false);

        assert_eq!(report.passed.get("projects"), Some(&1));
        assert_eq!(report.passed.get("pages"), Some(&1));
        assert_eq!(report.invalid.len(), 1);
        let (collection, violations) = &report.invalid["projects/empty-title.yml"];
        assert_eq!(collection, "projects");
        assert_eq!(violations[0].path, "title");
        assert!(report.unreadable.contains_key("projects/broken.yml"));
        assert!(report.unmatched.contains("pages.yml"));
    }

    #[test]
    fn test_explicit_path_with_parent_segments_is_validated() {
        let (_dir, content) = site();
        let file = content.join("projects/../projects/empty-title.yml");
        let files = collect_content_files(&[file], &content).unwrap();
        let report = check_files(&files, &content, &Registry::standard(), false);

        assert!(report.unmatched.is_empty());
        assert!(report.invalid.contains_key("projects/empty-title.yml"));
        assert!(finish(&report, ValidateLevel::Error).is_err());
    }

    #[test]
    fn test_finish_levels() {
        let (_dir, content) = site();
        let files = collect_content_files(&[], &content).unwrap();
        let report = check_files(&files, &content, &Registry::standard(), false);

        assert!(finish(&report, ValidateLevel::Error).is_err());
        assert!(finish(&report, ValidateLevel::Warn).is_ok());
        assert!(finish(&ValidationReport::default(), ValidateLevel::Error).is_ok());
    }
}
