//! Query command implementation.
//!
//! Prints validated documents as a JSON array. Files that fail validation
//! are logged and left out.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Result, bail};
use parking_lot::Mutex;
use rayon::prelude::*;

use super::common::{collect_content_files, display_name};
use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::content::{Registry, ValidatedDocument};
use crate::log;
use crate::utils::plural_count;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig, registry: &Registry) -> Result<()> {
    if let Some(name) = &args.collection
        && registry.get(name).is_none()
    {
        bail!("unknown collection `{name}`");
    }

    let files = collect_content_files(&args.paths, &config.build.content)?;
    log!("query"; "querying {}", plural_count(files.len(), "file"));

    let documents = query_files(
        &files,
        &config.build.content,
        registry,
        args.collection.as_deref(),
    );
    log!("query"; "found {}", plural_count(documents.len(), "document"));

    let formatted = if args.pretty {
        serde_json::to_string_pretty(&documents)?
    } else {
        serde_json::to_string(&documents)?
    };

    if let Some(output_path) = &args.output {
        let mut file = fs::File::create(output_path)?;
        writeln!(file, "{formatted}")?;
        log!("query"; "wrote output to {}", output_path.display());
    } else {
        println!("{formatted}");
    }

    Ok(())
}

/// Load every file, keeping valid documents of the requested collection.
///
/// Results are ordered by content-relative file name.
fn query_files(
    files: &[impl AsRef<Path> + Sync],
    content_dir: &Path,
    registry: &Registry,
    collection: Option<&str>,
) -> Vec<ValidatedDocument> {
    let documents = Mutex::new(Vec::with_capacity(files.len()));

    files.par_iter().for_each(|file| {
        let file = file.as_ref();
        match registry.load(content_dir, file) {
            Ok(Some(doc)) if collection.is_none_or(|name| name == doc.collection) => {
                documents.lock().push(doc);
            }
            Ok(_) => {}
            Err(err) => {
                log!("query"; "skipping {}: {}", display_name(file, content_dir), err);
            }
        }
    });

    let mut documents = documents.into_inner();
    documents.sort_by(|a, b| a.file.cmp(&b.file));
    documents
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let content = crate::utils::path::normalize_path(dir.path());
        fs::create_dir_all(content.join("blog")).unwrap();
        fs::write(
            content.join("blog/post.md"),
            "---\nminRead: 2\ndate: 2024-03-01T09:30:00\nimage: /p.png\nauthor:\n  name: Ada\n---\n# Post\n\nBody text.\n",
        )
        .unwrap();
        fs::write(content.join("blog/bad.md"), "---\nminRead: two\n---\n").unwrap();
        fs::write(content.join("speaking.yml"), "links: []\nevents: []\n").unwrap();
        (dir, content)
    }

    #[test]
    fn test_query_skips_invalid() {
        let (_dir, content) = site();
        let files = collect_content_files(&[], &content).unwrap();
        let docs = query_files(&files, &content, &Registry::standard(), None);

        let names: Vec<_> = docs.iter().map(|d| d.file.as_str()).collect();
        assert_eq!(names, ["blog/post.md", "speaking.yml"]);

        let json = serde_json::to_value(&docs[0]).unwrap();
        assert_eq!(json["collection"], "blog");
        assert_eq!(json["kind"], "page");
        assert_eq!(json["path"], "/blog/post");
        assert_eq!(json["title"], "Post");
        assert_eq!(json["description"], "Body text.");
        assert_eq!(json["data"]["date"], "2024-03-01T09:30:00Z");
        assert_eq!(json["data"]["author"], json!({ "name": "Ada" }));
    }

    #[test]
    fn test_query_collection_filter() {
        let (_dir, content) = site();
        let files = collect_content_files(&[], &content).unwrap();
        let docs = query_files(&files, &content, &Registry::standard(), Some("speaking"));

        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].path.as_deref(), Some("/speaking"));
        assert!(docs[0].title.is_none());
    }
}
