//! Reads a directory of HTML pages into a [`Corpus`].

use crate::{graph::Corpus, Error, LinkGraph, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::BTreeSet, fs, path::Path};
use walkdir::WalkDir;

lazy_static! {
    static ref HREF: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Extract the `href` targets of anchor tags in `content`.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    HREF.captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Load every `*.html` file directly inside `dir`.
///
/// Keys are file names. A page's own name is removed from its link set;
/// links to files outside the corpus are kept here and dropped when the
/// graph is built.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir).follow_links(true).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if !name.ends_with(".html") {
            continue;
        }
        let content = read_document(entry.path())?;
        let mut links = extract_links(&content);
        links.remove(name);
        tracing::debug!(page = name, links = links.len(), "loaded document");
        corpus.insert(name.to_string(), links);
    }
    tracing::debug!(documents = corpus.len(), dir = %dir.display(), "loaded corpus");
    Ok(corpus)
}

fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadDocument {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidDocument {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load `dir` and build its link graph.
pub fn crawl(dir: &Path) -> Result<LinkGraph> {
    LinkGraph::from_corpus(&load_corpus(dir)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_extract_links() {
        let content = r#"
            <a href="2.html">Two</a>
            <a class="x" href="3.html">Three</a>
            <a href="2.html">Two again</a>
            <link href="style.css">
            <a name="top">
        "#;
        let links: Vec<_> = extract_links(content).into_iter().collect();
        assert_eq!(links, vec!["2.html", "3.html"]);
    }

    #[test]
    fn test_load_corpus() {
        let dir = TempDir::new().unwrap();
        let files = [
            ("1.html", r#"<a href="2.html">2</a> <a href="1.html">me</a>"#),
            ("2.html", r#"<a href="1.html">1</a> <a href="nope.html">x</a>"#),
            ("notes.txt", r#"<a href="1.html">ignored</a>"#),
        ];
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/3.html"), "").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus["1.html"].iter().collect::<Vec<_>>(), vec!["2.html"]);
        assert_eq!(
            corpus["2.html"].iter().collect::<Vec<_>>(),
            vec!["1.html", "nope.html"]
        );

        let g = crawl(dir.path()).unwrap();
        assert_eq!(g.links("2.html").unwrap(), vec!["1.html"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(crawl(dir.path()), Err(Error::EmptyCorpus)));
    }

    #[test]
    fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let res = load_corpus(&dir.path().join("missing"));
        assert!(matches!(res, Err(Error::WalkDir(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_page() {
        let dir = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::write(dir.path().join("a.html"), r#"<a href="c.html">c</a>"#).unwrap();
        fs::write(target.path().join("real.html"), r#"<a href="a.html">a</a>"#).unwrap();
        std::os::unix::fs::symlink(target.path().join("real.html"), dir.path().join("c.html"))
            .unwrap();

        let g = crawl(dir.path()).unwrap();
        assert_eq!(g.pages().collect::<Vec<_>>(), vec!["a.html", "c.html"]);
        assert_eq!(g.links("c.html").unwrap(), vec!["a.html"]);
    }

    #[test]
    fn test_unreadable_document_names_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.html");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(&err, Error::ReadDocument { path: p, .. } if *p == path));
        assert!(err.to_string().contains("gone.html"), "{err}");
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("bad.html"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(
            load_corpus(dir.path()),
            Err(Error::InvalidDocument { .. })
        ));
    }
}
