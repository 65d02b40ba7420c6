//! Link extraction from documents

use lazy_static::lazy_static;
use regex::Regex;
use std::path::{Component, Path, PathBuf};

lazy_static! {
    static ref HREF_RE: Regex = Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).unwrap();
    static ref MARKDOWN_LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
}

/// Extracted link from a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub link_type: LinkType,
    /// Target resolved against the source document's directory
    pub target_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkType {
    Anchor,
    MarkdownLink,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Anchor => "anchor",
            LinkType::MarkdownLink => "markdown_link",
        }
    }
}

/// Extract links from document content.
///
/// HTML `<a href="...">` anchors are read from every document; markdown
/// `[text](target)` links only from `.md` files. External URLs and
/// fragment-only links are skipped.
pub fn extract_links(content: &str, source_path: &str) -> Vec<DocumentLink> {
    let mut links = extract_anchor_links(content, source_path);

    if source_path.ends_with(".md") {
        links.extend(extract_markdown_links(content, source_path));
    }

    links
}

/// Extract HTML anchors: <a href="target">
fn extract_anchor_links(content: &str, source_path: &str) -> Vec<DocumentLink> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .filter_map(|target| resolve_target(target.as_str(), source_path))
        .map(|target_path| DocumentLink {
            link_type: LinkType::Anchor,
            target_path,
        })
        .collect()
}

/// Extract markdown-style links: [text](path)
fn extract_markdown_links(content: &str, source_path: &str) -> Vec<DocumentLink> {
    MARKDOWN_LINK_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(2))
        .filter_map(|target| resolve_target(target.as_str(), source_path))
        .map(|target_path| DocumentLink {
            link_type: LinkType::MarkdownLink,
            target_path,
        })
        .collect()
}

fn resolve_target(target: &str, source_path: &str) -> Option<String> {
    let target = target.trim();
    if target.is_empty() || target.starts_with('#') || target.contains("://") {
        return None;
    }
    if target.starts_with("mailto:") {
        return None;
    }

    let target = target.split(['#', '?']).next().unwrap_or(target);
    normalize_path(target, source_path)
}

/// Resolve a relative link against the source document's directory
fn normalize_path(target: &str, source_path: &str) -> Option<String> {
    let source_dir = Path::new(source_path).parent().unwrap_or(Path::new(""));

    let target_path = Path::new(target);
    let resolved = if target_path.is_relative() {
        source_dir.join(target_path)
    } else {
        target_path.strip_prefix("/").unwrap_or(target_path).to_path_buf()
    };

    let normalized = normalize_pathbuf(&resolved);
    let joined = normalized
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

fn normalize_pathbuf(path: &Path) -> PathBuf {
    let mut components = Vec::new();

    for component in path.components() {
        match component {
            Component::ParentDir => {
                components.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
            Component::Normal(part) => components.push(part),
        }
    }

    components.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(links: &[DocumentLink]) -> Vec<&str> {
        links.iter().map(|l| l.target_path.as_str()).collect()
    }

    #[test]
    fn test_extract_anchor_links() {
        let content = r##"<p>See <a href="2.html">two</a> and
            <a class="nav" href="3.html">three</a>, <a href="https://example.com">out</a>
            and <a href="#top">top</a></p>"##;
        let links = extract_links(content, "1.html");

        assert_eq!(targets(&links), vec!["2.html", "3.html"]);
        assert!(links.iter().all(|l| l.link_type == LinkType::Anchor));
    }

    #[test]
    fn test_anchor_requires_whitespace_after_tag() {
        let links = extract_links(r#"<abbr href="x.html">"#, "1.html");
        assert!(links.is_empty());
    }

    #[test]
    fn test_strips_fragment_and_query() {
        let links = extract_links(r#"<a href="2.html#intro">"#, "1.html");
        assert_eq!(targets(&links), vec!["2.html"]);
        let links = extract_links(r#"<a href="2.html?x=1">"#, "1.html");
        assert_eq!(targets(&links), vec!["2.html"]);
    }

    #[test]
    fn test_extract_markdown_links() {
        let content = "See [docs](../README.md) and [guide](docs/guide.md)";
        let links = extract_links(content, "path/to/doc.md");

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].target_path, "path/README.md");
        assert_eq!(links[1].target_path, "path/to/docs/guide.md");
        assert_eq!(links[0].link_type.as_str(), "markdown_link");
    }

    #[test]
    fn test_markdown_ignored_in_html() {
        let links = extract_links("[guide](guide.html)", "index.html");
        assert!(links.is_empty());
    }

    #[test]
    fn test_absolute_link_is_corpus_relative() {
        let links = extract_links(r#"<a href="/sub/page.html">"#, "other/index.html");
        assert_eq!(targets(&links), vec!["sub/page.html"]);
    }
}
