//! Building a link graph from a directory of documents

mod link_extractor;
mod scanner;

pub use link_extractor::{extract_links, DocumentLink, LinkType};
pub use scanner::{scan_files, ScanOptions, ScanResult};

use crate::config::CrawlConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use std::path::Path;

/// Read every document under `root` that matches `config.pattern` and build
/// the graph of links between them.
///
/// Page ids are paths relative to `root`. Links a page makes to itself and
/// links to files outside the scanned set are dropped.
pub fn crawl(root: &Path, config: &CrawlConfig) -> Result<LinkGraph> {
    let documents = scan_files(root, &ScanOptions::from(config))?;
    if documents.is_empty() {
        tracing::warn!(
            "No documents matching {} under {}",
            config.pattern,
            root.display()
        );
        return Err(LinkRankError::EmptyGraph);
    }

    let mut pages = Vec::with_capacity(documents.len());
    for doc in &documents {
        let bytes = std::fs::read(&doc.path)?;
        let content = String::from_utf8_lossy(&bytes);
        let links: Vec<String> = extract_links(&content, &doc.relative_path)
            .into_iter()
            .map(|link| link.target_path)
            .collect();
        pages.push((doc.relative_path.clone(), links));
    }

    let graph = LinkGraph::from_links(pages);
    tracing::info!(
        "Crawled {} pages with {} links from {}",
        graph.node_count(),
        graph.edge_count(),
        root.display()
    );
    Ok(graph)
}
