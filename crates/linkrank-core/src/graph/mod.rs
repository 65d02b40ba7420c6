//! Directed link graph between pages

use crate::error::{LinkRankError, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Dense index of a node inside a [`LinkGraph`]
pub type NodeId = usize;

/// Immutable directed link graph.
///
/// Nodes are stored in sorted identifier order, so `NodeId` order matches
/// name order. Invariants upheld by every constructor:
/// - no node links to itself
/// - every link target is a node of the graph
/// - outgoing links of a node are unique
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    names: Vec<String>,
    index: HashMap<String, NodeId>,
    outgoing: Vec<Vec<NodeId>>,
    incoming: Vec<Vec<NodeId>>,
}

impl LinkGraph {
    /// Build a graph from `(page, links)` pairs, dropping self-links and
    /// links to pages that are not themselves keys.
    ///
    /// Repeated pages have their link sets merged.
    pub fn from_links<I, N, L>(pages: I) -> Self
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let raw = collect_raw(pages);
        let mut dropped = 0usize;
        let graph = Self::assemble(raw, |source, target, known| {
            let keep = source != target && known;
            if !keep {
                tracing::debug!("Dropping link {} -> {}", source, target);
                dropped += 1;
            }
            Ok(keep)
        });

        // The lenient filter never fails.
        let graph = graph.unwrap_or_default();
        if dropped > 0 {
            tracing::debug!("Dropped {} self or out-of-graph links", dropped);
        }
        graph
    }

    /// Build a graph from `(page, links)` pairs, rejecting self-links and
    /// links to unknown pages instead of dropping them.
    pub fn try_from_links<I, N, L>(pages: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, L)>,
        N: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        let raw = collect_raw(pages);
        Self::assemble(raw, |source, target, known| {
            if source == target {
                Err(LinkRankError::SelfLink(source.to_string()))
            } else if !known {
                Err(LinkRankError::UnknownTarget {
                    source_node: source.to_string(),
                    target: target.to_string(),
                })
            } else {
                Ok(true)
            }
        })
    }

    fn assemble<F>(raw: BTreeMap<String, BTreeSet<String>>, mut accept: F) -> Result<Self>
    where
        F: FnMut(&str, &str, bool) -> Result<bool>,
    {
        let names: Vec<String> = raw.keys().cloned().collect();
        let index: HashMap<String, NodeId> = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id))
            .collect();

        let mut outgoing = vec![Vec::new(); names.len()];
        let mut incoming = vec![Vec::new(); names.len()];

        for (source_id, (source, targets)) in raw.iter().enumerate() {
            for target in targets {
                let target_id = index.get(target).copied();
                if !accept(source.as_str(), target.as_str(), target_id.is_some())? {
                    continue;
                }
                if let Some(target_id) = target_id {
                    outgoing[source_id].push(target_id);
                    incoming[target_id].push(source_id);
                }
            }
        }

        // BTreeSet iteration already yields targets in id order; incoming
        // lists are filled in source order, so both are sorted.
        Ok(Self {
            names,
            index,
            outgoing,
            incoming,
        })
    }

    /// Number of nodes (`N`)
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Total number of links
    pub fn edge_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Fail with [`LinkRankError::EmptyGraph`] when the graph has no nodes
    pub fn ensure_non_empty(&self) -> Result<()> {
        if self.is_empty() {
            Err(LinkRankError::EmptyGraph)
        } else {
            Ok(())
        }
    }

    /// Node identifiers in sorted order
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn name(&self, id: NodeId) -> &str {
        &self.names[id]
    }

    pub fn id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Outgoing link targets of `id`, sorted by id
    pub fn links(&self, id: NodeId) -> &[NodeId] {
        &self.outgoing[id]
    }

    /// Nodes that link to `id`, sorted by id
    pub fn incoming(&self, id: NodeId) -> &[NodeId] {
        &self.incoming[id]
    }

    pub fn out_degree(&self, id: NodeId) -> usize {
        self.outgoing[id].len()
    }

    /// A dangling node has no outgoing links
    pub fn is_dangling(&self, id: NodeId) -> bool {
        self.outgoing[id].is_empty()
    }

    pub fn dangling_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.node_count()).filter(move |&id| self.is_dangling(id))
    }

    /// Outgoing link targets of a page by name
    pub fn links_of(&self, name: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let id = self.id(name)?;
        Some(self.outgoing[id].iter().map(move |&t| self.name(t)))
    }
}

fn collect_raw<I, N, L>(pages: I) -> BTreeMap<String, BTreeSet<String>>
where
    I: IntoIterator<Item = (N, L)>,
    N: Into<String>,
    L: IntoIterator,
    L::Item: Into<String>,
{
    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (page, links) in pages {
        raw.entry(page.into())
            .or_default()
            .extend(links.into_iter().map(Into::into));
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> LinkGraph {
        LinkGraph::from_links([
            ("a.html", vec!["b.html"]),
            ("b.html", vec!["c.html"]),
            ("c.html", vec![]),
        ])
    }

    #[test]
    fn test_nodes_sorted_and_indexed() {
        let graph = LinkGraph::from_links([("z", vec!["a"]), ("a", vec!["z"])]);
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["a", "z"]);
        assert_eq!(graph.id("a"), Some(0));
        assert_eq!(graph.id("z"), Some(1));
        assert_eq!(graph.name(1), "z");
        assert_eq!(graph.id("missing"), None);
    }

    #[test]
    fn test_self_and_unknown_links_dropped() {
        let graph = LinkGraph::from_links([
            ("a", vec!["a", "b", "outside"]),
            ("b", vec![]),
        ]);
        assert_eq!(graph.links_of("a").unwrap().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.contains("outside"));
    }

    #[test]
    fn test_strict_rejects_self_link() {
        let err = LinkGraph::try_from_links([("a", vec!["a"])]).unwrap_err();
        assert!(matches!(err, LinkRankError::SelfLink(ref n) if n == "a"));
    }

    #[test]
    fn test_strict_rejects_unknown_target() {
        let err = LinkGraph::try_from_links([("a", vec!["b"])]).unwrap_err();
        assert!(matches!(
            err,
            LinkRankError::UnknownTarget { ref source_node, ref target }
                if source_node == "a" && target == "b"
        ));
    }

    #[test]
    fn test_repeated_pages_merge_links() {
        let graph = LinkGraph::from_links([
            ("a", vec!["b"]),
            ("a", vec!["c"]),
            ("b", vec![]),
            ("c", vec![]),
        ]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.out_degree(0), 2);
    }

    #[test]
    fn test_incoming_and_dangling() {
        let graph = chain();
        let c = graph.id("c.html").unwrap();
        assert!(graph.is_dangling(c));
        assert_eq!(graph.dangling_nodes().collect::<Vec<_>>(), vec![c]);
        assert_eq!(graph.incoming(c), &[graph.id("b.html").unwrap()]);
        assert!(graph.incoming(graph.id("a.html").unwrap()).is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph = LinkGraph::from_links(Vec::<(String, Vec<String>)>::new());
        assert!(graph.is_empty());
        assert!(matches!(
            graph.ensure_non_empty(),
            Err(LinkRankError::EmptyGraph)
        ));
    }
}
