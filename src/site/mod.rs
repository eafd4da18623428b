//! The site index: the full paper list plus four identifier-keyed views.
//!
//! [`Website`] is built once from the complete, ordered paper list and never
//! mutated afterwards. Each mapping goes from an identifier string to the
//! papers carrying that identifier, in processing order; a paper with N
//! identifiers of one kind appears under all N keys. Keys are never merged or
//! cross-validated between the four mappings.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::Paper;

/// A bucket of papers sharing one identifier, in processing order
pub type Bucket = Vec<Arc<Paper>>;

/// The built site index
#[derive(Debug, Default)]
pub struct Website {
    /// Every paper, in processing order
    pub papers: Vec<Arc<Paper>>,

    /// Papers by content-hash identifier
    pub sha256s: BTreeMap<String, Bucket>,

    /// Papers by DOI
    pub dois: BTreeMap<String, Bucket>,

    /// Papers by arXiv identifier
    pub arxivs: BTreeMap<String, Bucket>,

    /// Papers by author name
    pub authors: BTreeMap<String, Bucket>,
}

impl Website {
    /// Build the index in a single pass over the paper list.
    ///
    /// Deterministic: for a fixed input order, every bucket's ordering is
    /// stable. Duplicate identifiers within one record are not collapsed, so
    /// such a paper is appended to the same bucket twice.
    pub fn build(papers: Vec<Arc<Paper>>) -> Self {
        let mut site = Website::default();

        for paper in papers {
            for id in &paper.sha256 {
                site.sha256s.entry(id.clone()).or_default().push(Arc::clone(&paper));
            }
            for id in &paper.doi {
                site.dois.entry(id.clone()).or_default().push(Arc::clone(&paper));
            }
            for id in &paper.arxiv {
                site.arxivs.entry(id.clone()).or_default().push(Arc::clone(&paper));
            }
            for name in &paper.authors {
                site.authors.entry(name.clone()).or_default().push(Arc::clone(&paper));
            }
            site.papers.push(paper);
        }

        site
    }

    /// Number of indexed papers
    pub fn total(&self) -> usize {
        self.papers.len()
    }
}
