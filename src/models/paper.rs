//! Paper model representing a normalized bibliographic record.

use serde::{Deserialize, Serialize};

/// The normalized classification of a paper
///
/// Inferred from the record's entry type (see [`crate::bib::infer_kind`]);
/// records that fit no category are classified as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Book,
    Journal,
    Code,
    Conference,
    Preprint,
    Thesis,
    Other,
}

impl Kind {
    /// Returns the display name of the kind
    pub fn name(&self) -> &str {
        match self {
            Kind::Book => "book",
            Kind::Journal => "journal",
            Kind::Code => "code",
            Kind::Conference => "conference",
            Kind::Preprint => "preprint",
            Kind::Thesis => "thesis",
            Kind::Other => "other",
        }
    }
}

impl Default for Kind {
    fn default() -> Self {
        Kind::Other
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A normalized bibliographic record
///
/// This struct provides a standardized view of one BibTeX record regardless
/// of which fields the source file carries. A `Paper` is never mutated after
/// construction; the indexing layer shares one instance across every bucket
/// that references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paper {
    /// Paper title
    pub title: String,

    /// Authors in source order, split from the record's "and"-joined field
    pub authors: Vec<String>,

    /// Publication year; 0 when the record has no year field
    pub year: i64,

    /// Content-hash identifiers (comma-separated in the source field)
    pub sha256: Vec<String>,

    /// Digital Object Identifiers
    pub doi: Vec<String>,

    /// arXiv identifiers, sourced from the record's e-print field
    pub arxiv: Vec<String>,

    /// URLs
    pub url: Vec<String>,

    /// Canonical re-serialization of the source record
    pub entry: String,

    /// Normalized classification
    pub kind: Kind,
}
