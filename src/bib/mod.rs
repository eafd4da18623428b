//! BibTeX reading and record normalization.
//!
//! This module turns raw BibTeX records into [`Paper`] entities. Parsing and
//! canonical re-serialization are delegated to the `biblatex` crate; this
//! module owns the normalization rules:
//!
//! - the entry-type to [`Kind`] inference table (with the e-print override)
//! - comma-splitting of multi-valued identifier fields
//! - `" and "`-splitting of the author field
//! - the year policy: an absent year defaults to 0, a malformed one is fatal

use std::path::{Path, PathBuf};

use biblatex::{Bibliography, Entry, EntryType, RetrievalError};

use crate::models::{Kind, Paper};

/// Placeholder title for records without a title field
const UNKNOWN_TITLE: &str = "Unknown Title";

/// Errors that can occur while reading or normalizing records
#[derive(Debug, thiserror::Error)]
pub enum BibError {
    /// The bibliography file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bibliography file is not valid BibTeX
    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A record carries a year field that is not an integer
    #[error("entry '{key}' has an invalid year: {reason}")]
    InvalidYear { key: String, reason: String },

    /// A record could not be re-serialized to canonical BibTeX
    #[error("entry '{key}' cannot be serialized: {reason}")]
    Serialize { key: String, reason: String },
}

/// Read one BibTeX file and normalize every record in it, in source order.
pub fn read_file(path: &Path) -> Result<Vec<Paper>, BibError> {
    let content = std::fs::read_to_string(path).map_err(|e| BibError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let bibliography = Bibliography::parse(&content).map_err(|e| BibError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut papers = Vec::new();
    for entry in bibliography.into_iter() {
        papers.push(normalize(&entry)?);
    }

    tracing::debug!("{}: {} records", path.display(), papers.len());
    Ok(papers)
}

/// Normalize one parsed record into a [`Paper`].
///
/// The returned paper keeps the record's canonical BibTeX text, so re-parsing
/// [`Paper::entry`] yields an equivalent record.
pub fn normalize(entry: &Entry) -> Result<Paper, BibError> {
    let title = entry
        .get_as::<String>("title")
        .unwrap_or_else(|_| UNKNOWN_TITLE.to_string());

    // An absent year is a deliberate default; a present but unparsable one
    // aborts the run rather than being coerced to 0.
    let year = match entry.get_as::<i64>("year") {
        Ok(year) => year,
        Err(RetrievalError::Missing(_)) => 0,
        Err(e) => {
            return Err(BibError::InvalidYear {
                key: entry.key.clone(),
                reason: e.to_string(),
            })
        }
    };

    let authors = split_authors(&entry.get_as::<String>("author").unwrap_or_default());
    let sha256 = split_list(&entry.get_as::<String>("sha256").unwrap_or_default());
    let doi = split_list(&entry.get_as::<String>("doi").unwrap_or_default());
    let arxiv = split_list(&entry.get_as::<String>("eprint").unwrap_or_default());
    let url = split_list(&entry.get_as::<String>("url").unwrap_or_default());

    let canonical = entry.to_bibtex_string().map_err(|e| BibError::Serialize {
        key: entry.key.clone(),
        reason: e.to_string(),
    })?;

    Ok(Paper {
        title,
        authors,
        year,
        sha256,
        doi,
        arxiv,
        url,
        entry: canonical,
        kind: infer_kind(entry),
    })
}

/// Infer a paper's [`Kind`] from its entry type.
///
/// Entry types outside the table map to [`Kind::Other`], except that a record
/// with a non-empty e-print field is reclassified as a preprint.
pub fn infer_kind(entry: &Entry) -> Kind {
    let kind = match entry.entry_type {
        EntryType::Article => Kind::Journal,
        EntryType::InProceedings | EntryType::Proceedings => Kind::Conference,
        EntryType::Book
        | EntryType::InBook
        | EntryType::InCollection
        | EntryType::Collection
        | EntryType::Manual => Kind::Book,
        EntryType::PhdThesis | EntryType::MastersThesis => Kind::Thesis,
        EntryType::TechReport => Kind::Preprint,
        EntryType::Software => Kind::Code,
        _ => Kind::Other,
    };

    if kind == Kind::Other {
        let eprint = entry.get_as::<String>("eprint").unwrap_or_default();
        if !eprint.trim().is_empty() {
            return Kind::Preprint;
        }
    }

    kind
}

/// Split a comma-separated identifier field.
///
/// Pieces are trimmed, empty pieces dropped, order preserved. Duplicates are
/// kept: a record listing the same identifier twice is indexed twice.
fn split_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split an "and"-joined author field, preserving source order.
///
/// Newlines in the raw field are collapsed to spaces first so that names
/// wrapped across lines still split on the literal `" and "` separator.
/// Names are trimmed but never dropped: an absent or empty author field
/// yields a single empty name, which is indexed under the empty-string key.
fn split_authors(field: &str) -> Vec<String> {
    field
        .replace('\n', " ")
        .split(" and ")
        .map(str::trim)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_entry(src: &str) -> Entry {
        Bibliography::parse(src)
            .expect("test bibliography parses")
            .into_iter()
            .next()
            .expect("test bibliography has one entry")
    }

    #[test]
    fn test_kind_inference_table() {
        let cases = [
            ("@article{k, title={T}}", Kind::Journal),
            ("@inproceedings{k, title={T}}", Kind::Conference),
            ("@proceedings{k, title={T}}", Kind::Conference),
            ("@conference{k, title={T}}", Kind::Conference),
            ("@book{k, title={T}}", Kind::Book),
            ("@inbook{k, title={T}}", Kind::Book),
            ("@incollection{k, title={T}}", Kind::Book),
            ("@manual{k, title={T}}", Kind::Book),
            ("@phdthesis{k, title={T}}", Kind::Thesis),
            ("@mastersthesis{k, title={T}}", Kind::Thesis),
            ("@techreport{k, title={T}}", Kind::Preprint),
            ("@software{k, title={T}}", Kind::Code),
            ("@misc{k, title={T}}", Kind::Other),
            ("@unpublished{k, title={T}}", Kind::Other),
            ("@bogus{k, title={T}}", Kind::Other),
        ];

        for (src, expected) in cases {
            let entry = first_entry(src);
            assert_eq!(infer_kind(&entry), expected, "entry type of {src}");
        }
    }

    #[test]
    fn test_eprint_overrides_other_to_preprint() {
        let entry = first_entry("@misc{k, title={T}, eprint={1234.5678}}");
        assert_eq!(infer_kind(&entry), Kind::Preprint);

        // The override only applies to records that would otherwise be Other.
        let entry = first_entry("@article{k, title={T}, eprint={1234.5678}}");
        assert_eq!(infer_kind(&entry), Kind::Journal);
    }

    #[test]
    fn test_split_list_trims_and_drops_empties() {
        assert_eq!(split_list("10.1/a, 10.1/b"), vec!["10.1/a", "10.1/b"]);
        assert_eq!(split_list(" a ,, b , "), vec!["a", "b"]);
        assert_eq!(split_list(""), Vec::<String>::new());
        // Duplicates survive; the index layer appends the paper twice.
        assert_eq!(split_list("x,x"), vec!["x", "x"]);
    }

    #[test]
    fn test_split_authors() {
        assert_eq!(
            split_authors("Ada Lovelace and Charles Babbage"),
            vec!["Ada Lovelace", "Charles Babbage"]
        );
        assert_eq!(
            split_authors("Ada Lovelace\nand Charles Babbage"),
            vec!["Ada Lovelace", "Charles Babbage"]
        );
        // An empty field is one empty name, not an empty list.
        assert_eq!(split_authors(""), vec![""]);
    }

    #[test]
    fn test_normalize_fields() {
        let entry = first_entry(
            "@article{key1, title={A Study}, author={Ada Lovelace and Charles Babbage}, \
             year={1843}, doi={10.1/a, 10.1/b}, sha256={abc}, url={https://example.org}}",
        );
        let paper = normalize(&entry).unwrap();

        assert_eq!(paper.title, "A Study");
        assert_eq!(paper.authors, vec!["Ada Lovelace", "Charles Babbage"]);
        assert_eq!(paper.year, 1843);
        assert_eq!(paper.doi, vec!["10.1/a", "10.1/b"]);
        assert_eq!(paper.sha256, vec!["abc"]);
        assert_eq!(paper.url, vec!["https://example.org"]);
        assert_eq!(paper.kind, Kind::Journal);
    }

    #[test]
    fn test_missing_title_uses_placeholder() {
        let entry = first_entry("@misc{k, author={A}}");
        let paper = normalize(&entry).unwrap();
        assert_eq!(paper.title, UNKNOWN_TITLE);
    }

    #[test]
    fn test_missing_year_defaults_to_zero() {
        let entry = first_entry("@article{k, title={T}}");
        let paper = normalize(&entry).unwrap();
        assert_eq!(paper.year, 0);
    }

    #[test]
    fn test_malformed_year_is_fatal() {
        let entry = first_entry("@article{bad, title={T}, year={not a year}}");
        let err = normalize(&entry).unwrap_err();
        match err {
            BibError::InvalidYear { key, .. } => assert_eq!(key, "bad"),
            other => panic!("expected InvalidYear, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip() {
        let entry = first_entry(
            "@inproceedings{rt, title={Round Trips}, author={Ada Lovelace}, year={2001}, \
             doi={10.1/rt}, eprint={2101.00001}}",
        );
        let paper = normalize(&entry).unwrap();

        let reparsed = first_entry(&paper.entry);
        let again = normalize(&reparsed).unwrap();

        assert_eq!(again.title, paper.title);
        assert_eq!(again.authors, paper.authors);
        assert_eq!(again.year, paper.year);
        assert_eq!(again.doi, paper.doi);
        assert_eq!(again.arxiv, paper.arxiv);
        assert_eq!(again.kind, paper.kind);
    }
}
