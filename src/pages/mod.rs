//! Page assembly: deciding which pages exist and what each template sees.
//!
//! [`plan`] is a pure transform from a built [`Website`] to an ordered list
//! of [`RenderJob`]s; no job depends on another job's output. The rendering
//! mechanism is left to the `render` module, so the variable mapping is plain
//! JSON rather than an engine-specific context type.

use std::cmp::Reverse;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::json;

use crate::models::Paper;
use crate::site::{Bucket, Website};

/// Relative path prefix back to the output root for top-level pages
const ROOT_URL_TOP: &str = ".";
/// Relative path prefix for per-identifier pages, which live two levels deep
const ROOT_URL_DETAIL: &str = "../..";
/// How many characters of an identifier appear in a detail-page title
const TITLE_KEY_LEN: usize = 10;

/// One page to produce: where it goes, which template renders it, and the
/// variables that template receives.
#[derive(Debug, Clone)]
pub struct RenderJob {
    /// Output path relative to the output root
    pub path: PathBuf,

    /// Template name, resolved by the renderer in the template directory
    pub template: &'static str,

    /// Variable mapping handed to the template
    pub context: serde_json::Value,
}

/// Produce the full set of render jobs for a site: the search landing page,
/// the year-grouped listing, one detail page per index key, and the fixed
/// static pages.
pub fn plan(site: &Website) -> Vec<RenderJob> {
    let mut jobs = Vec::new();

    jobs.push(index_page(site));
    jobs.push(listing_page(site));

    for (field, index) in [
        ("sha256", &site.sha256s),
        ("doi", &site.dois),
        ("arxiv", &site.arxivs),
        ("author", &site.authors),
    ] {
        for (key, bucket) in index {
            jobs.push(detail_page(field, key, bucket));
        }
    }

    jobs.push(static_page("404"));
    jobs.push(static_page("about"));

    jobs
}

/// The search landing page at the output root
fn index_page(site: &Website) -> RenderJob {
    RenderJob {
        path: PathBuf::from("index.html"),
        template: "index",
        context: json!({
            "title": "Search",
            "total": site.total(),
            "root_url": ROOT_URL_TOP,
        }),
    }
}

/// The full chronological listing, grouped by year descending
fn listing_page(site: &Website) -> RenderJob {
    RenderJob {
        path: PathBuf::from("list.html"),
        template: "hugelist",
        context: json!({
            "title": "List",
            "papers_by_year": group_by_year(&site.papers),
            "total": site.total(),
            "root_url": ROOT_URL_TOP,
        }),
    }
}

/// One detail page for a single index key.
///
/// The identifier is truncated in the page title only; the path and the
/// `identifier` variable carry the key unchanged.
fn detail_page(field: &'static str, key: &str, bucket: &Bucket) -> RenderJob {
    let short: String = key.chars().take(TITLE_KEY_LEN).collect();

    RenderJob {
        path: PathBuf::from(format!("{field}s")).join(format!("{key}.html")),
        template: "result",
        context: json!({
            "title": format!("{field} — {short}"),
            "field": field,
            "identifier": key,
            "papers": bucket,
            "total": bucket.len(),
            "root_url": ROOT_URL_DETAIL,
        }),
    }
}

/// A fixed page rendered with only its own name
fn static_page(name: &'static str) -> RenderJob {
    RenderJob {
        path: PathBuf::from(format!("{name}.html")),
        template: name,
        context: json!({
            "title": name,
            "root_url": ROOT_URL_TOP,
        }),
    }
}

/// Group papers by year, descending, with a single consecutive pass over the
/// stably sorted list so equal years keep their original relative order.
fn group_by_year(papers: &[Arc<Paper>]) -> Vec<(i64, Vec<Arc<Paper>>)> {
    let mut sorted: Vec<Arc<Paper>> = papers.to_vec();
    sorted.sort_by_key(|p| Reverse(p.year));

    let mut groups: Vec<(i64, Vec<Arc<Paper>>)> = Vec::new();
    for paper in sorted {
        match groups.last_mut() {
            Some((year, group)) if *year == paper.year => group.push(paper),
            _ => groups.push((paper.year, vec![paper])),
        }
    }
    groups
}
