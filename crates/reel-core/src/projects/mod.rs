//! Project detail lookup for the `card-details` page.

mod catalog;

use core::fmt::Write;

use heapless::{String, Vec};
use log::{debug, warn};

use catalog::PROJECTS;

pub const DEFAULT_PROJECT_ID: &str = "project-1";
/// Where unknown project ids are sent.
pub const FALLBACK_PAGE: &str = "index.html";
pub const DETAIL_PAGE: &str = "card-details.html";
pub const SITE_NAME: &str = "ABDELRAHMAN EL KHATIB";
pub const MAX_RELATED: usize = 3;

pub const PAGE_TITLE_BYTES: usize = 128;
pub const HREF_BYTES: usize = 64;
/// Longest decoded `id` query value kept.
pub const QUERY_ID_BYTES: usize = 32;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub overview: &'static str,
    pub challenge: &'static str,
    pub solution: &'static str,
    pub results: &'static str,
    pub client: &'static str,
    pub industry: &'static str,
    pub duration: &'static str,
    pub year: &'static str,
    pub technologies: &'static [&'static str],
    pub services: &'static [&'static str],
    pub gallery: &'static [&'static str],
}

impl Project {
    /// Document title, `"<title> - <site>"`.
    pub fn page_title(&self) -> String<PAGE_TITLE_BYTES> {
        let mut out = String::new();
        if write!(out, "{} - {}", self.title, SITE_NAME).is_err() {
            warn!("projects: page title truncated id={}", self.id);
        }
        out
    }

    /// Link to this project's detail page.
    pub fn detail_href(&self) -> String<HREF_BYTES> {
        let mut out = String::new();
        if write!(out, "{}?id={}", DETAIL_PAGE, self.id).is_err() {
            warn!("projects: href truncated id={}", self.id);
        }
        out
    }
}

/// Outcome of resolving the requested project.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProjectLookup {
    Found(&'static Project),
    Redirect(&'static str),
}

pub fn all() -> &'static [Project] {
    &PROJECTS
}

pub fn find(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|project| project.id == id)
}

/// Resolve the `id` query value. A missing or empty id means the default
/// project; an unknown one redirects.
pub fn resolve(id: Option<&str>) -> ProjectLookup {
    let id = match id {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_PROJECT_ID,
    };
    match find(id) {
        Some(project) => {
            debug!("projects: showing {}", project.id);
            ProjectLookup::Found(project)
        }
        None => {
            warn!("projects: unknown id={:?}, redirecting", id);
            ProjectLookup::Redirect(FALLBACK_PAGE)
        }
    }
}

/// Decoded `id` value of a `?a=b&id=c` query string, with the same rules as
/// `URLSearchParams`: `+` is a space, `%XX` is a byte, and malformed escapes
/// stay literal. The first `id` wins. A value that is not UTF-8 or is too
/// long to be a project id comes back as `"\u{FFFD}"`, which never matches.
pub fn id_from_query(query: &str) -> Option<String<QUERY_ID_BYTES>> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| form_decode::<QUERY_ID_BYTES>(key).as_deref() == Some("id"))
        .map(|(_, value)| form_decode(value).unwrap_or_else(unmatched_id))
}

fn unmatched_id() -> String<QUERY_ID_BYTES> {
    let mut id = String::new();
    let _ = id.push(char::REPLACEMENT_CHARACTER);
    id
}

/// `application/x-www-form-urlencoded` decoding. `None` when the result
/// does not fit or is not UTF-8.
fn form_decode<const N: usize>(raw: &str) -> Option<String<N>> {
    let mut bytes: Vec<u8, N> = Vec::new();
    let raw = raw.as_bytes();
    let mut i = 0;
    while i < raw.len() {
        let byte = match raw[i] {
            b'+' => b' ',
            b'%' => match (raw.get(i + 1).and_then(hex), raw.get(i + 2).and_then(hex)) {
                (Some(hi), Some(lo)) => {
                    i += 2;
                    (hi << 4) | lo
                }
                _ => b'%',
            },
            byte => byte,
        };
        bytes.push(byte).ok()?;
        i += 1;
    }
    match String::from_utf8(bytes) {
        Ok(decoded) => Some(decoded),
        Err(_) => {
            warn!("projects: query text is not utf-8");
            None
        }
    }
}

fn hex(digit: &u8) -> Option<u8> {
    (*digit as char).to_digit(16).map(|value| value as u8)
}

/// Up to [`MAX_RELATED`] other projects, in table order.
pub fn related(current_id: &str) -> impl Iterator<Item = &'static Project> + '_ {
    PROJECTS
        .iter()
        .filter(move |project| project.id != current_id)
        .take(MAX_RELATED)
}
