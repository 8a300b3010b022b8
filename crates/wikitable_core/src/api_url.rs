//! Page URL to MediaWiki parse-API URL translation.
//!
//! Supported URL shapes (see <https://www.mediawiki.org/wiki/Manual:Short_URL>),
//! tried in this order:
//!
//! 1. `/w/index.php/Page_title`
//! 2. `/w/index.php?title=Page_title` (title must be the first parameter)
//! 3. `/wiki/Page_title`, `/view/Page_title`, any lowercase first segment
//! 4. `/Page_title`, with `api.php` at the site root

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

const API_QUERY: &str =
    "api.php?action=parse&redirects=true&format=json&errorformat=plaintext&origin=*&page=";

lazy_static! {
    static ref INDEX_PHP_PATH: Regex = Regex::new(r"^/w/index\.php/([^&#]+)").unwrap();
    static ref TITLE_PARAM: Regex = Regex::new(r"^title=([^&#]+)").unwrap();
    static ref SHORT_PATH: Regex = Regex::new(r"^/[a-z_-]+/([^&#]+)").unwrap();
    static ref ROOT_PATH: Regex = Regex::new(r"^/(.+)$").unwrap();
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("could not parse url `{url}`: {message}")]
    Parse { url: String, message: String },
    #[error("no MediaWiki page title found in `{0}`")]
    NoMatch(String),
}

/// A page title and the parse-API URL that renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiQuery {
    /// Title exactly as it appears in the page URL (possibly percent-encoded).
    pub title: String,
    pub url: String,
}

impl ApiQuery {
    /// Percent-decoded title, falling back to the raw one if it is not UTF-8.
    pub fn display_title(&self) -> Cow<'_, str> {
        urlencoding::decode(&self.title).unwrap_or(Cow::Borrowed(&self.title))
    }
}

pub fn create_api_url(raw_url: &str) -> Result<ApiQuery, UrlError> {
    let parsed = Url::parse(raw_url).map_err(|err| UrlError::Parse {
        url: raw_url.to_string(),
        message: err.to_string(),
    })?;

    let path = parsed.path();
    let (title, api_in_root) = if INDEX_PHP_PATH.is_match(path) {
        (capture(&INDEX_PHP_PATH, path), false)
    } else if path == "/w/index.php" {
        (capture(&TITLE_PARAM, parsed.query().unwrap_or_default()), false)
    } else if SHORT_PATH.is_match(path) {
        (capture(&SHORT_PATH, path), false)
    } else {
        (capture(&ROOT_PATH, path), true)
    };

    let title = title.ok_or_else(|| UrlError::NoMatch(raw_url.to_string()))?;
    let host = match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        (None, _) => return Err(UrlError::NoMatch(raw_url.to_string())),
    };
    let api_slug = if api_in_root { "" } else { "w/" };

    let url = format!(
        "{scheme}://{host}/{api_slug}{API_QUERY}{title}&prop=text",
        scheme = parsed.scheme(),
    );
    Ok(ApiQuery {
        title: title.to_string(),
        url,
    })
}

fn capture<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
