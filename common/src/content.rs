use serde::Serialize;
use thiserror::Error;
use url::Url;

/// An external citation attached to a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub title: &'static str,
    pub link: &'static str,
}

/// Anything the accordion can render: a title, a body and optional links.
pub trait Displayable {
    fn title(&self) -> &str;

    /// Body text. Line breaks separate paragraphs.
    fn body(&self) -> &str;

    fn links(&self) -> Option<&[Link]> {
        None
    }

    /// Body split into its display lines.
    fn paragraphs(&self) -> Vec<&str> {
        self.body().lines().collect()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Entry has an empty title")]
    EmptyTitle,

    #[error("Entry '{title}' has empty content")]
    EmptyContent { title: String },

    #[error("Entry '{title}' has a link with an empty title")]
    EmptyLinkTitle { title: String },

    #[error("Entry '{title}' has an invalid link '{link}': {reason}")]
    InvalidLink {
        title: String,
        link: String,
        reason: String,
    },
}

/// Check that a link is an absolute http(s) URL with a host.
pub fn check_link_url(link: &str) -> Result<Url, String> {
    let url = Url::parse(link).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err("missing host".into());
    }
    Ok(url)
}

/// Validate a single record against the content invariants.
pub fn validate_item<T: Displayable + ?Sized>(item: &T) -> Result<(), ContentError> {
    let title = item.title();
    if title.trim().is_empty() {
        return Err(ContentError::EmptyTitle);
    }
    if item.body().trim().is_empty() {
        return Err(ContentError::EmptyContent {
            title: title.to_string(),
        });
    }
    for link in item.links().unwrap_or_default() {
        if link.title.trim().is_empty() {
            return Err(ContentError::EmptyLinkTitle {
                title: title.to_string(),
            });
        }
        check_link_url(link.link).map_err(|reason| ContentError::InvalidLink {
            title: title.to_string(),
            link: link.link.to_string(),
            reason,
        })?;
    }
    Ok(())
}

/// Validate every record, stopping at the first violation.
pub fn validate_all<T: Displayable>(items: &[T]) -> Result<(), ContentError> {
    items.iter().try_for_each(validate_item)
}
