//! Validation for outbound profile links.
//!
//! External links are only rendered when they use http(s) and point at one
//! of [`ALLOWED_PROFILE_DOMAINS`] or a subdomain of one.

use thiserror::Error;

use crate::config::ALLOWED_PROFILE_DOMAINS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link is empty")]
    Empty,
    #[error("link must start with http:// or https://")]
    InvalidProtocol,
    #[error("link has no host")]
    NoHost,
    #[error("domain '{0}' is not an allowed profile domain")]
    DomainNotAllowed(String),
}

/// Check that `url` may be rendered as an external profile link.
///
/// Returns the trimmed URL on success.
pub fn validate_profile_url(url: &str) -> Result<&str, LinkError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(LinkError::Empty);
    }

    let host = host_of(url)?;
    if !is_domain_allowed(&host) {
        return Err(LinkError::DomainNotAllowed(host));
    }
    Ok(url)
}

/// Lowercased host without port or a leading `www.`.
fn host_of(url: &str) -> Result<String, LinkError> {
    let lower = url.to_lowercase();
    let rest = lower
        .strip_prefix("https://")
        .or_else(|| lower.strip_prefix("http://"))
        .ok_or(LinkError::InvalidProtocol)?;

    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    // Drop credentials before the host.
    let authority = authority.rsplit('@').next().unwrap_or_default();
    let host = authority.split(':').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        Err(LinkError::NoHost)
    } else {
        Ok(host.to_string())
    }
}

fn is_domain_allowed(host: &str) -> bool {
    ALLOWED_PROFILE_DOMAINS
        .iter()
        .any(|allowed| host == *allowed || host.ends_with(&format!(".{allowed}")))
}
