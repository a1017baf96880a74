//! URL validation and domain extraction.
//!
//! Validation is deliberately structural: the URL must parse, carry a scheme
//! and carry a non-empty host in an explicit `//` authority. No normalization
//! is applied to the stored URL, so idempotency keys on the exact submitted
//! string, and the grouping domain is read from the host as written.

use url::Url;

/// Reasons a submitted URL is rejected.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("URL must not be blank")]
    Blank,

    #[error("Malformed URL: {0}")]
    Malformed(String),

    #[error("URL must include a scheme and host: {0}")]
    MissingSchemeOrHost(String),
}

/// Prefix stripped from hosts when grouping by domain.
const WWW_PREFIX: &str = "www.";

/// Parses and validates a URL submitted for shortening.
///
/// On success returns the host exactly as it appears in the input, without
/// userinfo or port.
///
/// # Rules
///
/// 1. Blank or whitespace-only input is rejected
/// 2. Input containing whitespace, control characters or `\` is malformed
/// 3. Input must parse as an absolute URL
/// 4. The scheme must be followed by a `//` authority with a non-empty host
///
/// # Errors
///
/// Returns the [`UrlValidationError`] naming the first rule that failed.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_url("https://www.youtube.com/watch?v=x"), Ok("www.youtube.com"));
/// assert_eq!(validate_url("   "), Err(UrlValidationError::Blank));
/// assert!(validate_url("not-a-url").is_err());
/// assert!(validate_url("mailto:team@example.com").is_err());
/// assert!(validate_url("https:example.com").is_err());
/// ```
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Blank);
    }

    // The url crate trims, strips and repairs all of these; the raw input is
    // stored verbatim, so refuse anything it would have had to clean up.
    if input
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || c == '\\')
    {
        return Err(UrlValidationError::Malformed(input.to_string()));
    }

    let url = match Url::parse(input) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(UrlValidationError::MissingSchemeOrHost(input.to_string()));
        }
        Err(_) => return Err(UrlValidationError::Malformed(input.to_string())),
    };

    let host = authority_host(input).filter(|host| !host.is_empty());

    match (host, url.host_str()) {
        (Some(host), Some(parsed)) if !parsed.is_empty() => Ok(host),
        _ => Err(UrlValidationError::MissingSchemeOrHost(input.to_string())),
    }
}

/// Returns the host of `input` as written, or `None` when the scheme is not
/// followed by a `//` authority.
fn authority_host(input: &str) -> Option<&str> {
    let (_scheme, rest) = input.split_once(':')?;
    let rest = rest.strip_prefix("//")?;

    let authority = rest
        .find(['/', '?', '#'])
        .map_or(rest, |end| &rest[..end]);
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_userinfo, host_port)| host_port);

    if host_port.starts_with('[') {
        // IPv6 literal, brackets included.
        return host_port.find(']').map(|end| &host_port[..=end]);
    }

    Some(
        host_port
            .split_once(':')
            .map_or(host_port, |(host, _port)| host),
    )
}

/// Returns the grouping domain for a host returned by [`validate_url`].
///
/// Exactly one leading literal `www.` is removed; the host is otherwise left
/// as written, case included.
pub fn extract_domain(host: &str) -> String {
    host.strip_prefix(WWW_PREFIX).unwrap_or(host).to_string()
}
