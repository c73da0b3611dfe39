//! Target URL validation
//!
//! A link target must be a well-formed http:// or https:// URL. Script-ish
//! schemes are rejected outright so a stored link can never smuggle one
//! into a Location header.

use url::Url;

#[derive(Debug)]
pub enum TargetUrlError {
    Empty,
    ForbiddenScheme(String),
    NotHttp(String),
    Malformed(String),
}

impl std::fmt::Display for TargetUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "URL cannot be empty"),
            Self::ForbiddenScheme(scheme) => write!(f, "URL scheme not allowed: {}", scheme),
            Self::NotHttp(scheme) => write!(
                f,
                "URL must start with http:// or https://, got scheme: {}",
                scheme
            ),
            Self::Malformed(msg) => write!(f, "Invalid URL format: {}", msg),
        }
    }
}

impl std::error::Error for TargetUrlError {}

const FORBIDDEN_SCHEMES: &[&str] = &["javascript", "data", "file", "vbscript", "about", "blob"];

/// Validate a redirect target URL
pub fn validate_target_url(raw: &str) -> Result<(), TargetUrlError> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(TargetUrlError::Empty);
    }

    let lower = raw.to_lowercase();
    for scheme in FORBIDDEN_SCHEMES {
        if lower.starts_with(&format!("{}:", scheme)) {
            return Err(TargetUrlError::ForbiddenScheme(scheme.to_string()));
        }
    }

    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        let scheme = lower.split(':').next().unwrap_or_default().to_string();
        return Err(TargetUrlError::NotHttp(scheme));
    }

    Url::parse(raw).map_err(|e| TargetUrlError::Malformed(e.to_string()))?;

    Ok(())
}
