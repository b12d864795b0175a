//! Service name normalization
//!
//! Free-text service labels are grouped under a canonical key: lower-case,
//! accents removed, surrounding whitespace trimmed.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Canonical grouping key for a service label
///
/// Lower-cases, decomposes (NFD), drops combining marks, then trims.
/// Applying it twice gives the same result as applying it once.
pub fn normalize_service(service: &str) -> String {
    let stripped: String = service
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    stripped.trim().to_string()
}
