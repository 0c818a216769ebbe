use serde::Deserialize;

use crate::error::CatalogError;

/// `?user_id=` query string shared by the favorite routes.
///
/// Kept as a string so a missing or malformed value maps to a
/// `CatalogError` rather than axum's plain-text rejection.
#[derive(Deserialize, Default)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    pub fn require(&self) -> Result<i32, CatalogError> {
        let raw = self
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(CatalogError::MissingParameter("user_id"))?;
        raw.parse()
            .map_err(|_| CatalogError::InvalidParameter("user_id"))
    }
}

/// Parse an `{id}` path segment. An integer too large for a primary key
/// names no stored record and yields `not_found`.
pub fn parse_id(raw: &str, not_found: CatalogError) -> Result<i32, CatalogError> {
    if let Ok(id) = raw.parse() {
        return Ok(id);
    }
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Err(not_found)
    } else {
        Err(CatalogError::InvalidParameter("id"))
    }
}
