//! Credentials presented by a caller.

/// What the caller sent to prove its identity.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// A bearer token from the `Authorization` header.
    Bearer(String),
    /// Nothing usable was presented.
    Missing,
}

impl Credentials {
    /// Parse an `Authorization` header value. Anything other than a
    /// non-empty `Bearer` token counts as missing.
    pub fn from_authorization(header: Option<&str>) -> Self {
        let Some(value) = header else {
            return Self::Missing;
        };
        let mut parts = value.trim().splitn(2, ' ');
        match (parts.next(), parts.next()) {
            (Some(scheme), Some(token))
                if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() =>
            {
                Self::Bearer(token.trim().to_string())
            }
            _ => Self::Missing,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bearer(_) => f.write_str("Bearer(****)"),
            Self::Missing => f.write_str("Missing"),
        }
    }
}
