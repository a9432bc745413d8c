//! Options for creating fresh headers.

use chrono::NaiveDate;

use crate::header::provenance::{ANONYMOUS, Identity, NO_HOST, provenance_note};

/// Options used when a header is reset to its seeded state.
///
/// The seeded state carries a placeholder classification and id, a date,
/// and a provenance note naming the generating program, user and host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderOptions {
    /// Program named in the provenance note.
    pub program: String,
    /// Program version named in the provenance note.
    pub version: String,
    /// User named in the provenance note.
    pub user: String,
    /// Host named in the provenance note.
    pub host: String,
    /// Fixed date to stamp; `None` uses today's local date.
    pub date: Option<NaiveDate>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            program: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            user: ANONYMOUS.to_string(),
            host: NO_HOST.to_string(),
            date: None,
        }
    }
}

impl HeaderOptions {
    /// Create options with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the program name.
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the program version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Resolve user and host from an identity provider.
    #[must_use]
    pub fn with_identity(mut self, identity: &impl Identity) -> Self {
        self.user = identity.user().unwrap_or_else(|| ANONYMOUS.to_string());
        self.host = identity.host().unwrap_or_else(|| NO_HOST.to_string());
        self
    }

    /// Stamp a fixed date instead of today's.
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Provenance note for these options.
    #[must_use]
    pub fn provenance(&self) -> String {
        provenance_note(&self.program, &self.version, &self.user, &self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::provenance::{AnonymousIdentity, StaticIdentity};

    #[test]
    fn test_default_options() {
        let opts = HeaderOptions::default();
        assert_eq!(opts.program, "pdb-header");
        assert_eq!(opts.user, "anonymous");
        assert_eq!(opts.host, "nohost");
        assert!(opts.date.is_none());
    }

    #[test]
    fn test_builder_chain() {
        let date = NaiveDate::from_ymd_opt(2003, 3, 11).unwrap();
        let opts = HeaderOptions::new()
            .with_program("mcsym")
            .with_version("4.2")
            .with_identity(&StaticIdentity::new("pat", "lbit"))
            .with_date(date);

        assert_eq!(opts.provenance(), "File generated using mcsym 4.2 by pat@lbit");
        assert_eq!(opts.date, Some(date));
    }

    #[test]
    fn test_identity_fallbacks() {
        let partial = StaticIdentity {
            user: Some("pat".to_string()),
            host: None,
        };
        let opts = HeaderOptions::new().with_identity(&partial);
        assert_eq!(opts.host, "nohost");

        let opts = HeaderOptions::new().with_identity(&AnonymousIdentity);
        assert_eq!(opts.user, "anonymous");
    }
}
