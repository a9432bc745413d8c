//! Identity lookup for the provenance note written into fresh headers.

/// Fallback user name.
pub const ANONYMOUS: &str = "anonymous";

/// Fallback host name.
pub const NO_HOST: &str = "nohost";

/// Source of the user and host recorded in a provenance note.
pub trait Identity {
    /// Name of the user generating the file, if known.
    fn user(&self) -> Option<String>;

    /// Name of the host generating the file, if known.
    fn host(&self) -> Option<String>;
}

/// Identity that knows nothing; notes read `anonymous@nohost`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousIdentity;

impl Identity for AnonymousIdentity {
    fn user(&self) -> Option<String> {
        None
    }

    fn host(&self) -> Option<String> {
        None
    }
}

/// Identity taken from the `USER` and `HOST` (or `HOSTNAME`) variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvIdentity;

impl Identity for EnvIdentity {
    fn user(&self) -> Option<String> {
        non_empty_var("USER")
    }

    fn host(&self) -> Option<String> {
        non_empty_var("HOST").or_else(|| non_empty_var("HOSTNAME"))
    }
}

/// Fixed identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    pub user: Option<String>,
    pub host: Option<String>,
}

impl StaticIdentity {
    /// Create an identity with both user and host set.
    pub fn new(user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            host: Some(host.into()),
        }
    }
}

impl Identity for StaticIdentity {
    fn user(&self) -> Option<String> {
        self.user.clone()
    }

    fn host(&self) -> Option<String> {
        self.host.clone()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

/// Build the provenance note text.
#[must_use]
pub fn provenance_note(program: &str, version: &str, user: &str, host: &str) -> String {
    format!("File generated using {program} {version} by {user}@{host}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_identity() {
        assert_eq!(AnonymousIdentity.user(), None);
        assert_eq!(AnonymousIdentity.host(), None);
    }

    #[test]
    fn test_static_identity() {
        let id = StaticIdentity::new("gendron", "lbit");
        assert_eq!(id.user().as_deref(), Some("gendron"));
        assert_eq!(id.host().as_deref(), Some("lbit"));
    }

    #[test]
    fn test_provenance_note() {
        assert_eq!(
            provenance_note("pdb-header", "0.1.0", "anonymous", "nohost"),
            "File generated using pdb-header 0.1.0 by anonymous@nohost"
        );
    }
}
