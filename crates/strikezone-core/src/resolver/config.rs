//! Resolver configuration.

use serde::{Deserialize, Serialize};

/// Tunables for [`CollisionResolver`](super::CollisionResolver).
///
/// # Example
///
/// ```
/// use strikezone_core::resolver::ResolverConfig;
///
/// let config: ResolverConfig = serde_json::from_str(r#"{ "target_limit": 16 }"#).unwrap();
/// assert_eq!(config.target_limit, Some(16));
///
/// assert_eq!(ResolverConfig::default().target_limit, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum actors a single cast may hit.
    ///
    /// `None` means unlimited. When the cap applies, the actors nearest the
    /// origin are kept, ties broken by actor id.
    pub target_limit: Option<usize>,
}

impl ResolverConfig {
    /// Caps each cast at `limit` hits.
    #[must_use]
    pub fn with_target_limit(mut self, limit: usize) -> Self {
        self.target_limit = Some(limit);
        self
    }
}
