//! Collection identities and their storage keys

use serde::{Deserialize, Serialize};

/// Storage key of the remembered admin session. Not a collection: only the
/// session gate reads and writes it.
pub const SESSION_KEY: &str = "qespace_admin_session";

/// The eight independently persisted collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    HeroSlides,
    ProductCategories,
    Scenarios,
    SiteConfig,
    Leads,
    About,
    Custom,
    AdminUsers,
}

impl Collection {
    /// Load order at start-up
    pub const ALL: [Collection; 8] = [
        Collection::HeroSlides,
        Collection::ProductCategories,
        Collection::Scenarios,
        Collection::SiteConfig,
        Collection::Leads,
        Collection::About,
        Collection::Custom,
        Collection::AdminUsers,
    ];

    /// Durable storage key, shared with the browser site
    pub fn key(&self) -> &'static str {
        match self {
            Collection::HeroSlides => "qespace_hero",
            Collection::ProductCategories => "qespace_products",
            Collection::Scenarios => "qespace_scenarios",
            Collection::SiteConfig => "qespace_config",
            Collection::Leads => "qespace_leads",
            Collection::About => "qespace_about",
            Collection::Custom => "qespace_custom",
            Collection::AdminUsers => "qespace_admins",
        }
    }

    /// Short name used in logs and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Collection::HeroSlides => "hero",
            Collection::ProductCategories => "products",
            Collection::Scenarios => "scenarios",
            Collection::SiteConfig => "config",
            Collection::Leads => "leads",
            Collection::About => "about",
            Collection::Custom => "custom",
            Collection::AdminUsers => "admins",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.key() == s)
            .ok_or_else(|| format!("unknown collection: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_distinct() {
        let keys: HashSet<_> = Collection::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys.len(), 8);
        assert!(!keys.contains(SESSION_KEY));
    }

    #[test]
    fn test_parse() {
        assert_eq!("leads".parse::<Collection>(), Ok(Collection::Leads));
        assert_eq!("qespace_about".parse::<Collection>(), Ok(Collection::About));
        assert_eq!(Collection::from_key("qespace_admins"), Some(Collection::AdminUsers));
        assert!("orders".parse::<Collection>().is_err());
    }
}
