//! Lead Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public form a lead was submitted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadSource {
    Footer,
    ContactPage,
    CustomPage,
    AboutPage,
    ProductPage,
}

impl LeadSource {
    pub const ALL: [LeadSource; 5] = [
        LeadSource::Footer,
        LeadSource::ContactPage,
        LeadSource::CustomPage,
        LeadSource::AboutPage,
        LeadSource::ProductPage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Footer => "Footer",
            LeadSource::ContactPage => "ContactPage",
            LeadSource::CustomPage => "CustomPage",
            LeadSource::AboutPage => "AboutPage",
            LeadSource::ProductPage => "ProductPage",
        }
    }
}

impl std::fmt::Display for LeadSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LeadSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadSource::ALL
            .into_iter()
            .find(|source| source.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown lead source: {s}"))
    }
}

/// Follow-up state of a lead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    #[default]
    New,
    Contacted,
    Closed,
}

impl LeadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "new",
            LeadStatus::Contacted => "contacted",
            LeadStatus::Closed => "closed",
        }
    }
}

impl std::fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LeadStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(LeadStatus::New),
            "contacted" => Ok(LeadStatus::Contacted),
            "closed" => Ok(LeadStatus::Closed),
            other => Err(format!("unknown lead status: {other}")),
        }
    }
}

/// Customer inquiry captured from a public form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub name: String,
    /// May be empty: most forms only ask for a phone number
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
    pub source: LeadSource,
    #[serde(default)]
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
}

/// Lead payload as submitted by a public form (id/status/createdAt assigned by the store)
///
/// Every field is kept as submitted, except that an empty `phone` or
/// `company` is stored as absent (`None`) rather than `""`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: String,
    pub source: LeadSource,
}

impl LeadSubmission {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, source: LeadSource) -> Self {
        Self {
            name: name.into(),
            email: String::new(),
            phone: Some(phone.into()),
            company: None,
            message: String::new(),
            source,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Build the stored lead; empty phone / company become `None`
    pub fn into_lead(self, id: String, created_at: DateTime<Utc>) -> Lead {
        Lead {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone.filter(|p| !p.is_empty()),
            company: self.company.filter(|c| !c.is_empty()),
            message: self.message,
            source: self.source,
            status: LeadStatus::New,
            created_at,
        }
    }
}
