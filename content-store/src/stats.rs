//! Dashboard statistics

use crate::core::Collections;
use crate::editing::catalog::product_count;
use serde::Serialize;
use shared::models::LeadStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub leads: usize,
    pub new_leads: usize,
    pub products: usize,
    pub slides: usize,
}

impl DashboardStats {
    pub fn collect(snapshot: &Collections) -> Self {
        Self {
            leads: snapshot.leads.len(),
            new_leads: snapshot
                .leads
                .iter()
                .filter(|l| l.status == LeadStatus::New)
                .count(),
            products: product_count(&snapshot.product_categories),
            slides: snapshot.hero_slides.len(),
        }
    }
}
