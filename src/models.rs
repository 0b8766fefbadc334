// ============================================================================
// Wire Types
// ============================================================================
//
// Records relayed between the browser UI and the offers backend. The gateway
// never persists these; they exist so list responses can be defaulted and so
// tests can speak the backend's dialect.
//
// ============================================================================

use serde::{Deserialize, Serialize};

/// Commission model of an offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayoutModel {
    Cpa,
    Cpl,
    Cpi,
    Cpc,
}

/// Whether an offer is currently runnable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferAvailability {
    Active,
    Inactive,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    Wifi,
    Mobile,
    Both,
}

/// An affiliate offer as the backend serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: i64,
    pub offer_id: String,
    pub offer_name: String,
    pub landing_page: String,
    pub mobile_operator: String,
    pub payout: f64,
    pub offer_availability: OfferAvailability,
    pub landing_page_language: String,
    pub payout_model: PayoutModel,
    pub flow: String,
    pub connection_type: ConnectionType,
    pub restriction: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// One page of the offers dashboard, the `data` payload of list responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferPage {
    pub offers: Vec<Offer>,
    pub pagination: Pagination,
}

impl OfferPage {
    /// Empty page echoing the requested position, used when the backend
    /// answers 2xx without a `data` payload.
    pub fn empty(page: u32, limit: u32) -> Self {
        Self {
            offers: Vec::new(),
            pagination: Pagination {
                page,
                limit,
                total: 0,
                total_pages: 0,
            },
        }
    }
}

/// The signed-in user record relayed from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}
