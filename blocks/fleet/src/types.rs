use serde::{Deserialize, Serialize};

// ========== VESSEL ==========
pub use caliente_atoms::fleet::{Vessel, VesselImages, VesselRow, VesselSpecs};

// ========== FLEET RESPONSE ==========
/// Payload of GET /vessels: the full catalog plus the derived, ordered
/// price tiers so the filter buttons need no client-side derivation.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FleetResponse {
    pub vessels: Vec<Vessel>,
    pub price_ranges: Vec<String>,
}
