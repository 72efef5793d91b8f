use crate::carousel::{DetailCarousel, PrimaryCarousel, WindowSize};
use crate::fleet::Vessel;

/// Outcome of the one-shot catalog fetch that gates the first render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Secondary scene shown after a vessel is selected for detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailScene {
    pub vessel_id: i64,
    pub carousel: DetailCarousel,
}

/// The whole hero state machine: fleet data, active price filter, both
/// carousels and the preview overlay. One instance per browsing session;
/// discarded on unmount, never persisted.
#[derive(Debug, Clone)]
pub struct HeroScene {
    pub load: LoadState,
    pub vessels: Vec<Vessel>,
    pub tiers: Vec<String>,
    pub active_tier: Option<String>,
    pub primary: PrimaryCarousel,
    pub detail: Option<DetailScene>,
    pub preview: Option<String>,
    pub window: WindowSize,
}

/// What the renderer should draw right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneView {
    Loading,
    Failed,
    EmptyFleet,
    Browsing,
    Detail,
    Previewing,
}
