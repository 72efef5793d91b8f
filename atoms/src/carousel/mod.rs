// Re-export model types and service functions
pub mod model;
pub mod service;

pub use model::{
    DetailCarousel, DetailCategory, DetailClick, PrimaryCarousel, SlotPosition, SwipeDirection,
    SwipeGesture, WindowSize,
};
pub use service::{recenter, signed_offset, CANONICAL_START};
