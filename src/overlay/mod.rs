//! Overlay module - derived joint/bone highlighting for the host renderer
//!
//! Re-exports only. All logic in submodules.

mod skeleton;

pub use skeleton::{
    build_overlay, to_clip_space, OverlayBone, OverlayFrame, OverlayJoint, OverlayLabel, Tint,
    BODY_SKELETON,
};
