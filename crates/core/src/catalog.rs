//! Static catalogs: supported provider models and camera-movement presets.

use serde::{Deserialize, Serialize};

use crate::generation::Capability;

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Fast,
    Medium,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Standard,
    High,
    Premium,
}

/// A provider model offered to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub capability: Capability,
    /// Human-readable price per unit, as quoted by the provider.
    pub price: &'static str,
    pub speed: Speed,
    pub quality: Quality,
    pub recommended: bool,
}

pub const MODELS: &[ModelInfo] = &[
    ModelInfo {
        id: "higgsfield/soul",
        name: "Higgsfield Soul",
        capability: Capability::ImageGeneration,
        price: "$0.05",
        speed: Speed::Fast,
        quality: Quality::Standard,
        recommended: false,
    },
    ModelInfo {
        id: "bytedance/seedream/v4/text-to-image",
        name: "Seedream 4.0",
        capability: Capability::ImageGeneration,
        price: "$0.058",
        speed: Speed::Medium,
        quality: Quality::High,
        recommended: true,
    },
    ModelInfo {
        id: "flux/kontext",
        name: "Flux Kontext",
        capability: Capability::ImageGeneration,
        price: "$0.08",
        speed: Speed::Medium,
        quality: Quality::High,
        recommended: false,
    },
    ModelInfo {
        id: "minimax/hailuo-02",
        name: "MiniMax Hailuo",
        capability: Capability::VideoGeneration,
        price: "$0.20",
        speed: Speed::Fast,
        quality: Quality::Standard,
        recommended: false,
    },
    ModelInfo {
        id: "kuaishou/kling-2.6",
        name: "Kling 2.6",
        capability: Capability::VideoGeneration,
        price: "$0.29",
        speed: Speed::Medium,
        quality: Quality::High,
        recommended: true,
    },
    ModelInfo {
        id: "higgsfield/dop-i2v",
        name: "Higgsfield DoP",
        capability: Capability::VideoGeneration,
        price: "$0.30",
        speed: Speed::Medium,
        quality: Quality::High,
        recommended: false,
    },
    ModelInfo {
        id: "eleven_flash_v2_5",
        name: "ElevenLabs Flash",
        capability: Capability::SpeechSynthesis,
        price: "0.5 cr/char",
        speed: Speed::Fast,
        quality: Quality::High,
        recommended: false,
    },
    ModelInfo {
        id: "eleven_multilingual_v2",
        name: "ElevenLabs Multilingual",
        capability: Capability::SpeechSynthesis,
        price: "1 cr/char",
        speed: Speed::Medium,
        quality: Quality::Premium,
        recommended: true,
    },
];

/// All catalog models offered for a capability, in catalog order.
pub fn models_for(capability: Capability) -> impl Iterator<Item = &'static ModelInfo> {
    MODELS.iter().filter(move |m| m.capability == capability)
}

pub fn find_model(id: &str) -> Option<&'static ModelInfo> {
    MODELS.iter().find(|m| m.id == id)
}

// ---------------------------------------------------------------------------
// Camera movements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CameraCategory {
    Dolly,
    Crane,
    Tracking,
    Handheld,
    Static,
    Special,
}

/// A named camera move and the prompt fragment that produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CameraMovement {
    pub id: &'static str,
    pub name: &'static str,
    pub category: CameraCategory,
    pub description: &'static str,
    pub prompt: &'static str,
}

macro_rules! movement {
    ($id:literal, $name:literal, $cat:ident, $desc:literal, $prompt:literal) => {
        CameraMovement {
            id: $id,
            name: $name,
            category: CameraCategory::$cat,
            description: $desc,
            prompt: $prompt,
        }
    };
}

pub const CAMERA_MOVEMENTS: &[CameraMovement] = &[
    movement!("dolly_in", "Dolly In", Dolly,
        "Camera moves towards the subject",
        "smooth dolly in movement, camera pushing forward towards subject"),
    movement!("dolly_out", "Dolly Out", Dolly,
        "Camera moves away from the subject",
        "smooth dolly out movement, camera pulling back from subject"),
    movement!("dolly_zoom", "Dolly Zoom (Vertigo)", Dolly,
        "Camera moves while zooming opposite direction",
        "dolly zoom vertigo effect, background shifts while subject stays same size"),
    movement!("crane_up", "Crane Up", Crane,
        "Camera rises vertically",
        "crane shot rising up, camera elevating smoothly"),
    movement!("crane_down", "Crane Down", Crane,
        "Camera descends vertically",
        "crane shot descending, camera lowering smoothly"),
    movement!("tracking_left", "Tracking Left", Tracking,
        "Camera moves parallel to the left",
        "smooth tracking shot moving left, lateral camera movement"),
    movement!("tracking_right", "Tracking Right", Tracking,
        "Camera moves parallel to the right",
        "smooth tracking shot moving right, lateral camera movement"),
    movement!("orbit_360", "360° Orbit", Tracking,
        "Camera orbits completely around subject",
        "360 degree orbit shot, camera circling around subject"),
    movement!("handheld_subtle", "Subtle Handheld", Handheld,
        "Slight natural camera movement",
        "subtle handheld camera movement, slight organic motion"),
    movement!("handheld_shaky", "Shaky Handheld", Handheld,
        "Pronounced shaky camera",
        "shaky handheld camera, nervous unstable movement"),
    movement!("static_wide", "Static Wide", Static,
        "Fixed wide shot, no movement",
        "static wide shot, locked off camera, no movement"),
    movement!("static_closeup", "Static Close-up", Static,
        "Fixed close-up shot",
        "static close-up shot, locked camera on face or detail"),
    movement!("slow_motion", "Slow Motion", Special,
        "Slowed down footage",
        "slow motion footage, time stretched, dramatic slow movement"),
    movement!("whip_pan", "Whip Pan", Special,
        "Very fast horizontal pan",
        "whip pan, fast horizontal camera movement with motion blur"),
    movement!("dutch_angle", "Dutch Angle", Special,
        "Tilted camera angle",
        "dutch angle tilted camera, canted frame"),
];

pub fn find_camera_movement(id: &str) -> Option<&'static CameraMovement> {
    CAMERA_MOVEMENTS.iter().find(|m| m.id == id)
}

pub fn camera_movements_in(category: CameraCategory) -> impl Iterator<Item = &'static CameraMovement> {
    CAMERA_MOVEMENTS.iter().filter(move |m| m.category == category)
}

/// Expand a preset id into its prompt text; anything else passes through.
pub fn resolve_camera_movement(value: &str) -> String {
    match find_camera_movement(value) {
        Some(preset) => preset.prompt.to_string(),
        None => value.to_string(),
    }
}
