//! Compose a storyboard prompt from structured scene data.

use serde::{Deserialize, Serialize};

/// Quality modifiers appended to every composed prompt.
pub const QUALITY_SUFFIX: &str =
    "high quality, 4K, cinematic film still, professional lighting, Slovak drama";

const PART_SEPARATOR: &str = ". ";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActorDescription {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

impl ActorDescription {
    fn summary(&self) -> String {
        let mut parts = vec![self.name.clone()];
        if let Some(age) = self.age.filter(|a| *a > 0) {
            parts.push(format!("{age} years old"));
        }
        if let Some(gender) = non_empty(&self.gender) {
            parts.push(gender.to_string());
        }
        if let Some(description) = non_empty(&self.description) {
            parts.push(description.to_string());
        }
        parts.join(", ")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Build the image prompt for a scene.
///
/// Parts are emitted in a fixed order (description, location, time, mood,
/// characters, camera) and always end with [`QUALITY_SUFFIX`]. The scene
/// title is not part of the prompt.
pub fn build_scene_prompt(
    scene: &SceneDescription,
    actors: &[ActorDescription],
    camera_movement: Option<&str>,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(description) = non_empty(&scene.description) {
        parts.push(description.to_string());
    }
    if let Some(location) = non_empty(&scene.location) {
        parts.push(format!("Location: {location}"));
    }
    if let Some(time) = non_empty(&scene.time_of_day) {
        parts.push(format!("Time: {time}"));
    }
    if let Some(mood) = non_empty(&scene.mood) {
        parts.push(format!("Mood: {mood}, cinematic, dramatic lighting"));
    }

    if !actors.is_empty() {
        let characters: Vec<String> = actors.iter().map(ActorDescription::summary).collect();
        parts.push(format!("Characters: {}", characters.join("; ")));
    }

    if let Some(camera) = camera_movement.filter(|c| !c.is_empty()) {
        parts.push(format!("Camera: {camera}"));
    }

    parts.push(QUALITY_SUFFIX.to_string());
    parts.join(PART_SEPARATOR)
}
