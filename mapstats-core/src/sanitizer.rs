use crate::config::SanitizerConfig;
use crate::types::*;
use log::debug;

/// Removes image placements from a map's object collection.
///
/// Images are stored in the same shape as gameplay objects (their tag name is
/// the image file name) and must never satisfy a gamemode requirement.
pub struct ObjectSanitizer {
    image_suffix: String,
}

impl Default for ObjectSanitizer {
    fn default() -> Self {
        Self::new(&SanitizerConfig::default())
    }
}

impl ObjectSanitizer {
    pub fn new(config: &SanitizerConfig) -> Self {
        Self {
            image_suffix: config.image_suffix.clone(),
        }
    }

    pub fn is_image(&self, object: &MapObject) -> bool {
        object
            .tag_name()
            .is_some_and(|name| name.ends_with(&self.image_suffix))
    }

    /// Build a new record whose object collection holds every non-image object.
    /// Title, climb flag, id and images are carried over untouched.
    pub fn sanitize(&self, record: MapRecord) -> MapRecord {
        let MapRecord {
            title,
            is_climb,
            map_id,
            objects,
            images,
        } = record;

        let before = objects.len();
        let objects: MapObjects = objects
            .into_iter()
            .filter(|(_, object)| !self.is_image(object))
            .collect();
        debug!(
            "🧹 Removed {} image placements from \"{}\" ({} objects left)",
            before - objects.len(),
            title,
            objects.len()
        );

        MapRecord {
            title,
            is_climb,
            map_id,
            objects,
            images,
        }
    }
}
