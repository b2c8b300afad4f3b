use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::assets::textures::{TextureId, TextureRegistry};

/// Texture manifest describing the named image assets for a scene.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Named texture lookup: name → file paths.
    #[serde(default)]
    pub textures: HashMap<String, TextureDescriptor>,
}

/// Describes the image files backing one material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the base color image.
    pub path: String,
    /// Optional relative path to a normal/detail map.
    #[serde(default)]
    pub normal: Option<String>,
}

/// Registered handle pair for one named material.
#[derive(Debug, Clone, Copy)]
pub struct MaterialHandles {
    pub map: TextureId,
    pub normal_map: Option<TextureId>,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Request every listed texture from the registry, returning the
    /// handles keyed by material name. Loads resolve asynchronously.
    pub fn register(&self, registry: &mut TextureRegistry) -> HashMap<String, MaterialHandles> {
        let mut handles = HashMap::with_capacity(self.textures.len());
        for (name, desc) in &self.textures {
            let map = registry.load(&desc.path);
            let normal_map = desc.normal.as_deref().map(|p| registry.load(p));
            handles.insert(name.clone(), MaterialHandles { map, normal_map });
        }
        handles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_register() {
        let json = r#"{
            "textures": {
                "sun": { "path": "Images/sun.jpg" },
                "mercury": { "path": "Images/mercury.jpg", "normal": "Images/mercurytexture.png" }
            }
        }"#;
        let manifest = TextureManifest::from_json(json).unwrap();
        assert_eq!(manifest.textures.len(), 2);
        assert_eq!(manifest.textures["sun"].normal, None);

        let mut reg = TextureRegistry::new();
        let handles = manifest.register(&mut reg);
        assert!(handles["mercury"].normal_map.is_some());
        assert!(handles["sun"].normal_map.is_none());
        // sun.jpg + mercury.jpg + mercurytexture.png
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(TextureManifest::from_json("not json").is_err());
    }
}
