//! # Shading Algorithms
//!
//! The host engine compiles one material per shading algorithm and object
//! kind. Materials are looked up by key: `illum_<alg>` for models and
//! `ground_<alg>` for the heightmapped ground.

use crate::error::SceneError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lighting model evaluated by the host's shader programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadingAlgorithm {
    /// Lighting evaluated per vertex and interpolated
    #[default]
    Gouraud,
    /// Lighting evaluated per fragment from interpolated normals
    Phong,
}

impl ShadingAlgorithm {
    /// All algorithms, in menu order.
    pub const ALL: [ShadingAlgorithm; 2] = [ShadingAlgorithm::Gouraud, ShadingAlgorithm::Phong];

    /// Lowercase name used in material keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingAlgorithm::Gouraud => "gouraud",
            ShadingAlgorithm::Phong => "phong",
        }
    }

    /// Material key for lit models, e.g. `illum_gouraud`.
    pub fn model_material_key(&self) -> String {
        format!("illum_{}", self.as_str())
    }

    /// Material key for the ground, e.g. `ground_gouraud`.
    pub fn ground_material_key(&self) -> String {
        format!("ground_{}", self.as_str())
    }
}

impl fmt::Display for ShadingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShadingAlgorithm {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SceneError::UnknownShadingAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_gouraud() {
        assert_eq!(ShadingAlgorithm::default(), ShadingAlgorithm::Gouraud);
    }

    #[test]
    fn test_material_keys() {
        assert_eq!(ShadingAlgorithm::Gouraud.model_material_key(), "illum_gouraud");
        assert_eq!(ShadingAlgorithm::Phong.ground_material_key(), "ground_phong");
    }

    #[test]
    fn test_parse() {
        assert_eq!("phong".parse::<ShadingAlgorithm>().unwrap(), ShadingAlgorithm::Phong);
        assert_eq!(" Gouraud ".parse::<ShadingAlgorithm>().unwrap(), ShadingAlgorithm::Gouraud);
        assert!(matches!(
            "flat".parse::<ShadingAlgorithm>(),
            Err(SceneError::UnknownShadingAlgorithm(name)) if name == "flat"
        ));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ShadingAlgorithm::Phong).unwrap();
        assert_eq!(json, "\"phong\"");
        let parsed: ShadingAlgorithm = serde_json::from_str("\"gouraud\"").unwrap();
        assert_eq!(parsed, ShadingAlgorithm::Gouraud);
    }
}
