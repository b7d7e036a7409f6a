//! Technique dictionaries and display-driven patching
//!
//! A technique dictionary stays untyped end to end: it is decoded from
//! JSON, patched field by field via dotted key paths, and handed onward as
//! the same nested dictionary shape. The one structured operation is
//! [`Technique::apply_display_metrics`], which rewrites a render target's
//! size and scale factor so an offscreen mask matches the physical display
//! instead of aliasing against it.

use rimlight_core::{dict, Dict, KeyPath};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum TechniqueError {
    #[error("Failed to read technique file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse technique JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Technique root must be a dictionary, got {0}")]
    NotADictionary(&'static str),
}

/// Screen geometry used to size a render target to the device
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// Bounds width in points
    pub width: f64,
    /// Bounds height in points
    pub height: f64,
    /// Native pixels per point
    pub scale_factor: f64,
}

impl DisplayMetrics {
    pub fn new(width: f64, height: f64, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Target size in the `"WxH"` form technique files use
    pub fn size_string(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

/// A loaded technique dictionary, patched in place by dotted key path
#[derive(Debug, Clone, PartialEq)]
pub struct Technique {
    dict: Dict,
}

impl Technique {
    /// Wrap an already-decoded value; the root must be a dictionary
    pub fn from_value(value: Value) -> Result<Self, TechniqueError> {
        match value {
            Value::Object(dict) => Ok(Self { dict }),
            other => Err(TechniqueError::NotADictionary(value_kind(&other))),
        }
    }

    /// Parse a technique from a JSON string
    pub fn from_json(json: &str) -> Result<Self, TechniqueError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Load a technique from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, TechniqueError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Look up a value by dotted key path
    pub fn get(&self, path: &str) -> Option<&Value> {
        dict::get(&self.dict, &KeyPath::parse(path))
    }

    /// Look up a string value by dotted key path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        dict::get_str(&self.dict, &KeyPath::parse(path))
    }

    /// Look up a numeric value by dotted key path
    pub fn get_f64(&self, path: &str) -> Option<f64> {
        dict::get_f64(&self.dict, &KeyPath::parse(path))
    }

    /// Write a value by dotted key path, overwriting what is there
    ///
    /// Returns whether the write landed; writes through missing or
    /// non-dictionary intermediates are dropped.
    pub fn set(&mut self, path: &str, value: Value) -> bool {
        dict::set(&mut self.dict, &KeyPath::parse(path), value)
    }

    /// Patch the named render target's size and scale factor to match the
    /// display
    ///
    /// Writes `targets.<target>.size` as `"WxH"` and
    /// `targets.<target>.scaleFactor`. Returns false and leaves the
    /// technique unchanged when the target does not exist.
    pub fn apply_display_metrics(&mut self, target: &str, metrics: &DisplayMetrics) -> bool {
        let size = metrics.size_string();
        let size_set = self.set(&format!("targets.{}.size", target), Value::from(size.clone()));
        let scale_set = self.set(
            &format!("targets.{}.scaleFactor", target),
            Value::from(metrics.scale_factor),
        );

        if size_set && scale_set {
            debug!(render_target = target, %size, scale = metrics.scale_factor, "patched render target for display");
            true
        } else {
            warn!(render_target = target, "technique has no such render target, left unchanged");
            false
        }
    }

    /// The underlying dictionary, for handing onward to a renderer
    pub fn as_dict(&self) -> &Dict {
        &self.dict
    }

    /// Unwrap back into a plain value
    pub fn into_value(self) -> Value {
        Value::Object(self.dict)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a dictionary",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const OUTLINE_TECHNIQUE: &str = r#"{
        "passes": {
            "mask": {
                "draw": "DRAW_SCENE",
                "outputs": { "color": "MASK" }
            },
            "combine": {
                "draw": "DRAW_QUAD",
                "inputs": { "colorSampler": "COLOR", "maskSampler": "MASK" },
                "outputs": { "color": "COLOR" },
                "metalVertexShader": "combine_vertex",
                "metalFragmentShader": "combine_fragment"
            }
        },
        "sequence": ["mask", "combine"],
        "targets": {
            "MASK": {
                "type": "color",
                "format": "rgba",
                "size": "100x100",
                "scaleFactor": 1
            }
        }
    }"#;

    #[test]
    fn test_from_json_and_get() {
        let technique = Technique::from_json(OUTLINE_TECHNIQUE).unwrap();
        assert_eq!(technique.get_str("targets.MASK.size"), Some("100x100"));
        assert_eq!(technique.get_f64("targets.MASK.scaleFactor"), Some(1.0));
        assert_eq!(technique.get_str("passes.combine.metalVertexShader"), Some("combine_vertex"));
        assert_eq!(technique.get("targets.NOPE.size"), None);
    }

    #[test]
    fn test_from_json_rejects_non_dictionary() {
        let err = Technique::from_json("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, TechniqueError::NotADictionary("an array")));

        let err = Technique::from_json("\"mask\"").unwrap_err();
        assert!(matches!(err, TechniqueError::NotADictionary("a string")));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let err = Technique::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TechniqueError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.json");
        std::fs::write(&path, OUTLINE_TECHNIQUE).unwrap();

        let technique = Technique::from_file(&path).unwrap();
        assert_eq!(technique.get_str("targets.MASK.size"), Some("100x100"));

        let err = Technique::from_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TechniqueError::Io(_)));
    }

    #[test]
    fn test_set_and_get_round_trip() {
        let mut technique = Technique::from_json(OUTLINE_TECHNIQUE).unwrap();
        assert!(technique.set("targets.MASK.size", json!("200x200")));
        assert_eq!(technique.get_str("targets.MASK.size"), Some("200x200"));
        assert_eq!(technique.get_f64("targets.MASK.scaleFactor"), Some(1.0));
    }

    #[test]
    fn test_apply_display_metrics() {
        let mut technique = Technique::from_json(OUTLINE_TECHNIQUE).unwrap();
        let metrics = DisplayMetrics::new(375.0, 667.0, 2.0);

        assert!(technique.apply_display_metrics("MASK", &metrics));
        assert_eq!(technique.get_str("targets.MASK.size"), Some("375x667"));
        assert_eq!(technique.get_f64("targets.MASK.scaleFactor"), Some(2.0));

        // Sibling keys in the target and the rest of the technique survive
        assert_eq!(technique.get_str("targets.MASK.format"), Some("rgba"));
        assert_eq!(technique.get("sequence"), Some(&json!(["mask", "combine"])));
        assert_eq!(technique.get_str("passes.mask.draw"), Some("DRAW_SCENE"));
    }

    #[test]
    fn test_apply_display_metrics_missing_target() {
        let mut technique = Technique::from_json(OUTLINE_TECHNIQUE).unwrap();
        let before = technique.clone();
        let metrics = DisplayMetrics::new(375.0, 667.0, 2.0);

        assert!(!technique.apply_display_metrics("GLOW", &metrics));
        assert_eq!(technique, before);
    }

    #[test]
    fn test_size_string() {
        assert_eq!(DisplayMetrics::new(375.0, 667.0, 2.0).size_string(), "375x667");
        assert_eq!(DisplayMetrics::new(414.5, 896.0, 3.0).size_string(), "414.5x896");
    }

    #[test]
    fn test_into_value_round_trip() {
        let technique = Technique::from_json(OUTLINE_TECHNIQUE).unwrap();
        let value = technique.clone().into_value();
        assert_eq!(Technique::from_value(value).unwrap(), technique);
    }
}
