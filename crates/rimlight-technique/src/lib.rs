//! Rimlight Technique - Loading and patching of rendering technique dictionaries
//!
//! A technique file describes a multipass rendering technique as a nested
//! dictionary: draw passes, their input/output wiring, and the intermediate
//! render targets they share. This crate keeps the dictionary untyped and
//! patches individual fields by dotted key path, most importantly sizing a
//! mask render target to the physical display before the technique is
//! handed to a renderer.

pub mod technique;

pub use technique::{DisplayMetrics, Technique, TechniqueError};
