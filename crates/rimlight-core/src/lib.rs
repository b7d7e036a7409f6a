//! Rimlight Core - Key path parsing and nested dictionary access
//!
//! This crate provides the foundational pieces for patching technique
//! dictionaries:
//! - `KeyPath` parsing and head/tail decomposition
//! - `get`/`set` over nested string-keyed dictionaries by dotted path
//! - Typed lookup helpers for the common leaf types

pub mod dict;
pub mod keypath;

pub use dict::{get, get_dict, get_f64, get_str, set, Dict};
pub use keypath::KeyPath;
