//! SQLite-backed persistence for EQ presets
//!
//! A small key-value settings store where the preset list lives under a
//! single namespace key as a JSON payload. `PresetDatabase` owns the pool
//! and migrations; the `presets` module provides the load/save operations
//! and the `PresetStore` trait implementation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod database;
pub mod error;
pub mod presets;

pub use database::PresetDatabase;
pub use error::{Result, StorageError};
pub use presets::{add_preset, delete_preset, load_presets, save_presets, PRESET_NAMESPACE};
