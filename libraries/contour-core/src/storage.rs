//! Preset persistence boundary

use crate::error::Result;
use crate::types::EqPreset;
use async_trait::async_trait;

/// Preset store abstraction
///
/// The whole preset list lives under one fixed namespace key; saves
/// overwrite the list, loads tolerate missing or corrupt data by returning
/// an empty list (the failure is logged, not raised).
#[async_trait]
pub trait PresetStore: Send + Sync {
    /// Load all saved presets
    ///
    /// Returns an empty list when nothing has been saved yet or the stored
    /// payload cannot be decoded.
    async fn load_presets(&self) -> Result<Vec<EqPreset>>;

    /// Persist the full preset list, replacing whatever was stored
    async fn save_presets(&self, presets: &[EqPreset]) -> Result<()>;
}
