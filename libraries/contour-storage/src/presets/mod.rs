//! Preset persistence
//!
//! The whole preset list is stored as one JSON payload under a fixed
//! namespace key in the settings table. Saves overwrite the list; loads
//! tolerate missing or corrupt data by returning an empty list so a bad
//! payload never interrupts startup (the failure is logged for diagnostics).

use contour_core::{EqPreset, PresetStore};
use sqlx::{Row, SqlitePool};
use tracing::warn;

use crate::database::PresetDatabase;
use crate::error::{Result, StorageError};

/// Namespace key holding the JSON-serialized preset list
pub const PRESET_NAMESPACE: &str = "eq.presets";

/// Load all presets from the namespace key
///
/// Returns an empty list when the key is absent or its payload cannot be
/// decoded.
pub async fn load_presets(pool: &SqlitePool) -> Result<Vec<EqPreset>> {
    let row = sqlx::query("SELECT value FROM app_settings WHERE key = ?")
        .bind(PRESET_NAMESPACE)
        .fetch_optional(pool)
        .await?;

    let Some(row) = row else {
        return Ok(Vec::new());
    };

    let payload: String = row.get("value");
    match serde_json::from_str(&payload) {
        Ok(presets) => Ok(presets),
        Err(e) => {
            warn!(error = %e, "corrupt preset payload, starting with empty list");
            Ok(Vec::new())
        }
    }
}

/// Persist the full preset list, replacing whatever was stored
pub async fn save_presets(pool: &SqlitePool, presets: &[EqPreset]) -> Result<()> {
    let payload = serde_json::to_string(presets)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    let now = chrono::Utc::now().timestamp();

    sqlx::query(
        "INSERT INTO app_settings (key, value, updated_at)
         VALUES (?, ?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(PRESET_NAMESPACE)
    .bind(payload)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(())
}

/// Append a preset to the stored list
pub async fn add_preset(pool: &SqlitePool, preset: EqPreset) -> Result<()> {
    let mut presets = load_presets(pool).await?;
    presets.push(preset);
    save_presets(pool, &presets).await
}

/// Delete a preset by id
///
/// Returns `true` if a preset was removed, `false` if the id was unknown.
pub async fn delete_preset(pool: &SqlitePool, preset_id: &str) -> Result<bool> {
    let mut presets = load_presets(pool).await?;
    let before = presets.len();
    presets.retain(|p| p.id != preset_id);

    if presets.len() == before {
        return Ok(false);
    }

    save_presets(pool, &presets).await?;
    Ok(true)
}

#[async_trait::async_trait]
impl PresetStore for PresetDatabase {
    async fn load_presets(&self) -> contour_core::Result<Vec<EqPreset>> {
        load_presets(self.pool()).await.map_err(Into::into)
    }

    async fn save_presets(&self, presets: &[EqPreset]) -> contour_core::Result<()> {
        save_presets(self.pool(), presets).await.map_err(Into::into)
    }
}
