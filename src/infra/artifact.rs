// ============================================================
// Layer 6 — Artifact Store
// ============================================================
// Saves and restores trained networks using Burn's
// CompactRecorder.
//
// What gets saved per artifact `<name>`:
//   1. <name>.mpk.gz        — all learned parameters
//   2. <name>.config.json   — network topology config
//   3. latest.json          — name of the last artifact saved
//
// Why save the config separately?
//   When loading for inference we must rebuild a network with
//   the exact topology (input_dim, hidden_dim, num_classes)
//   before the weights can be restored into it. Without the
//   config we cannot reconstruct the network.
//
// Burn's CompactRecorder:
//   - Serialises parameters to MessagePack, gzip-compressed
//   - Type-safe: loading fails if the topology doesn't match
//
// Reference: Burn Book §5 (Records and Checkpointing)

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};

use crate::ml::model::{TopicNet, TopicNetConfig};

/// Manages saving and loading of trained artifacts.
/// All files live in one configured directory.
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Create a store rooted at `dir`, creating the directory if
    /// it doesn't already exist.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        fs::create_dir_all(&dir).ok();
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save a network's full state under `name`.
    ///
    /// Writes the weights through CompactRecorder (which appends
    /// its own .mpk.gz extension), the topology sidecar, and the
    /// latest-artifact pointer.
    pub fn save<B: Backend>(
        &self,
        model: &TopicNet<B>,
        net_cfg: &TopicNetConfig,
        name: &str,
    ) -> Result<()> {
        let path = self.dir.join(name);

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| {
                format!("Failed to save artifact to '{}'", path.display())
            })?;

        let cfg_path = self.config_path(name);
        fs::write(&cfg_path, serde_json::to_string_pretty(net_cfg)?)
            .with_context(|| {
                format!("Cannot write config to '{}'", cfg_path.display())
            })?;

        // Update the latest pointer so load_latest knows which
        // artifact to pick up.
        let latest_path = self.dir.join("latest.json");
        fs::write(&latest_path, serde_json::to_string(&name)?)
            .with_context(|| "Failed to write latest.json")?;

        tracing::debug!("Saved artifact '{}'", name);
        Ok(())
    }

    /// Load the artifact saved under `name`: rebuild the network
    /// from its config sidecar, then restore the weights into it.
    pub fn load<B: Backend>(
        &self,
        name: &str,
        device: &B::Device,
    ) -> Result<TopicNet<B>> {
        let net_cfg = self.load_config(name)?;
        let model: TopicNet<B> = net_cfg.init(device);

        let path = self.dir.join(name);
        let record = CompactRecorder::new()
            .load(path.clone(), device)
            .with_context(|| {
                format!(
                    "Cannot load artifact '{}'. Have you trained the model first?",
                    path.display()
                )
            })?;

        tracing::info!("Loaded artifact '{}'", name);
        Ok(model.load_record(record))
    }

    /// Load whatever artifact was saved last.
    pub fn load_latest<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<TopicNet<B>> {
        let name = self.latest()?;
        self.load(&name, device)
    }

    /// Name of the most recently saved artifact.
    pub fn latest(&self) -> Result<String> {
        let path = self.dir.join("latest.json");
        let s = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot find '{}'. Have you run 'train' first?",
                path.display()
            )
        })?;
        Ok(serde_json::from_str::<String>(&s)?)
    }

    fn load_config(&self, name: &str) -> Result<TopicNetConfig> {
        let cfg_path = self.config_path(name);
        let json = fs::read_to_string(&cfg_path).with_context(|| {
            format!(
                "Cannot read network config from '{}'. \
                 The artifact directory may be incomplete.",
                cfg_path.display()
            )
        })?;
        Ok(serde_json::from_str(&json)?)
    }

    fn config_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.config.json"))
    }
}
