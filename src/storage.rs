use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use uuid::Uuid;

/// Journal du dernier contrôle (consultable hors de la vérification).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictLog {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    #[serde(default)]
    pub conflicts: Vec<String>,
}

impl ConflictLog {
    pub fn new(conflicts: Vec<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at,
            conflicts,
        }
    }
}

pub trait Storage {
    /// Charge le journal depuis un support.
    fn load(&self) -> anyhow::Result<ConflictLog>;
    /// Sauvegarde de manière atomique.
    fn save(&self, log: &ConflictLog) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<ConflictLog> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let log: ConflictLog = serde_json::from_slice(&data)
            .with_context(|| format!("parsing conflict log {}", self.path.display()))?;
        Ok(log)
    }

    fn save(&self, log: &ConflictLog) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(log)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;

        #[cfg(feature = "logging")]
        tracing::info!(path = %self.path.display(), conflicts = log.conflicts.len(), "conflict log saved");

        Ok(())
    }
}
