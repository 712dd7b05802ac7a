// store.rs
use std::path::{Path, PathBuf};

use crate::errors::AsnError;
use crate::models::asn::AsnRecord;

/// File JSON hasil generator. Dibaca ulang setiap kali dipanggil, tanpa cache.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub async fn load(&self) -> Result<Vec<AsnRecord>, AsnError> {
        if !self.exists() {
            log::error!("File data tidak ditemukan: {}", self.path.display());
            return Err(AsnError::StoreNotFound {
                path: self.path.clone(),
            });
        }

        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            log::error!("Gagal membaca {}: {:?}", self.path.display(), e);
            AsnError::StoreUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        let records: Vec<AsnRecord> = serde_json::from_str(&raw).map_err(|e| {
            log::error!("Format JSON {} tidak valid: {}", self.path.display(), e);
            AsnError::StoreUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;

        log::debug!("Memuat {} data ASN dari {}", records.len(), self.path.display());
        Ok(records)
    }
}
