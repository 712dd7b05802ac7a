// errors.rs
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AsnError {
    StoreNotFound { path: PathBuf },
    StoreUnreadable { path: PathBuf, reason: String },
    InvalidCount(i64),
    Distribution(String),
    Export(String),
}

impl AsnError {
    /// Kondisi yang dipetakan host ke respons 404.
    pub fn is_store_missing(&self) -> bool {
        matches!(
            self,
            AsnError::StoreNotFound { .. } | AsnError::StoreUnreadable { .. }
        )
    }
}

impl fmt::Display for AsnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsnError::StoreNotFound { path } => {
                write!(f, "File data tidak ditemukan: {}", path.display())
            }
            AsnError::StoreUnreadable { path, reason } => {
                write!(f, "File data {} tidak dapat dibaca: {}", path.display(), reason)
            }
            AsnError::InvalidCount(n) => {
                write!(
                    f,
                    "Jumlah data harus antara 1 dan {} (diminta {})",
                    u32::MAX,
                    n
                )
            }
            AsnError::Distribution(e) => write!(f, "Parameter distribusi tidak valid: {}", e),
            AsnError::Export(e) => write!(f, "Gagal menyimpan data: {}", e),
        }
    }
}

impl std::error::Error for AsnError {}

impl From<rust_xlsxwriter::XlsxError> for AsnError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        AsnError::Export(e.to_string())
    }
}

impl From<rand_distr::NormalError> for AsnError {
    fn from(e: rand_distr::NormalError) -> Self {
        AsnError::Distribution(e.to_string())
    }
}

impl From<std::io::Error> for AsnError {
    fn from(e: std::io::Error) -> Self {
        AsnError::Export(e.to_string())
    }
}

impl From<serde_json::Error> for AsnError {
    fn from(e: serde_json::Error) -> Self {
        AsnError::Export(e.to_string())
    }
}
