// src/models/asn.rs
use serde::{Deserialize, Serialize};

/// Satu baris data ASN sintetis, persis seperti yang ditulis generator ke file JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsnRecord {
    pub id: u32,
    pub nama: String,
    pub jabatan_saat_ini: String,
    pub jabatan_tujuan: String,
    pub unit_kerja: String,
    pub masa_kerja_tahun: i64,
    pub nilai_skp: f64,
    pub sertifikasi: String,
    pub kompetensi_teknis: f64,
    pub kompetensi_manajerial: f64,
    pub kompetensi_sosial_kultural: f64,
    pub riwayat_diklat: i64,
    pub skor_kinerja: f64,
    pub potensi_promosi: f64,
}

impl AsnRecord {
    pub fn total_kompetensi(&self) -> f64 {
        self.kompetensi_teknis + self.kompetensi_manajerial + self.kompetensi_sosial_kultural
    }
}

// Ringkasan kandidat untuk tabel rekomendasi
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KandidatSummary {
    pub nama: String,
    pub unit_kerja: String,
    pub jabatan_saat_ini: String,
    pub jabatan_tujuan: String,
    pub nilai_skp: f64,
    pub skor_kinerja: f64,
    pub potensi_promosi: f64,
}

impl From<&AsnRecord> for KandidatSummary {
    fn from(r: &AsnRecord) -> Self {
        Self {
            nama: r.nama.clone(),
            unit_kerja: r.unit_kerja.clone(),
            jabatan_saat_ini: r.jabatan_saat_ini.clone(),
            jabatan_tujuan: r.jabatan_tujuan.clone(),
            nilai_skp: r.nilai_skp,
            skor_kinerja: r.skor_kinerja,
            potensi_promosi: r.potensi_promosi,
        }
    }
}

/// Satu dataset radar chart: teknis, manajerial, sosial kultural, SKP, kinerja/2, potensi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub label: String,
    pub data: [f64; 6],
    pub color: String,
}

#[derive(Debug, Deserialize)]
pub struct RekomendasiQuery {
    pub jabatan: Option<String>,
}
