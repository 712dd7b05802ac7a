// src/models/statistik.rs
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Daftar (label, nilai) yang sudah berperingkat.
///
/// Diserialisasi sebagai objek JSON `{label: nilai}` dengan urutan kunci
/// mengikuti peringkat, sehingga frontend cukup memakai `Object.keys`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ranked<T>(pub Vec<(String, T)>);

impl<T> Ranked<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Serialize> Serialize for Ranked<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, value) in &self.0 {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct TrendStats {
    pub years: Vec<String>,
    pub efisiensi: Vec<f64>,
    pub motivasi: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct KompetensiMeans {
    pub kompetensi_teknis: f64,
    pub kompetensi_manajerial: f64,
    pub kompetensi_sosial_kultural: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct NationalSummary {
    pub total_asn: usize,
    pub avg_potensi: f64,
    pub avg_kinerja: f64,
    pub avg_skp: f64,
}

// Respons /api/statistik
#[derive(Debug, Serialize)]
pub struct StatistikReport {
    pub jabatan_counts: Ranked<usize>,
    pub unit_counts: Ranked<usize>,
    pub trend: TrendStats,
    pub kompetensi_means: KompetensiMeans,
    pub top_promotion: Ranked<f64>,
    pub sertifikasi_counts: Ranked<usize>,
    pub scatter_points: Vec<ScatterPoint>,
    pub summary: NationalSummary,
}
