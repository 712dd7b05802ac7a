// src/services/rekomendasi.rs
use std::collections::BTreeSet;

use crate::models::asn::{AsnRecord, ChartEntry, KandidatSummary};

pub const SEMUA_DATA: &str = "Semua Data";
pub const MAX_KANDIDAT: usize = 500;
pub const MAX_CHART: usize = 10;
pub const WARNA_UTAMA: &str = "#6366F1";
pub const WARNA_LAIN: &str = "#9333EA";

/// `None` dan "Semua Data" berarti tanpa filter jabatan tujuan.
pub fn is_all(jabatan: Option<&str>) -> bool {
    matches!(jabatan, None | Some(SEMUA_DATA))
}

/// Filter berdasarkan jabatan tujuan lalu urutkan menurun menurut
/// `potensi_promosi`, kemudian `skor_kinerja`. Seri penuh mempertahankan urutan file.
fn ranked<'a>(records: &'a [AsnRecord], jabatan: Option<&str>) -> Vec<&'a AsnRecord> {
    let mut kandidat: Vec<&AsnRecord> = match jabatan {
        Some(j) if !is_all(jabatan) => records.iter().filter(|r| r.jabatan_tujuan == j).collect(),
        _ => records.iter().collect(),
    };

    kandidat.sort_by(|a, b| {
        b.potensi_promosi
            .total_cmp(&a.potensi_promosi)
            .then_with(|| b.skor_kinerja.total_cmp(&a.skor_kinerja))
    });
    kandidat
}

pub fn list_candidates(records: &[AsnRecord], jabatan: Option<&str>) -> Vec<KandidatSummary> {
    ranked(records, jabatan)
        .into_iter()
        .take(MAX_KANDIDAT)
        .map(KandidatSummary::from)
        .collect()
}

pub fn top_chart(records: &[AsnRecord], jabatan: Option<&str>) -> Vec<ChartEntry> {
    ranked(records, jabatan)
        .into_iter()
        .take(MAX_CHART)
        .enumerate()
        .map(|(idx, k)| ChartEntry {
            label: k.nama.clone(),
            data: [
                k.kompetensi_teknis * 100.0,
                k.kompetensi_manajerial * 100.0,
                k.kompetensi_sosial_kultural * 100.0,
                k.nilai_skp,
                k.skor_kinerja / 2.0,
                k.potensi_promosi * 100.0,
            ],
            color: if idx == 0 { WARNA_UTAMA } else { WARNA_LAIN }.to_string(),
        })
        .collect()
}

/// Pilihan dropdown halaman rekomendasi: jabatan tujuan unik, terurut.
pub fn jabatan_options(records: &[AsnRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.jabatan_tujuan.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
