// src/services/statistik.rs
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::models::asn::AsnRecord;
use crate::models::statistik::{
    KompetensiMeans, NationalSummary, Ranked, ScatterPoint, StatistikReport, TrendStats,
};
use crate::utils::{group_means, mean, round1, round2, value_counts};

pub const TREND_YEARS: [&str; 4] = ["2022", "2023", "2024", "2025"];
pub const TREND_MULTIPLIERS: [f64; 4] = [0.8, 0.9, 1.0, 1.1];
pub const MAX_SCATTER: usize = 100;

/// Statistik nasional atas seluruh data, tanpa filter jabatan.
///
/// Sampel scatter diambil dari `rng` tanpa pengembalian, sehingga berbeda di
/// setiap panggilan kecuali pemanggil memberi RNG ber-seed.
pub fn summary_statistics<R: Rng>(records: &[AsnRecord], rng: &mut R) -> StatistikReport {
    // ---- 1 & 2. Distribusi jabatan dan unit kerja ----
    let jabatan_counts = value_counts(records.iter().map(|r| r.jabatan_saat_ini.as_str()), 10);
    let unit_counts = value_counts(records.iter().map(|r| r.unit_kerja.as_str()), 10);

    // ---- 3. Tren simulasi ----
    let avg_potensi = mean(records.iter().map(|r| r.potensi_promosi));
    let avg_kinerja = mean(records.iter().map(|r| r.skor_kinerja));
    let trend = TrendStats {
        years: TREND_YEARS.iter().map(|y| y.to_string()).collect(),
        efisiensi: TREND_MULTIPLIERS
            .iter()
            .map(|m| round2(avg_potensi * 100.0 * m))
            .collect(),
        motivasi: TREND_MULTIPLIERS
            .iter()
            .map(|m| round2(avg_kinerja / 2.0 * m))
            .collect(),
    };

    // ---- 4. Kompetensi nasional ----
    let kompetensi_means = KompetensiMeans {
        kompetensi_teknis: round2(mean(records.iter().map(|r| r.kompetensi_teknis)) * 100.0),
        kompetensi_manajerial: round2(mean(records.iter().map(|r| r.kompetensi_manajerial)) * 100.0),
        kompetensi_sosial_kultural: round2(
            mean(records.iter().map(|r| r.kompetensi_sosial_kultural)) * 100.0,
        ),
    };

    // ---- 5. Jabatan dengan potensi promosi tertinggi ----
    let top_promotion = top_promotion(records, 10);

    // ---- 6. Sertifikasi ----
    let sertifikasi_counts = value_counts(records.iter().map(|r| r.sertifikasi.as_str()), 6);

    // ---- 7. Scatter SKP vs kinerja ----
    let scatter_points = records
        .choose_multiple(rng, MAX_SCATTER.min(records.len()))
        .map(|r| ScatterPoint {
            x: r.nilai_skp,
            y: r.skor_kinerja,
        })
        .collect();

    // ---- 8. Ringkasan ----
    let summary = NationalSummary {
        total_asn: records.len(),
        avg_potensi: round1(avg_potensi * 100.0),
        avg_kinerja: round1(avg_kinerja),
        avg_skp: round1(mean(records.iter().map(|r| r.nilai_skp))),
    };

    StatistikReport {
        jabatan_counts,
        unit_counts,
        trend,
        kompetensi_means,
        top_promotion,
        sertifikasi_counts,
        scatter_points,
        summary,
    }
}

fn top_promotion(records: &[AsnRecord], limit: usize) -> Ranked<f64> {
    let mut means = group_means(
        records
            .iter()
            .map(|r| (r.jabatan_saat_ini.as_str(), r.potensi_promosi)),
    );
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(limit);
    Ranked(
        means
            .into_iter()
            .map(|(jabatan, avg)| (jabatan, round2(avg * 100.0)))
            .collect(),
    )
}
