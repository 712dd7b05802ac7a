//utils.rs
use std::collections::HashMap;

use crate::models::statistik::Ranked;

// Pembulatan ke 2 desimal
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rata-rata; himpunan kosong menghasilkan 0.0 agar tetap bisa diserialisasi.
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// Hitung frekuensi tiap nilai lalu ambil `limit` teratas.
///
/// Urutan: frekuensi menurun, seri diputus oleh urutan kemunculan pertama.
pub fn value_counts<'a, I>(values: I, limit: usize) -> Ranked<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for value in values {
        match index.get(value) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    // sort_by stabil, urutan kemunculan pertama tetap terjaga
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    Ranked(counts)
}

/// Rata-rata per grup dalam satu lintasan; grup disimpan sesuai kemunculan pertama.
pub fn group_means<'a, I>(pairs: I) -> Vec<(String, f64)>
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut acc: Vec<(String, f64, usize)> = Vec::new();

    for (key, value) in pairs {
        match index.get(key) {
            Some(&i) => {
                acc[i].1 += value;
                acc[i].2 += 1;
            }
            None => {
                index.insert(key, acc.len());
                acc.push((key.to_string(), value, 1));
            }
        }
    }

    acc.into_iter()
        .map(|(key, sum, count)| (key, sum / count as f64))
        .collect()
}
