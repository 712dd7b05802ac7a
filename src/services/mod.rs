pub mod rekomendasi;
pub mod statistik;
