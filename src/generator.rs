// generator.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::errors::AsnError;
use crate::models::asn::AsnRecord;
use crate::utils::round2;

pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_JUMLAH: i64 = 500;

pub const NAMA_DEPAN: [&str; 20] = [
    "Andi", "Budi", "Citra", "Dewi", "Eko", "Farhan", "Gita", "Hendra", "Ika", "Joko", "Kusuma",
    "Lina", "Mega", "Nanda", "Putra", "Rizki", "Sari", "Taufik", "Utami", "Wahyu",
];

pub const NAMA_BELAKANG: [&str; 13] = [
    "Saputra", "Wijaya", "Putri", "Santoso", "Halim", "Siregar", "Pratama", "Kurniawan",
    "Nasution", "Sihombing", "Hartono", "Syahrul", "Fadillah",
];

pub const JABATAN_LIST: [&str; 15] = [
    "Analis Kepegawaian",
    "Pranata Komputer",
    "Verifikator Keuangan",
    "Statistisi",
    "Auditor",
    "Perencana",
    "Analis Data",
    "Pengelola Barang Milik Negara",
    "Arsiparis",
    "Penyusun Laporan Keuangan",
    "Pranata Humas",
    "Penyusun Program",
    "Analis SDM Aparatur",
    "Penyusun Rencana Kinerja",
    "Analis Kebijakan",
];

pub const JABATAN_TUJUAN_LIST: [&str; 9] = [
    "Kepala Subbagian Kepegawaian",
    "Koordinator TI Instansi",
    "Kepala Seksi Keuangan",
    "Kepala Bagian Perencanaan",
    "Koordinator Evaluasi Program",
    "Kepala Subbagian Umum",
    "Kepala Seksi Perbendaharaan",
    "Koordinator Pengembangan SDM",
    "Kepala Seksi Data dan Informasi",
];

pub const UNIT_KERJA_LIST: [&str; 9] = [
    "Badan Kepegawaian Daerah",
    "Bappeda",
    "Dinas Pendidikan",
    "Inspektorat Daerah",
    "Kementerian PANRB",
    "Dinas Kominfo",
    "Sekretariat Daerah",
    "Dinas Kesehatan",
    "Badan Pusat Statistik",
];

pub const SERTIFIKASI_LIST: [&str; 8] = [
    "Diklatpim III; Manajemen ASN",
    "Pelatihan Kepemimpinan",
    "Pelatihan SPBE",
    "Diklat Analisis Jabatan",
    "Diklat Pengadaan Barang/Jasa",
    "Diklat Kepemimpinan Pengawas",
    "Manajemen Risiko",
    "Analisis Data Pemerintahan",
];

/// Buat `n` data ASN: distribusi normal dari seed 42, sisanya dari RNG thread.
pub fn generate(n: i64) -> Result<Vec<AsnRecord>, AsnError> {
    let mut normal_rng = StdRng::seed_from_u64(DEFAULT_SEED);
    let mut pick_rng = rand::rng();
    generate_with(n, &mut normal_rng, &mut pick_rng)
}

/// Versi eksplisit dari [`generate`].
///
/// `normal_rng` hanya dipakai untuk masa kerja dan nilai SKP sehingga kedua
/// kolom itu dapat direproduksi; nama, jabatan, unit, sertifikasi, kompetensi
/// dan riwayat diklat diambil dari `pick_rng`.
pub fn generate_with<N, P>(
    n: i64,
    normal_rng: &mut N,
    pick_rng: &mut P,
) -> Result<Vec<AsnRecord>, AsnError>
where
    N: Rng,
    P: Rng,
{
    // id bertipe u32, jadi jumlah dibatasi 1..=u32::MAX
    let jumlah = match u32::try_from(n) {
        Ok(jumlah) if jumlah > 0 => jumlah,
        _ => return Err(AsnError::InvalidCount(n)),
    };

    let masa_kerja_dist = Normal::<f64>::new(10.0, 5.0)?;
    let skp_dist = Normal::<f64>::new(85.0, 7.0)?;

    let mut data = Vec::new();
    for id in 1..=jumlah {
        let nama = format!("{} {}", pick(pick_rng, &NAMA_DEPAN), pick(pick_rng, &NAMA_BELAKANG));
        let jabatan = pick(pick_rng, &JABATAN_LIST);
        let jabatan_tujuan = pick(pick_rng, &JABATAN_TUJUAN_LIST);
        let unit_kerja = pick(pick_rng, &UNIT_KERJA_LIST);

        let masa_kerja = (masa_kerja_dist.sample(normal_rng).trunc() as i64).clamp(1, 30);
        let nilai_skp = round2(skp_dist.sample(normal_rng).clamp(70.0, 100.0));

        let sertifikasi = pick(pick_rng, &SERTIFIKASI_LIST);
        let kompetensi_teknis = round2(pick_rng.random_range(0.5..=1.0));
        let kompetensi_manajerial = round2(pick_rng.random_range(0.5..=1.0));
        let kompetensi_sosial = round2(pick_rng.random_range(0.5..=1.0));
        let riwayat_diklat = pick_rng.random_range(1..=10);

        let total_kompetensi = kompetensi_teknis + kompetensi_manajerial + kompetensi_sosial;
        let skor_kinerja = skor_kinerja(nilai_skp, total_kompetensi);
        let potensi_promosi = potensi_promosi(total_kompetensi, nilai_skp, skor_kinerja, masa_kerja);

        data.push(AsnRecord {
            id,
            nama,
            jabatan_saat_ini: jabatan.to_string(),
            jabatan_tujuan: jabatan_tujuan.to_string(),
            unit_kerja: unit_kerja.to_string(),
            masa_kerja_tahun: masa_kerja,
            nilai_skp,
            sertifikasi: sertifikasi.to_string(),
            kompetensi_teknis,
            kompetensi_manajerial,
            kompetensi_sosial_kultural: kompetensi_sosial,
            riwayat_diklat,
            skor_kinerja,
            potensi_promosi,
        });
    }

    log::info!("Berhasil membuat {} data ASN dummy", data.len());
    Ok(data)
}

pub fn skor_kinerja(nilai_skp: f64, total_kompetensi: f64) -> f64 {
    round2(nilai_skp * 0.6 + total_kompetensi * 15.0)
}

pub fn potensi_promosi(
    total_kompetensi: f64,
    nilai_skp: f64,
    skor_kinerja: f64,
    masa_kerja: i64,
) -> f64 {
    let base = total_kompetensi / 3.0;
    let raw = 0.4 * base
        + 0.3 * (nilai_skp / 100.0)
        + 0.2 * (skor_kinerja / 100.0)
        + 0.1 * (masa_kerja as f64 / 30.0);
    round2(raw.clamp(0.0, 1.0))
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

pub fn default_file_stem(n: i64) -> String {
    format!("asn_dummy_{}", n)
}
