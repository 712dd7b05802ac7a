// export.rs
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook};
use std::fs;
use std::path::Path;

use crate::errors::AsnError;
use crate::models::asn::AsnRecord;

const HEADERS: [&str; 14] = [
    "id",
    "nama",
    "jabatan_saat_ini",
    "jabatan_tujuan",
    "unit_kerja",
    "masa_kerja_tahun",
    "nilai_skp",
    "sertifikasi",
    "kompetensi_teknis",
    "kompetensi_manajerial",
    "kompetensi_sosial_kultural",
    "riwayat_diklat",
    "skor_kinerja",
    "potensi_promosi",
];

/// Bentuk record terstruktur: array JSON dengan indentasi 2 spasi.
pub fn write_json(records: &[AsnRecord], path: &Path) -> Result<(), AsnError> {
    let body = serde_json::to_string_pretty(records)?;
    fs::write(path, body)?;
    log::info!("JSON tersimpan: {}", path.display());
    Ok(())
}

/// Bentuk tabel baris/kolom: satu baris header lalu satu baris per ASN.
pub fn xlsx_bytes(records: &[AsnRecord]) -> Result<Vec<u8>, AsnError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Data ASN")?;

    let header_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::RGB(0xFFFFFF));

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row_idx, r) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;

        worksheet.write_number(row, 0, r.id as f64)?;
        worksheet.write_string(row, 1, &r.nama)?;
        worksheet.write_string(row, 2, &r.jabatan_saat_ini)?;
        worksheet.write_string(row, 3, &r.jabatan_tujuan)?;
        worksheet.write_string(row, 4, &r.unit_kerja)?;
        worksheet.write_number(row, 5, r.masa_kerja_tahun as f64)?;
        worksheet.write_number(row, 6, r.nilai_skp)?;
        worksheet.write_string(row, 7, &r.sertifikasi)?;
        worksheet.write_number(row, 8, r.kompetensi_teknis)?;
        worksheet.write_number(row, 9, r.kompetensi_manajerial)?;
        worksheet.write_number(row, 10, r.kompetensi_sosial_kultural)?;
        worksheet.write_number(row, 11, r.riwayat_diklat as f64)?;
        worksheet.write_number(row, 12, r.skor_kinerja)?;
        worksheet.write_number(row, 13, r.potensi_promosi)?;
    }

    worksheet.autofit();

    Ok(workbook.save_to_buffer()?)
}

pub fn write_xlsx(records: &[AsnRecord], path: &Path) -> Result<(), AsnError> {
    let bytes = xlsx_bytes(records)?;
    fs::write(path, bytes)?;
    log::info!("Excel tersimpan: {}", path.display());
    Ok(())
}
