use actix_web::{App, http::StatusCode, test, web};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

use asn_dashboard::controllers;
use asn_dashboard::store::RecordStore;

fn record(id: u32, jabatan_tujuan: &str, skp: f64, kinerja: f64, potensi: f64) -> Value {
    json!({
        "id": id,
        "nama": format!("Pegawai {}", id),
        "jabatan_saat_ini": "Analis Data",
        "jabatan_tujuan": jabatan_tujuan,
        "unit_kerja": "Badan Pusat Statistik",
        "masa_kerja_tahun": 10,
        "nilai_skp": skp,
        "sertifikasi": "Pelatihan SPBE",
        "kompetensi_teknis": 0.75,
        "kompetensi_manajerial": 0.8,
        "kompetensi_sosial_kultural": 0.65,
        "riwayat_diklat": 3,
        "skor_kinerja": kinerja,
        "potensi_promosi": potensi
    })
}

fn write_store(path: &Path, records: &[Value]) {
    fs::write(path, serde_json::to_string_pretty(records).unwrap()).unwrap();
}

#[actix_web::test]
async fn every_endpoint_reports_missing_store() {
    let dir = tempfile::tempdir().unwrap();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(RecordStore::new(dir.path().join("asn_dummy_500.json"))))
            .configure(controllers::configure),
    )
    .await;

    for uri in [
        "/api/rekomendasi-data",
        "/api/rekomendasi-chart",
        "/api/statistik",
        "/api/jabatan-tujuan",
        "/api/data-asn/download",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}

#[actix_web::test]
async fn two_record_store_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asn.json");
    write_store(
        &path,
        &[record(1, "A", 80.0, 80.0, 0.9), record(2, "B", 75.0, 70.0, 0.5)],
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(RecordStore::new(&path)))
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/rekomendasi-data?jabatan=A")
        .to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["nama"], "Pegawai 1");
    assert_eq!(body[0].as_object().unwrap().len(), 7);

    let req = test::TestRequest::get()
        .uri("/api/rekomendasi-data")
        .to_request();
    let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.len(), 2);
    assert_eq!(body[0]["jabatan_tujuan"], "A");
    assert_eq!(body[1]["jabatan_tujuan"], "B");

    let req = test::TestRequest::get()
        .uri("/api/rekomendasi-chart?jabatan=Semua%20Data")
        .to_request();
    let chart: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(chart.len(), 2);
    assert_eq!(chart[0]["color"], "#6366F1");
    assert_eq!(chart[1]["color"], "#9333EA");
    assert_eq!(chart[0]["data"].as_array().unwrap().len(), 6);

    let req = test::TestRequest::get()
        .uri("/api/rekomendasi-chart?jabatan=Tidak%20Ada")
        .to_request();
    let chart: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert!(chart.is_empty());

    let req = test::TestRequest::get()
        .uri("/api/jabatan-tujuan")
        .to_request();
    let options: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(options, vec!["A", "B"]);
}

#[actix_web::test]
async fn statistik_summary_average_skp() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asn.json");
    write_store(
        &path,
        &[
            record(1, "A", 70.0, 70.0, 0.6),
            record(2, "A", 80.0, 75.0, 0.7),
            record(3, "B", 90.0, 80.0, 0.8),
        ],
    );

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(RecordStore::new(&path)))
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/statistik").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["summary"]["avg_skp"], 80.0);
    assert_eq!(body["summary"]["total_asn"], 3);
    assert_eq!(body["jabatan_counts"]["Analis Data"], 3);
    assert_eq!(body["scatter_points"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn store_is_reloaded_on_every_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asn.json");
    write_store(&path, &[record(1, "A", 80.0, 80.0, 0.9)]);

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(RecordStore::new(&path)))
            .configure(controllers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/statistik").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["summary"]["total_asn"], 1);

    write_store(
        &path,
        &[record(1, "A", 80.0, 80.0, 0.9), record(2, "B", 85.0, 82.0, 0.8)],
    );

    let req = test::TestRequest::get().uri("/api/statistik").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["summary"]["total_asn"], 2);
}
