// src/controllers/rekomendasi_controller.rs
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::errors::AsnError;
use crate::models::asn::RekomendasiQuery;
use crate::services::rekomendasi::{jabatan_options, list_candidates, top_chart};
use crate::store::RecordStore;

#[get("/api/rekomendasi-data")]
pub async fn get_rekomendasi_data(
    store: web::Data<RecordStore>,
    query: web::Query<RekomendasiQuery>,
) -> HttpResponse {
    match store.load().await {
        Ok(records) => {
            let kandidat = list_candidates(&records, query.jabatan.as_deref());
            HttpResponse::Ok().json(kandidat)
        }
        Err(e) => store_error("rekomendasi-data", e),
    }
}

#[get("/api/rekomendasi-chart")]
pub async fn get_rekomendasi_chart(
    store: web::Data<RecordStore>,
    query: web::Query<RekomendasiQuery>,
) -> HttpResponse {
    match store.load().await {
        Ok(records) => HttpResponse::Ok().json(top_chart(&records, query.jabatan.as_deref())),
        Err(e) => store_error("rekomendasi-chart", e),
    }
}

// Dropdown jabatan tujuan
#[get("/api/jabatan-tujuan")]
pub async fn get_jabatan_tujuan(store: web::Data<RecordStore>) -> HttpResponse {
    match store.load().await {
        Ok(records) => HttpResponse::Ok().json(jabatan_options(&records)),
        Err(e) => store_error("jabatan-tujuan", e),
    }
}

// ================= ERROR HELPER =================
pub(crate) fn store_error(step: &str, e: AsnError) -> HttpResponse {
    log::error!("[{}] {}", step, e);
    if e.is_store_missing() {
        HttpResponse::NotFound().json(json!({
            "error": "File data tidak ditemukan"
        }))
    } else {
        HttpResponse::InternalServerError().json(json!({
            "error": "Gagal memproses data",
            "details": e.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::write_json;
    use crate::generator::generate;
    use crate::models::asn::{ChartEntry, KandidatSummary};
    use actix_web::{App, http::StatusCode, test};

    #[actix_web::test]
    async fn missing_store_is_404() {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path().join("asn_dummy_500.json"));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(get_rekomendasi_data)
                .service(get_rekomendasi_chart)
                .service(get_jabatan_tujuan),
        )
        .await;

        for uri in [
            "/api/rekomendasi-data",
            "/api/rekomendasi-chart?jabatan=Semua%20Data",
            "/api/jabatan-tujuan",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn filters_by_query_param() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("asn.json");
        let data = generate(200).unwrap();
        write_json(&data, &path).unwrap();
        let target = data[0].jabatan_tujuan.clone();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(RecordStore::new(&path)))
                .service(get_rekomendasi_data)
                .service(get_rekomendasi_chart),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/rekomendasi-data?jabatan={}",
                target.replace(' ', "%20")
            ))
            .to_request();
        let kandidat: Vec<KandidatSummary> = test::call_and_read_body_json(&app, req).await;
        assert!(!kandidat.is_empty());
        assert!(kandidat.iter().all(|k| k.jabatan_tujuan == target));

        let req = test::TestRequest::get()
            .uri("/api/rekomendasi-chart")
            .to_request();
        let chart: Vec<ChartEntry> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(chart.len(), 10);
    }
}
