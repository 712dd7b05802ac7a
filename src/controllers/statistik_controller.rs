// src/controllers/statistik_controller.rs
use actix_web::{HttpResponse, get, web};

use crate::controllers::rekomendasi_controller::store_error;
use crate::services::statistik::summary_statistics;
use crate::store::RecordStore;

#[get("/api/statistik")]
pub async fn get_statistik(store: web::Data<RecordStore>) -> HttpResponse {
    match store.load().await {
        Ok(records) => {
            let report = summary_statistics(&records, &mut rand::rng());
            HttpResponse::Ok().json(report)
        }
        Err(e) => store_error("statistik", e),
    }
}
