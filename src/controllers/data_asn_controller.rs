// src/controllers/data_asn_controller.rs
use actix_web::{HttpResponse, get, web};
use chrono::Local;
use serde_json::json;

use crate::controllers::rekomendasi_controller::store_error;
use crate::export::xlsx_bytes;
use crate::store::RecordStore;

#[get("/api/data-asn/download")]
pub async fn download_to_excel(store: web::Data<RecordStore>) -> HttpResponse {
    let records = match store.load().await {
        Ok(records) => records,
        Err(e) => return store_error("data-asn/download", e),
    };

    match xlsx_bytes(&records) {
        Ok(bytes) => {
            let filename = format!("data-asn-{}.xlsx", Local::now().format("%Y%m%d_%H%M%S"));

            HttpResponse::Ok()
                .append_header((
                    "Content-Type",
                    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                ))
                .append_header((
                    "Content-Disposition",
                    format!("attachment; filename=\"{}\"", filename),
                ))
                .body(bytes)
        }
        Err(e) => {
            log::error!("Error creating Excel: {}", e);
            HttpResponse::InternalServerError()
                .json(json!({"error": format!("Gagal membuat Excel: {}", e)}))
        }
    }
}
