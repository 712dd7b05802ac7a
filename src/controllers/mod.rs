use actix_web::web;

pub mod data_asn_controller;
pub mod rekomendasi_controller;
pub mod statistik_controller;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        //rekomendasi
        .service(rekomendasi_controller::get_rekomendasi_data)
        .service(rekomendasi_controller::get_rekomendasi_chart)
        .service(rekomendasi_controller::get_jabatan_tujuan)
        //statistik
        .service(statistik_controller::get_statistik)
        //data asn
        .service(data_asn_controller::download_to_excel);
}
