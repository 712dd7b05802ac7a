// main.rs
use actix_cors::Cors;
use actix_files::Files;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};

use asn_dashboard::config::AppConfig;
use asn_dashboard::controllers;
use asn_dashboard::store::RecordStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Konfigurasi tidak valid: {}", e);
            std::process::exit(1);
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("starting up...");

    let store = RecordStore::new(&config.data_file);
    if !store.exists() {
        // server tetap jalan; endpoint akan membalas 404 sampai generator dijalankan
        log::warn!(
            "File data {} belum ada. Jalankan generate-asn dulu.",
            store.path().display()
        );
    }

    let cors_origin = config.cors_origin.clone();
    let static_dir = config.static_dir.clone();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec![header::CONTENT_TYPE])
            .max_age(3600);

        let mut app = App::new()
            .app_data(web::Data::new(store.clone()))
            .wrap(cors)
            .wrap(Logger::default())
            .configure(controllers::configure);

        if static_dir.is_dir() {
            app = app.service(Files::new("/static", &static_dir));
        }
        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
