use actix_web::{get, web, HttpResponse, Scope, Responder};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use crate::utils::logging::Logger;
use crate::utils::static_files::StaticFiles;

pub fn initialize() -> Scope {
    web::scope("/log")
        .service(page)
        .service(system_log)
        .service(system_log_since)
}

#[get("")]
async fn page() -> impl Responder {
    let html = StaticFiles::get("html/log.html").expect("File not found in static files.").data;
    HttpResponse::Ok().content_type("text/html").body(html)
}

#[get("/system_log")]
async fn system_log() -> impl Responder {
    let system_log = Logger::get_system_logs().await;
    HttpResponse::Ok().body(Logger::format_logs(&system_log))
}

#[get("/system_log/since/{since}")]
async fn system_log_since(since: web::Path<String>) -> impl Responder {
    match parse_datetime(&since.into_inner()) {
        Ok(since_time) => {
            let logs = Logger::get_system_logs_since(since_time).await;
            HttpResponse::Ok().body(Logger::format_logs(&logs))
        }
        Err(_) => HttpResponse::BadRequest().body("Invalid datetime format."),
    }
}

fn parse_datetime(value: &str) -> Result<DateTime<Local>, ()> {
    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").map_err(|_| ())?;
    Local.from_local_datetime(&naive).single().ok_or(())
}
