use actix_multipart::{Field, Multipart};
use actix_web::{get, post, web, HttpResponse, Scope, Responder};
use futures::{StreamExt, TryStreamExt};
use image::ImageFormat;
use std::io::Cursor;
use uuid::Uuid;
use crate::management::processor::ImageProcessor;
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::utils::static_files::StaticFiles;

pub fn initialize() -> Scope {
    web::scope("/inference")
        .service(page)
        .service(process)
}

#[get("")]
async fn page() -> impl Responder {
    let html = StaticFiles::get("html/inference.html").expect("File not found in static files.").data;
    HttpResponse::Ok().content_type("text/html").body(html)
}

#[post("/process")]
async fn process(mut payload: Multipart, processor: web::Data<ImageProcessor>, config: web::Data<Config>) -> impl Responder {
    let request_id = Uuid::new_v4();
    let mut image_data = Vec::new();
    let mut min_confidence = config.default_min_confidence;
    while let Ok(Some(mut field)) = payload.try_next().await {
        let content_disposition = match field.content_disposition() {
            Some(content_disposition) => content_disposition,
            None => return HttpResponse::BadRequest().body("Invalid payload."),
        };
        let field_name = match content_disposition.get_name() {
            Some(field_name) => field_name.to_string(),
            None => return HttpResponse::BadRequest().body("Invalid payload."),
        };
        match &*field_name {
            "image" => {
                while let Some(chunk) = field.next().await {
                    match chunk {
                        Ok(data) => image_data.extend_from_slice(&data),
                        Err(_) => return HttpResponse::InternalServerError().finish(),
                    }
                }
            }
            "min_confidence" => {
                if let Some(value) = read_text_field(&mut field).await {
                    if let Ok(value) = value.trim().parse::<f32>() {
                        min_confidence = value;
                    }
                }
            }
            _ => drain_field(&mut field).await,
        }
    }
    if image_data.is_empty() {
        logging_warning!(TaskEntry::MissingImage(request_id));
        return HttpResponse::BadRequest().body("Missing image field.");
    }
    let image = match image::load_from_memory(&image_data) {
        Ok(image) => image.to_rgb8(),
        Err(_) => {
            logging_warning!(TaskEntry::UndecodableImage(request_id));
            return HttpResponse::BadRequest().body("Uploaded payload is not a decodable image.");
        }
    };
    let (width, height) = image.dimensions();
    logging_information!(TaskEntry::Received(request_id, width, height, min_confidence));
    let outcome = processor.process_image(image, min_confidence).await;
    match outcome.error() {
        None => logging_information!(TaskEntry::Annotated(request_id)),
        Some(error) => logging_warning!(TaskEntry::Failed(request_id, error.to_string())),
    }
    let mut buffer = Cursor::new(Vec::new());
    if let Err(err) = outcome.into_image().write_to(&mut buffer, ImageFormat::Png) {
        logging_error!(TaskEntry::ResponseEncodeError(request_id, err));
        return HttpResponse::InternalServerError().finish();
    }
    HttpResponse::Ok().content_type("image/png").body(buffer.into_inner())
}

async fn read_text_field(field: &mut Field) -> Option<String> {
    let data = field.next().await?.ok()?;
    Some(String::from_utf8_lossy(&data).to_string())
}

async fn drain_field(field: &mut Field) {
    while let Some(_) = field.next().await {}
}
