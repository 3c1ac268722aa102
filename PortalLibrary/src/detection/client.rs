use image::{ImageFormat, RgbImage};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::io::Cursor;
use crate::detection::utils::bounding_box::BoundingBox;
use crate::detection::utils::detection_error::DetectionError;
use crate::detection::utils::detection_response::DetectionResponse;
use crate::utils::config::Config;

pub struct DetectionClient {
    endpoint: String,
    client: Client,
}

impl DetectionClient {
    pub fn new(config: &Config) -> Self {
        Self {
            endpoint: config.detection_endpoint.clone(),
            client: Client::new(),
        }
    }

    //One blocking call, no timeout, no retry. The first prediction wins.
    pub async fn detect(&self, image: &RgbImage, min_confidence: f32) -> Result<BoundingBox, DetectionError> {
        let image_part = Part::bytes(Self::encode_jpeg(image)?)
            .file_name("image.jpg")
            .mime_str("image/jpeg")?;
        let form = Form::new()
            .part("image", image_part)
            .text("min_confidence", min_confidence.to_string());
        let response = self.client.post(&self.endpoint)
            .multipart(form)
            .send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(DetectionError::UnexpectedStatus(status.as_u16()));
        }
        let detection = response.json::<DetectionResponse>().await?;
        detection.predictions.into_iter().next()
            .ok_or(DetectionError::NoPredictions)
    }

    fn encode_jpeg(image: &RgbImage) -> Result<Vec<u8>, DetectionError> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Jpeg)?;
        Ok(buffer.into_inner())
    }
}
