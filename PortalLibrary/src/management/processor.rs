use image::RgbImage;
use crate::detection::client::DetectionClient;
use crate::detection::utils::detection_error::DetectionError;
use crate::management::annotator::ImageAnnotator;
use crate::management::utils::process_outcome::ProcessOutcome;
use crate::utils::config::Config;

pub struct ImageProcessor {
    client: DetectionClient,
    annotator: ImageAnnotator,
}

impl ImageProcessor {
    pub fn new(config: &Config) -> Self {
        Self {
            client: DetectionClient::new(config),
            annotator: ImageAnnotator::new(config),
        }
    }

    //The original image is only mutated on the success path. Every failure is
    //rendered as a banner on a copy, the caller always receives a drawable image.
    pub async fn process_image(&self, mut image: RgbImage, min_confidence: f32) -> ProcessOutcome {
        match self.detect_and_annotate(&mut image, min_confidence).await {
            Ok(()) => ProcessOutcome::Annotated(image),
            Err(error) => {
                let banner_image = self.annotator.draw_error_banner(&image, &format!("Error: {error}"));
                ProcessOutcome::Failed { image: banner_image, error }
            }
        }
    }

    async fn detect_and_annotate(&self, image: &mut RgbImage, min_confidence: f32) -> Result<(), DetectionError> {
        let bounding_box = self.client.detect(image, min_confidence).await?;
        self.annotator.draw_bounding_box(image, &bounding_box);
        Ok(())
    }
}
