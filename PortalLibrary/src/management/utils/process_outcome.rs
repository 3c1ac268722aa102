use image::RgbImage;
use crate::detection::utils::detection_error::DetectionError;

pub enum ProcessOutcome {
    Annotated(RgbImage),
    Failed {
        image: RgbImage,
        error: DetectionError,
    },
}

impl ProcessOutcome {
    pub fn error(&self) -> Option<&DetectionError> {
        match self {
            ProcessOutcome::Annotated(_) => None,
            ProcessOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn into_image(self) -> RgbImage {
        match self {
            ProcessOutcome::Annotated(image) => image,
            ProcessOutcome::Failed { image, .. } => image,
        }
    }
}
