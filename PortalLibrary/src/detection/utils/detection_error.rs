use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectionError {
    #[error("Received status code {0} from the detection server.")]
    UnexpectedStatus(u16),
    #[error("No predictions found in the response.")]
    NoPredictions,
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Encode(#[from] image::ImageError),
}

impl From<DetectionError> for String {
    #[inline(always)]
    fn from(value: DetectionError) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_embeds_the_code() {
        let message = DetectionError::UnexpectedStatus(503).to_string();
        assert_eq!(message, "Received status code 503 from the detection server.");
    }

    #[test]
    fn no_predictions_message_matches_the_banner_text() {
        let message = DetectionError::NoPredictions.to_string();
        assert_eq!(message, "No predictions found in the response.");
    }
}
