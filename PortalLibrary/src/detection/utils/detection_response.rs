use serde::Deserialize;
use crate::detection::utils::bounding_box::BoundingBox;

#[derive(Deserialize, Debug)]
pub struct DetectionResponse {
    #[serde(default)]
    pub predictions: Vec<BoundingBox>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prediction_list() {
        let payload = r#"{"predictions":[{"x_min":10,"y_min":20,"x_max":30,"y_max":40,"confidence":0.9,"label":"plate"}]}"#;
        let response: DetectionResponse = serde_json::from_str(payload).expect("Payload should parse");
        assert_eq!(response.predictions.len(), 1);
        assert_eq!(
            response.predictions[0],
            BoundingBox { x_min: 10.0, y_min: 20.0, x_max: 30.0, y_max: 40.0 }
        );
    }

    #[test]
    fn missing_predictions_key_defaults_to_empty() {
        let response: DetectionResponse = serde_json::from_str("{}").expect("Payload should parse");
        assert!(response.predictions.is_empty());
    }

    #[test]
    fn empty_prediction_list_parses() {
        let response: DetectionResponse = serde_json::from_str(r#"{"predictions":[]}"#).expect("Payload should parse");
        assert!(response.predictions.is_empty());
    }
}
