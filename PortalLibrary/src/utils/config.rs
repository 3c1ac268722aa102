use std::env;
use crate::utils::logging::*;

pub const DETECTION_ENDPOINT_VARIABLE: &str = "YOLO_LICPLATE_ENDPOINT";
const DEFAULT_DETECTION_ENDPOINT: &str = "http://localhost:32168/v1/vision/custom/license-plate";

#[derive(Debug, Clone)]
pub struct Config {
    pub http_server_bind_port: u16, //port
    pub bind_retry_duration: u64, //seconds
    pub detection_endpoint: String, //url
    pub default_min_confidence: f32, //0.0 - 1.0
    pub font_path: String, //path
    pub font_size: f32, //points
    pub box_color: [u8; 3], //RGB
    pub banner_color: [u8; 3], //RGB
    pub text_color: [u8; 3], //RGB
}

impl Config {
    pub fn load() -> Self {
        let mut config = Self::default();
        if let Ok(endpoint) = env::var(DETECTION_ENDPOINT_VARIABLE) {
            config.detection_endpoint = endpoint;
        }
        if !Self::validate(&config) {
            logging_console!(emergency_entry!(SystemEntry::InvalidConfig));
            panic!("Invalid configuration");
        }
        config
    }

    pub fn validate(config: &Config) -> bool {
        Config::validate_endpoint(&config.detection_endpoint)
            && Config::validate_confidence(config.default_min_confidence)
            && Config::validate_font_size(config.font_size)
            && Config::validate_second(config.bind_retry_duration)
    }

    fn validate_endpoint(endpoint: &str) -> bool {
        endpoint.starts_with("http://") || endpoint.starts_with("https://")
    }

    fn validate_confidence(confidence: f32) -> bool {
        (0.0..=1.0).contains(&confidence)
    }

    fn validate_font_size(size: f32) -> bool {
        size > 0_f32
    }

    fn validate_second(second: u64) -> bool {
        second <= 3600
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_server_bind_port: 7860,
            bind_retry_duration: 3,
            detection_endpoint: DEFAULT_DETECTION_ENDPOINT.to_string(),
            default_min_confidence: 0.4,
            font_path: "arial.ttf".to_string(),
            font_size: 24.0,
            box_color: [0, 255, 0],
            banner_color: [255, 0, 0],
            text_color: [255, 255, 255],
        }
    }
}
