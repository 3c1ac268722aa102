pub mod bounding_box;
pub mod detection_error;
pub mod detection_response;
