use image::ImageError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TaskEntry {
    #[error("Request {0}: received {1}x{2} image, minimum confidence {3}")]
    Received(Uuid, u32, u32, f32),
    #[error("Request {0}: first prediction annotated")]
    Annotated(Uuid),
    #[error("Request {0}: {1}")]
    Failed(Uuid, String),
    #[error("Request {0}: missing image field")]
    MissingImage(Uuid),
    #[error("Request {0}: uploaded payload is not a decodable image")]
    UndecodableImage(Uuid),
    #[error("Request {0}: failed to encode response image: {1}")]
    ResponseEncodeError(Uuid, ImageError),
}

impl From<TaskEntry> for String {
    #[inline(always)]
    fn from(value: TaskEntry) -> Self {
        value.to_string()
    }
}
