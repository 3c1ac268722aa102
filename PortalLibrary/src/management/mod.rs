pub mod annotator;
pub mod portal;
pub mod processor;
pub mod utils;
