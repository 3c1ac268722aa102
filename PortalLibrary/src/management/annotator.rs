use ab_glyph::{FontArc, FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use std::fs;
use crate::detection::utils::bounding_box::BoundingBox;
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::utils::static_files::StaticFiles;

//Banner text is always anchored here, even when the image is smaller than the banner.
const TEXT_POSITION: (i32, i32) = (10, 10);
const BANNER_MARGIN: i32 = 5;
const FALLBACK_FONT: &str = "fonts/DejaVuSans.ttf";

pub struct ImageAnnotator {
    font: FontArc,
    font_size: f32,
    box_color: Rgb<u8>,
    banner_color: Rgb<u8>,
    text_color: Rgb<u8>,
}

impl ImageAnnotator {
    pub fn new(config: &Config) -> Self {
        Self {
            font: Self::load_font(&config.font_path),
            font_size: config.font_size,
            box_color: Rgb(config.box_color),
            banner_color: Rgb(config.banner_color),
            text_color: Rgb(config.text_color),
        }
    }

    fn load_font(font_path: &str) -> FontArc {
        match fs::read(font_path) {
            Ok(font_data) => match FontVec::try_from_vec(font_data) {
                Ok(font) => return FontArc::from(font),
                Err(_) => logging_console!(warning_entry!(format!("Unable to parse font {font_path}, falling back to the built-in font"))),
            },
            Err(_) => logging_console!(warning_entry!(format!("Unable to read font {font_path}, falling back to the built-in font"))),
        }
        let fallback = StaticFiles::get(FALLBACK_FONT).expect("Built-in font missing from static files.");
        FontArc::try_from_vec(fallback.data.into_owned()).expect("Built-in font data is not a valid font.")
    }

    pub fn draw_bounding_box(&self, image: &mut RgbImage, bounding_box: &BoundingBox) {
        let width = (bounding_box.x_max - bounding_box.x_min).round().max(1.0) as u32;
        let height = (bounding_box.y_max - bounding_box.y_min).round().max(1.0) as u32;
        let region = Rect::at(bounding_box.x_min.round() as i32, bounding_box.y_min.round() as i32)
            .of_size(width, height);
        draw_filled_rect_mut(image, region, self.box_color);
    }

    pub fn draw_error_banner(&self, image: &RgbImage, message: &str) -> RgbImage {
        let mut banner_image = image.clone();
        let scale = PxScale::from(self.font_size);
        let (text_width, text_height) = text_size(scale, &self.font, message);
        let background = Rect::at(TEXT_POSITION.0 - BANNER_MARGIN, TEXT_POSITION.1 - BANNER_MARGIN)
            .of_size(text_width + 3 * BANNER_MARGIN as u32, text_height + 3 * BANNER_MARGIN as u32);
        draw_filled_rect_mut(&mut banner_image, background, self.banner_color);
        draw_text_mut(&mut banner_image, self.text_color, TEXT_POSITION.0, TEXT_POSITION.1, scale, &self.font, message);
        banner_image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn annotator() -> ImageAnnotator {
        ImageAnnotator::new(&Config::default())
    }

    fn black_image(width: u32, height: u32) -> RgbImage {
        RgbImage::new(width, height)
    }

    #[test]
    fn bounding_box_fills_reported_region() {
        let annotator = annotator();
        let mut image = black_image(100, 100);
        let bounding_box = BoundingBox { x_min: 10.0, y_min: 10.0, x_max: 50.0, y_max: 50.0 };
        annotator.draw_bounding_box(&mut image, &bounding_box);
        assert_eq!(image.dimensions(), (100, 100));
        assert_eq!(*image.get_pixel(10, 10), Rgb([0, 255, 0]));
        assert_eq!(*image.get_pixel(49, 49), Rgb([0, 255, 0]));
        assert_eq!(*image.get_pixel(9, 9), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(50, 50), Rgb([0, 0, 0]));
    }

    #[test]
    fn degenerate_bounding_box_still_draws() {
        let annotator = annotator();
        let mut image = black_image(64, 64);
        let bounding_box = BoundingBox { x_min: 30.0, y_min: 30.0, x_max: 30.0, y_max: 30.0 };
        annotator.draw_bounding_box(&mut image, &bounding_box);
        assert_eq!(*image.get_pixel(30, 30), Rgb([0, 255, 0]));
    }

    #[test]
    fn error_banner_keeps_original_untouched() {
        let annotator = annotator();
        let image = black_image(100, 100);
        let banner_image = annotator.draw_error_banner(&image, "Error: something went wrong");
        assert_eq!(banner_image.dimensions(), (100, 100));
        assert!(image.pixels().all(|pixel| *pixel == Rgb([0, 0, 0])));
        assert_eq!(*banner_image.get_pixel(5, 5), Rgb([255, 0, 0]));
    }

    #[test]
    fn error_banner_is_deterministic() {
        let annotator = annotator();
        let image = black_image(64, 64);
        let first = annotator.draw_error_banner(&image, "Error: 503");
        let second = annotator.draw_error_banner(&image, "Error: 503");
        assert_eq!(first.as_raw(), second.as_raw());
    }

    #[test]
    fn error_banner_on_tiny_image_keeps_dimensions() {
        let annotator = annotator();
        let image = black_image(8, 8);
        let banner_image = annotator.draw_error_banner(&image, "Error: banner larger than the image");
        assert_eq!(banner_image.dimensions(), (8, 8));
        assert_eq!(*banner_image.get_pixel(6, 6), Rgb([255, 0, 0]));
    }

    #[test]
    fn unreadable_font_path_falls_back_to_built_in() {
        let mut config = Config::default();
        config.font_path = "definitely/not/a/font.ttf".to_string();
        let annotator = ImageAnnotator::new(&config);
        let image = black_image(32, 32);
        let banner_image = annotator.draw_error_banner(&image, "Error: fallback");
        assert_eq!(*banner_image.get_pixel(5, 5), Rgb([255, 0, 0]));
    }
}
