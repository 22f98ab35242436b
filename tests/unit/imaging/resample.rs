//! Tests for aspect-preserving resampling and dimension validation

#[cfg(test)]
mod tests {
    use crate::write_solid_png;
    use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage};
    use mapart::MapArtError;
    use mapart::imaging::resample::{load_source, resample, target_height};
    use std::fs;

    // Tests the 200x100 at 50 wide example
    // Verified by swapping width and height in the ratio
    #[test]
    fn test_aspect_preserved() {
        assert_eq!(target_height(200, 100, 50).ok(), Some(25));
        assert_eq!(target_height(100, 200, 50).ok(), Some(100));
    }

    // Tests the height is rounded, not truncated
    // Verified by truncating the exact height
    #[test]
    fn test_height_rounds() {
        // 10 * 7 / 4 = 17.5
        assert_eq!(target_height(4, 7, 10).ok(), Some(18));
        // 3 * 10 / 7 = 4.28
        assert_eq!(target_height(7, 10, 3).ok(), Some(4));
    }

    // Tests zero width and zero computed height are rejected
    // Verified by clamping the height to one
    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            target_height(100, 100, 0),
            Err(MapArtError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            target_height(1000, 1, 1),
            Err(MapArtError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            target_height(0, 10, 5),
            Err(MapArtError::InvalidDimensions { .. })
        ));
        assert!(target_height(10, 10, 10_001).is_err());
        assert!(target_height(1, 100, 200).is_err());
    }

    // Tests output size and RGB flattening
    // Verified by resizing to the source height
    #[test]
    fn test_resample_output_size() {
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 100, Rgb([10, 200, 30])));
        let resized = resample(&source, 50).expect("resample should succeed");

        assert_eq!(resized.dimensions(), (50, 25));
        let pixel = resized.get_pixel(20, 10).0;
        for (got, want) in pixel.iter().zip([10u8, 200, 30]) {
            assert!(got.abs_diff(want) <= 1, "solid color drifted: {pixel:?}");
        }
    }

    // Tests alpha is discarded before resizing
    // Verified by premultiplying alpha into the color
    #[test]
    fn test_resample_drops_alpha() {
        let source =
            DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([100, 150, 200, 0])));
        let resized = resample(&source, 2).expect("resample should succeed");
        assert_eq!(resized.dimensions(), (2, 2));
        let pixel = resized.get_pixel(1, 1).0;
        assert!(pixel[0].abs_diff(100) <= 1 && pixel[2].abs_diff(200) <= 1);
    }

    // Tests decode failures carry the input path
    // Verified by mapping to the generic From conversion
    #[test]
    fn test_load_source() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let good = write_solid_png(dir.path(), "photo", [1, 2, 3, 255], 4);
        assert!(load_source(&good).is_ok());

        let bad = dir.path().join("broken.png");
        fs::write(&bad, b"nope").expect("write garbage");
        match load_source(&bad) {
            Err(MapArtError::ImageLoad { path, .. }) => assert_eq!(path, bad),
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }
    }
}
