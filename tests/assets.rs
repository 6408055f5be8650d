use std::io::Cursor;

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};

use glsteps::assets::TextureData;
use glsteps::math::Vector2;
use glsteps::video::texture::TextureFormat;

fn png() -> Vec<u8> {
    let mut img = ImageBuffer::new(2, 3);
    img.put_pixel(0, 0, Rgba([255u8, 0, 0, 255]));
    img.put_pixel(1, 2, Rgba([0u8, 0, 255, 128]));

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn decode_png_from_memory() {
    let data = TextureData::from_memory(&png(), false).unwrap();
    assert_eq!(data.format, TextureFormat::RGBA8);
    assert_eq!(data.dimensions, Vector2::new(2, 3));
    assert_eq!(data.data.len(), 2 * 3 * 4);
    assert_eq!(&data.data[0..4], &[255, 0, 0, 255]);
}

#[test]
fn flipped_png_starts_with_last_row() {
    let data = TextureData::from_memory(&png(), true).unwrap();
    assert_eq!(&data.data[4..8], &[0, 0, 255, 128]);
    assert_eq!(&data.data[16..20], &[255, 0, 0, 255]);
}

#[test]
fn decode_png_from_file() {
    let path = std::env::temp_dir().join("glsteps-assets-decode.png");
    std::fs::write(&path, png()).unwrap();

    let data = TextureData::from_path(&path, false).unwrap();
    assert_eq!(data, TextureData::from_memory(&png(), false).unwrap());

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn garbage_is_error() {
    assert!(TextureData::from_memory(b"not an image", false).is_err());
}

#[test]
fn missing_image_falls_back_to_white() {
    let data = TextureData::from_path_or_white("does/not/exist.png", true);
    assert_eq!(data.format, TextureFormat::RGBA8);
    assert_eq!(data.dimensions, Vector2::new(1, 1));
    assert_eq!(data.data, vec![255; 4]);
}
