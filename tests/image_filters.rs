use std::path::{Path, PathBuf};

use pixelfx::{
    apply_color_noise, apply_glitch, apply_grayscale, apply_wave_distortion, Image, SENTINEL,
};
use tempfile::TempDir;

/// Write a 64x48 color gradient PNG into a fresh temp dir.
#[allow(clippy::cast_possible_truncation)]
fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("input.png");

    let img = image::RgbaImage::from_fn(64, 48, |x, y| {
        image::Rgba([(x * 4) as u8, (y * 5) as u8, ((x + y) * 2) as u8, 255])
    });
    img.save(&path).unwrap();

    (dir, path)
}

fn load(path: &Path) -> Image {
    let mut img = Image::new();
    assert!(img.load(path));
    img
}

fn changed(a: &Image, b: &Image) -> bool {
    (0..i64::from(a.height()))
        .any(|y| (0..i64::from(a.width())).any(|x| a.get_pixel(x, y) != b.get_pixel(x, y)))
}

#[test]
fn test_load_missing_and_existing() {
    let (_dir, path) = fixture();
    let mut img = Image::new();

    assert!(!img.load("nonexistent.png"));
    assert!(img.load(&path));
}

#[test]
fn test_load_failure_keeps_previous_image() {
    let (dir, path) = fixture();
    let mut img = load(&path);
    let before = img.clone();

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not a png").unwrap();

    assert!(!img.load(&garbage));
    assert_eq!(img, before);
}

#[test]
fn test_save_writable_and_unwritable() {
    let (dir, path) = fixture();
    let img = load(&path);

    assert!(img.save(dir.path().join("output.png")));
    assert!(!img.save(dir.path().join("nonexistent_directory").join("output.png")));
}

#[test]
fn test_dimensions_before_and_after_load() {
    let (_dir, path) = fixture();
    let mut img = Image::new();
    assert_eq!(img.width(), 0);
    assert_eq!(img.height(), 0);

    assert!(img.load(&path));
    assert_eq!((img.width(), img.height()), (64, 48));
}

#[test]
fn test_get_pixel() {
    let (_dir, path) = fixture();
    let img = load(&path);

    assert_eq!(img.get_pixel(-1, 0), SENTINEL);
    assert_ne!(img.get_pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(img.get_pixel(3, 2), [12, 10, 10, 255]);
}

#[test]
fn test_set_pixel() {
    let (_dir, path) = fixture();
    let mut img = load(&path);
    let color = [255, 128, 0, 255];

    img.set_pixel(0, 0, color);
    assert_eq!(img.get_pixel(0, 0), color);

    let (w, h) = (i64::from(img.width()), i64::from(img.height()));
    img.set_pixel(w, h, color);
    assert_eq!(img.get_pixel(w, h), SENTINEL);
}

#[test]
fn test_save_then_load_preserves_pixels() {
    let (dir, path) = fixture();
    let mut img = load(&path);
    img.set_pixel(5, 5, [1, 2, 3, 4]);

    let out = dir.path().join("copy.png");
    assert!(img.save(&out));
    assert_eq!(load(&out), img);
}

#[test]
fn test_wave_distortion() {
    let (_dir, path) = fixture();
    let original = load(&path);

    let mut img = original.clone();
    apply_wave_distortion(&mut img, 15.0);
    assert!(changed(&img, &original));

    let mut img = original.clone();
    apply_wave_distortion(&mut img, 0.0);
    assert!(!changed(&img, &original));
}

#[test]
fn test_grayscale() {
    let (_dir, path) = fixture();
    let mut img = load(&path);

    apply_grayscale(&mut img);
    for y in 0..i64::from(img.height()) {
        for x in 0..i64::from(img.width()) {
            let [r, g, b, _] = img.get_pixel(x, y);
            assert!(r == g && g == b);
        }
    }

    let before_second = img.clone();
    apply_grayscale(&mut img);
    assert!(!changed(&img, &before_second));
}

#[test]
fn test_glitch() {
    let (_dir, path) = fixture();
    let mut img = load(&path);
    assert!(img.height() >= 10);
    let original = img.clone();

    apply_glitch(&mut img);
    assert!(changed(&img, &original));
}

#[test]
fn test_color_noise() {
    let (_dir, path) = fixture();
    let original = load(&path);

    let mut img = original.clone();
    apply_color_noise(&mut img, 0.5);
    assert!(changed(&img, &original));

    let mut img = original.clone();
    apply_color_noise(&mut img, 0.0);
    assert!(!changed(&img, &original));
}

#[test]
fn test_filters_on_empty_image() {
    let mut img = Image::new();
    apply_wave_distortion(&mut img, 15.0);
    apply_grayscale(&mut img);
    apply_glitch(&mut img);
    apply_color_noise(&mut img, 0.5);
    assert!(img.is_empty());
}

#[test]
fn test_glitch_on_horizontal_stripes() {
    for _ in 0..50 {
        let pixels: Vec<u8> = (0..10u8)
            .flat_map(|y| [y * 20, 50, 90, 255].repeat(16))
            .collect();
        let mut img = Image::from_rgba(16, 10, pixels).unwrap();
        let original = img.clone();

        apply_glitch(&mut img);
        assert!(changed(&img, &original));
    }
}

#[test]
fn test_color_noise_on_saturated_pixels() {
    for color in [[255, 255, 255, 255], [0, 0, 0, 255]] {
        for _ in 0..100 {
            let mut img = Image::from_rgba(1, 1, color.to_vec()).unwrap();
            apply_color_noise(&mut img, 0.5);
            assert_ne!(img.get_pixel(0, 0), color);
        }
    }
}

#[test]
fn test_wave_with_tiny_amplitude() {
    let mut img = Image::from_rgba(2, 1, vec![10, 20, 30, 255, 40, 50, 60, 255]).unwrap();
    let original = img.clone();

    apply_wave_distortion(&mut img, 5e-5);
    assert!(changed(&img, &original));
    assert_eq!(img.get_pixel(0, 0), [40, 50, 60, 255]);
}
