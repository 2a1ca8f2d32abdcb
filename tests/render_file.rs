#![allow(clippy::unwrap_used)]

use plot3::{
    render_curve_to_file, render_to_file, Color, Curve, Plot, Plot3Error, RenderOptions,
    SourceError, Xyzs,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

/// 100 samples of `x = cos t, y = sin t, z = t` for `t` in `[0, 20)`.
fn helix() -> Xyzs {
    let t: Vec<f64> = (0..100).map(|i| 20.0 * f64::from(i) / 100.0).collect();
    let x: Vec<f64> = t.iter().map(|t| t.cos()).collect();
    let y: Vec<f64> = t.iter().map(|t| t.sin()).collect();
    Xyzs::from_slices(&x, &y, &t).unwrap()
}

fn inked_pixels(image: &image::RgbaImage) -> usize {
    image
        .pixels()
        .filter(|p| p.0 != [255, 255, 255, 255])
        .count()
}

#[test]
fn helix_renders_to_png() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("helix.png");

    render_to_file(&file, &helix()).unwrap();

    let image = image::open(&file).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (750, 750));
    assert!(inked_pixels(&image) > 0);
}

#[test]
fn curve_color_overrides_foreground() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("red.png");
    let curve = Curve::new(&helix()).unwrap().with_color(Color::rgb(255, 0, 0));
    let options = RenderOptions {
        width: 200.0,
        height: 100.0,
        ..RenderOptions::default()
    };

    render_curve_to_file(&file, &curve, &options).unwrap();

    let image = image::open(&file).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (200, 100));
    assert!(image.pixels().any(|p| p.0 == [255, 0, 0, 255]));
    assert!(!image.pixels().any(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn plot_with_curve_saves_png() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("plot.png");
    let mut plot = Plot::new();
    plot.add(Curve::new(&helix()).unwrap());

    plot.save_png(300.0, 200.0, &file).unwrap();

    let image = image::open(&file).unwrap().to_rgba8();
    assert_eq!(image.dimensions(), (300, 200));
    assert!(inked_pixels(&image) > 0);
}

#[test]
fn mismatched_slices_are_rejected() {
    let err = Xyzs::from_slices(&[0.0, 1.0], &[0.0], &[0.0, 1.0]).unwrap_err();
    assert!(matches!(
        err,
        Plot3Error::Source(SourceError::LengthMismatch { x: 2, y: 1, z: 2 })
    ));
}

#[test]
fn empty_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("empty.png");

    let err = render_to_file(&file, &Xyzs::default()).unwrap_err();

    assert!(matches!(err, Plot3Error::Source(SourceError::Empty)));
    assert!(!file.exists());
}
