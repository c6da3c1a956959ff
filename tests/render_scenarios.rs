use std::sync::atomic::{AtomicUsize, Ordering};

use fractal_studio::{
    Colour, ColourSchemeKind, Complex, ConfigurationError, ExplorationPoint, FractalKind,
    ImageFormat, JuliaConstant, Point, RenderController, RenderError, RenderJob, RenderRequest,
    Settings, colour_map_by_name, render, render_cancelable, render_grid, render_grid_serial,
    render_with_raw,
};

fn seahorse_request() -> RenderRequest {
    RenderRequest {
        width: 100,
        height: 100,
        center: ExplorationPoint::SeahorseValley.center(),
        zoom: 50.0,
        max_iterations: 100,
        colour_scheme: ColourSchemeKind::Gray,
        ..RenderRequest::default()
    }
}

#[test]
fn seahorse_valley_has_interior_and_escaped_pixels() {
    let (image, grid) = render_with_raw(&seahorse_request(), FractalKind::Mandelbrot).unwrap();

    assert_eq!(image.buffer().len(), 100 * 100 * 3);

    let stats = grid.stats();
    assert!(stats.interior_count > 0);
    assert!(stats.escaped_count > 0);
    assert_eq!(stats.interior_count + stats.escaped_count, 100 * 100);

    for (cell, colour) in grid.cells().iter().zip(image.colours()) {
        if !cell.escaped {
            assert_eq!(colour, Colour::BLACK);
            assert_eq!(cell.iteration_count, 100);
        }
    }
    assert!(image.colours().any(|colour| colour != Colour::BLACK));
}

#[test]
fn julia_render_differs_from_mandelbrot() {
    let request = RenderRequest {
        julia_constant: Some(JuliaConstant::Classic.value()),
        ..seahorse_request()
    };

    let julia = render(&request, FractalKind::Julia).unwrap();
    let mandelbrot = render(&request, FractalKind::Mandelbrot).unwrap();

    assert_ne!(julia.buffer(), mandelbrot.buffer());
}

#[test]
fn renders_are_deterministic() {
    let request = seahorse_request();

    let first = render(&request, FractalKind::Mandelbrot).unwrap();
    let second = render(&request, FractalKind::Mandelbrot).unwrap();

    assert_eq!(first.buffer(), second.buffer());
}

#[test]
fn serial_and_parallel_grids_agree() {
    let request = RenderRequest {
        width: 73,
        height: 41,
        ..RenderRequest::default()
    };

    let parallel = render_grid(&request, FractalKind::Mandelbrot).unwrap();
    let serial = render_grid_serial(&request, FractalKind::Mandelbrot).unwrap();

    assert_eq!(parallel.cells(), serial.cells());
}

#[test]
fn centre_pixel_maps_to_the_centre() {
    // the origin is inside the Mandelbrot set, the top-left corner (-2, 2) escapes at once
    let request = RenderRequest {
        width: 100,
        height: 100,
        center: Complex::ZERO,
        ..RenderRequest::default()
    };

    let grid = render_grid(&request, FractalKind::Mandelbrot).unwrap();

    let centre = grid.get(Point { x: 50, y: 50 }).unwrap();
    assert!(!centre.escaped);

    let corner = grid.get(Point { x: 0, y: 0 }).unwrap();
    assert!(corner.escaped);
    assert_eq!(corner.iteration_count, 1);
}

#[test]
fn row_zero_is_the_top_of_the_image() {
    // plane spans imag 1.75 (top) down to -0.25 (bottom) along real = 0
    let request = RenderRequest {
        width: 100,
        height: 100,
        center: Complex::new(0.0, 0.75),
        zoom: 2.0,
        ..RenderRequest::default()
    };

    let grid = render_grid(&request, FractalKind::Mandelbrot).unwrap();

    assert!(grid.get(Point { x: 50, y: 0 }).unwrap().escaped);
    assert!(!grid.get(Point { x: 50, y: 99 }).unwrap().escaped);
}

#[test]
fn mandelbrot_is_symmetric_about_the_real_axis() {
    let request = RenderRequest {
        width: 40,
        height: 41,
        center: Complex::new(-0.5, 0.0),
        ..RenderRequest::default()
    };

    let grid = render_grid(&request, FractalKind::Mandelbrot).unwrap();

    for y in 1..=20 {
        assert_eq!(grid.row(y), grid.row(41 - y));
    }
}

#[test]
fn unknown_colour_scheme_is_rejected() {
    assert!(matches!(
        "sepia".parse::<ColourSchemeKind>(),
        Err(ConfigurationError::UnknownColourScheme { .. })
    ));
    assert!(colour_map_by_name("sepia").is_err());
}

#[test]
fn zero_width_is_a_configuration_error() {
    let request = RenderRequest {
        width: 0,
        ..RenderRequest::default()
    };

    assert!(matches!(
        render(&request, FractalKind::Mandelbrot),
        Err(RenderError::Configuration(
            ConfigurationError::InvalidDimensions { .. }
        ))
    ));
}

#[test]
fn julia_without_constant_is_rejected() {
    let request = RenderRequest {
        width: 10,
        height: 10,
        julia_constant: None,
        ..RenderRequest::default()
    };

    assert_eq!(
        render(&request, FractalKind::Julia).unwrap_err(),
        RenderError::Configuration(ConfigurationError::MissingJuliaConstant)
    );
}

#[test]
fn extreme_zoom_reports_precision_loss() {
    let request = RenderRequest {
        width: 100,
        height: 100,
        zoom: 1e16,
        ..RenderRequest::default()
    };

    assert!(matches!(
        render(&request, FractalKind::Mandelbrot),
        Err(RenderError::NumericPrecision { .. })
    ));
}

#[test]
fn oversized_render_is_refused_before_allocating() {
    let request = RenderRequest {
        width: 100_000,
        height: 100_000,
        ..RenderRequest::default()
    };

    assert!(matches!(
        render(&request, FractalKind::Mandelbrot),
        Err(RenderError::Resource { .. })
    ));
}

#[test]
fn cancelled_render_returns_no_image() {
    let polls = AtomicUsize::new(0);
    let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 3;

    let result = render_cancelable(&seahorse_request(), FractalKind::Mandelbrot, &cancel);

    assert_eq!(result.unwrap_err(), RenderError::Cancelled);
}

#[test]
fn controller_writes_image_thumbnail_and_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::with_defaults();
    settings.output.base_dir = dir.path().to_path_buf();

    let controller = RenderController::new(settings).unwrap();
    let job = RenderJob {
        kind: FractalKind::Mandelbrot,
        request: RenderRequest {
            width: 64,
            height: 48,
            max_iterations: 50,
            ..RenderRequest::default()
        },
        preset: Some("preview"),
        format: ImageFormat::Png,
        output_name: None,
    };

    let saved = controller.render_and_save(&job).unwrap();

    assert!(saved.image_path.is_file());
    assert!(saved.image_path.starts_with(dir.path().join("mandelbrot")));
    assert!(saved.thumbnail_path.as_ref().is_some_and(|path| path.is_file()));
    assert!(saved.metadata_path.as_ref().is_some_and(|path| path.is_file()));

    let stats = controller.storage_stats().unwrap();
    assert_eq!(stats.total_images, 1);
}
