use anyhow::Context;
use tracing::{debug, info, warn};

use crate::config::settings::Settings;
use crate::controllers::cli::args::{Cli, Command, GalleryArgs, JuliaArgs, MandelbrotArgs, RenderArgs};
use crate::controllers::render_controller::{RenderController, RenderJob, SavedRender};
use crate::core::colour_mapping::colouring::Colouring;
use crate::core::colour_mapping::normalization::Normalization;
use crate::core::data::complex::Complex;
use crate::core::data::render_request::RenderRequest;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::presets::exploration_points::ExplorationPoint;
use crate::core::presets::julia_constants::{JuliaConstant, parse_julia_constant};
use crate::core::presets::quality::QualityPreset;

const MANDELBROT_CENTER: Complex = Complex::new(-0.5, 0.0);

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(dir) = cli.output_dir {
        settings.output.base_dir = dir;
    }

    let controller = RenderController::new(settings)?;

    match cli.command {
        Command::Mandelbrot(args) => run_mandelbrot(&controller, &args),
        Command::Julia(args) => run_julia(&controller, &args),
        Command::Info => run_info(&controller),
        Command::Gallery(args) => run_gallery(&controller, &args),
    }
}

fn run_mandelbrot(controller: &RenderController, args: &MandelbrotArgs) -> anyhow::Result<()> {
    let request = build_request(
        controller.settings(),
        &args.render,
        MANDELBROT_CENTER,
        args.explore.map(ExplorationPoint::center),
        None,
    );
    let label = args
        .explore
        .map(ExplorationPoint::name)
        .or(args.render.preset.map(QualityPreset::name));

    let saved = render(controller, FractalKind::Mandelbrot, request, label, &args.render)?;
    report(&saved);
    Ok(())
}

fn run_julia(controller: &RenderController, args: &JuliaArgs) -> anyhow::Result<()> {
    let format = args
        .render
        .format
        .unwrap_or(controller.settings().rendering.image_format);

    if args.gallery {
        println!("Rendering {} Julia constants...", JuliaConstant::ALL.len());
        let path = controller.julia_gallery(format)?;
        println!("Gallery written to {}", path.display());
        return Ok(());
    }

    let constant = parse_julia_constant(&args.julia_c)?;
    let request = build_request(
        controller.settings(),
        &args.render,
        Complex::ZERO,
        None,
        Some(constant),
    );
    // named constants double as the label, literals fall back to the preset
    let label = args
        .julia_c
        .parse::<JuliaConstant>()
        .ok()
        .map(JuliaConstant::name)
        .or(args.render.preset.map(QualityPreset::name));

    let saved = render(controller, FractalKind::Julia, request, label, &args.render)?;
    report(&saved);
    Ok(())
}

fn render(
    controller: &RenderController,
    kind: FractalKind,
    request: RenderRequest,
    label: Option<&str>,
    args: &RenderArgs,
) -> anyhow::Result<SavedRender> {
    let max_zoom = controller.settings().exploration.max_zoom;
    if request.zoom > max_zoom {
        warn!(zoom = request.zoom, max_zoom, "zoom beyond the configured maximum");
    }

    println!("Rendering {kind} set...");
    println!("Image size: {}x{}", request.width, request.height);
    println!("Max iterations: {}", request.max_iterations);

    let job = RenderJob {
        kind,
        request,
        preset: label,
        format: args
            .format
            .unwrap_or(controller.settings().rendering.image_format),
        output_name: args.output.as_deref(),
    };

    controller.render_and_save(&job)
}

/// Layers config defaults, the quality preset, a named location and explicit
/// flags, later layers winning.
pub fn build_request(
    settings: &Settings,
    args: &RenderArgs,
    default_center: Complex,
    explore_center: Option<Complex>,
    julia_constant: Option<Complex>,
) -> RenderRequest {
    let rendering = &settings.rendering;

    let mut request = RenderRequest {
        width: rendering.width,
        height: rendering.height,
        center: default_center,
        zoom: settings.exploration.default_zoom,
        max_iterations: rendering.max_iterations,
        escape_radius: rendering.escape_radius,
        julia_constant,
        colour_scheme: rendering.colour_scheme,
        colouring: Colouring {
            normalization: rendering.normalization,
            smooth: rendering.smooth_colouring,
            ..Colouring::default()
        },
    };

    if let Some(preset) = args.preset {
        request.width = preset.width();
        request.height = preset.height();
        request.max_iterations = preset.max_iterations();
    }

    if let Some(center) = explore_center {
        request.center = center;
    }

    request.width = args.width.unwrap_or(request.width);
    request.height = args.height.unwrap_or(request.height);
    request.max_iterations = args.iterations.unwrap_or(request.max_iterations);
    request.zoom = args.zoom.unwrap_or(request.zoom);
    request.center.real = args.center_x.unwrap_or(request.center.real);
    request.center.imag = args.center_y.unwrap_or(request.center.imag);
    request.escape_radius = args.escape_radius.unwrap_or(request.escape_radius);
    request.colour_scheme = args.colour_scheme.unwrap_or(request.colour_scheme);

    if args.log_scale {
        request.colouring.normalization = Normalization::Logarithmic;
    }
    if args.no_smooth {
        request.colouring.smooth = false;
    }

    debug!(?request, "built render request");
    request
}

fn report(saved: &SavedRender) {
    println!("Duration:   {:?}", saved.render_time);
    println!(
        "Iterations: min {}, max {}, mean {:.2}",
        saved.stats.min_iterations, saved.stats.max_iterations, saved.stats.mean_iterations
    );
    println!(
        "Escaped:    {} (interior {})",
        saved.stats.escaped_count, saved.stats.interior_count
    );
    println!("Saved to {}", saved.image_path.display());
    if let Some(path) = &saved.thumbnail_path {
        println!("Thumbnail  {}", path.display());
    }
    if let Some(path) = &saved.metadata_path {
        println!("Metadata   {}", path.display());
    }
}

fn run_info(controller: &RenderController) -> anyhow::Result<()> {
    println!("Quality presets:");
    for &preset in QualityPreset::ALL {
        println!(
            "  {:<10} {}x{}, {} iterations",
            preset.name(),
            preset.width(),
            preset.height(),
            preset.max_iterations()
        );
    }

    println!();
    println!("Colour schemes:");
    for (category, schemes) in &controller.settings().colour_schemes {
        let names: Vec<&str> = schemes.iter().map(|scheme| scheme.name()).collect();
        println!("  {:<10} {}", category, names.join(", "));
    }

    println!();
    println!("Exploration points:");
    for &point in ExplorationPoint::ALL {
        println!("  {:<16} {}", point.name(), point.center());
    }

    println!();
    println!("Julia constants:");
    for &constant in JuliaConstant::ALL {
        println!("  {:<10} {}", constant.name(), constant.value());
    }

    let stats = controller
        .storage_stats()
        .context("collecting storage statistics")?;
    println!();
    println!("Storage ({}):", controller.files().base_dir().display());
    println!("{stats}");

    Ok(())
}

fn run_gallery(controller: &RenderController, args: &GalleryArgs) -> anyhow::Result<()> {
    let path = controller.write_gallery(&args.output, args.kind)?;
    info!(path = %path.display(), "gallery written");
    println!("Gallery written to {}", path.display());
    Ok(())
}
