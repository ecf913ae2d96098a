use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use color_access::api;
use color_access::assets::{AssetCategory, AssetLoader};
use color_access::models::AppConfig;
use color_access::server;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Parser)]
#[command(name = "color-access")]
#[command(about = "Color accessibility analyzer - color-vision-deficiency simulation and WCAG contrast checks")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Simulate a color-vision deficiency on an image file
    Simulate {
        /// Input image (PNG, JPEG, GIF, BMP, WebP or TIFF)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// protanopia, deuteranopia, tritanopia or achromatopsia
        /// [default: default_vision_type from config]
        #[arg(short, long)]
        vision: Option<String>,

        /// Also write an HTML accessibility report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Contrast ratio between two hex colors (e.g. "#000000" "#ffffff")
    Contrast {
        /// Foreground (text) color
        foreground: String,

        /// Background color
        background: String,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract the web UI into ./static
        #[arg(long)]
        ui: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Color Accessibility Analyzer API",
        description = "Color-vision-deficiency simulation and WCAG contrast checks",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_analyze,
        api::handle_report,
        api::handle_contrast,
        api::handle_vision_types,
    ),
    components(schemas(
        api::AnalyzeForm,
        api::AnalyzeResponse,
        api::ContrastResultBody,
        api::ContrastResponse,
        api::WcagLevelResult,
        api::VisionTypeInfo,
        api::VisionTypesResponse,
    )),
    tags(
        (name = "Analysis", description = "Image simulation and contrast analysis")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Simulate {
            input,
            output,
            vision,
            report,
        }) => run_simulate_command(&input, &output, vision, report.as_deref()),
        Some(Commands::Contrast {
            foreground,
            background,
        }) => run_contrast_command(&foreground, &background),
        Some(Commands::Init { ui, force, list }) => run_init_command(ui, force, list),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_access=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Simulate an image file directly to a PNG file (no server needed)
fn run_simulate_command(
    input: &Path,
    output: &Path,
    vision: Option<String>,
    report: Option<&Path>,
) -> anyhow::Result<()> {
    use color_access::rendering::encode_png;
    use color_access::services::Analyzer;
    use std::sync::Arc;

    init_cli_tracing();

    let config = AppConfig::load_from_assets(&AssetLoader::from_env());
    let vision = config.requested_or_default(vision);
    let analyzer = Analyzer::new(Arc::new(config));

    let bytes = std::fs::read(input)?;
    let image = color_access::rendering::decode_upload(&bytes)
        .map_err(|e| anyhow::anyhow!("{}: {e}", input.display()))?;
    let analysis = analyzer
        .analyze_buffer(&image, &vision)
        .map_err(|e| anyhow::anyhow!("Analysis error: {e}"))?;
    let png_bytes =
        encode_png(&analysis.simulated).map_err(|e| anyhow::anyhow!("Encode error: {e}"))?;

    std::fs::write(output, &png_bytes)?;

    let c = &analysis.contrast;
    println!(
        "Simulated {} as {} -> {} ({} bytes)",
        input.display(),
        analysis.vision,
        output.display(),
        png_bytes.len()
    );
    println!(
        "Contrast {:?} vs {:?}: {}:1 ({})",
        c.pixel_1.to_bytes(),
        c.pixel_2.to_bytes(),
        c.contrast_ratio,
        if c.passes_wcag { "passes WCAG AA" } else { "fails WCAG AA" }
    );

    if let Some(report_path) = report {
        let image_name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        let html = analyzer
            .report_upload(&bytes, &vision, image_name)
            .map_err(|e| anyhow::anyhow!("Report error: {e}"))?
            .render_html()?;
        std::fs::write(report_path, html)?;
        println!("Report -> {}", report_path.display());
    }

    Ok(())
}

/// Print the contrast ratio and WCAG verdicts for two colors
fn run_contrast_command(foreground: &str, background: &str) -> anyhow::Result<()> {
    use cvd_sim::{contrast_ratio, evaluate, Pixel, WcagLevel};

    let fg: Pixel = foreground
        .parse()
        .map_err(|e| anyhow::anyhow!("foreground {foreground:?}: {e}"))?;
    let bg: Pixel = background
        .parse()
        .map_err(|e| anyhow::anyhow!("background {background:?}: {e}"))?;

    let result = evaluate(fg, bg);
    let ratio = contrast_ratio(fg, bg);

    println!("{} on {}", fg.to_hex(), bg.to_hex());
    println!("Contrast ratio: {}:1\n", result.contrast_ratio);
    for level in WcagLevel::ALL {
        println!(
            "  {:<18} {:>4}:1  {}",
            level.label(),
            level.threshold(),
            if level.passes(ratio) { "pass" } else { "FAIL" }
        );
    }

    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(ui: bool, force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Config:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        println!("\nWeb UI:");
        for f in AssetLoader::list_embedded(AssetCategory::Static) {
            println!("  {f}");
        }
        return Ok(());
    }

    let mut categories = vec![AssetCategory::Config];
    if ui {
        categories.push(AssetCategory::Static);
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("color-access v{VERSION}");
    println!("Color-vision-deficiency simulation and WCAG contrast checks\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr
            .as_deref()
            .unwrap_or(&format!("{DEFAULT_BIND_ADDR} (default)"))
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::from_env();
    println!("\nConfig source: {}", loader.config_source());

    println!("\nCommands:");
    println!("  color-access serve      Start the HTTP server");
    println!("  color-access simulate   Simulate a vision type on an image file");
    println!("  color-access contrast   Contrast ratio between two colors");
    println!("  color-access init       Extract embedded config");
    println!("\nRun 'color-access --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_access=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let asset_loader = AssetLoader::from_env();

    tracing::info!(config = %asset_loader.config_source(), "Config source configured");

    // Seed if configured path is missing
    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config");
    }

    let state = server::create_app_state(&asset_loader);

    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Color accessibility analyzer listening");

    axum::serve(listener, app).await?;

    Ok(())
}
