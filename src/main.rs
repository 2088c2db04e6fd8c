use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use charcoal::api;
use charcoal::models::AppConfig;
use charcoal::server;

#[derive(Parser)]
#[command(name = "charcoal")]
#[command(about = "Charcoal - colorized ASCII art server for raster images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Convert an image file directly to an HTML document
    Convert {
        /// Input image file (PNG, JPEG, GIF or WebP)
        #[arg(short, long)]
        input: PathBuf,

        /// Output HTML file path (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Charcoal API",
        description = "Colorized ASCII art conversion for raster images",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_convert),
    components(schemas(api::ConvertResponse)),
    tags(
        (name = "Convert", description = "Image to ASCII art conversion")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Convert { input, output }) => run_convert_command(&input, output.as_deref()),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Convert an image file to HTML directly (no server needed)
fn run_convert_command(input: &std::path::Path, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    use ascii_art::{convert, GlyphRamp, Palette};

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charcoal=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let bytes = std::fs::read(input)
        .map_err(|e| anyhow::anyhow!("Cannot read {}: {e}", input.display()))?;
    let grid = api::decode_to_grid(&bytes).map_err(|e| anyhow::anyhow!("{e}"))?;

    let ramp = GlyphRamp::default();
    let palette = Palette::default();
    let html = convert(&grid, &ramp, &palette)?;

    match output {
        Some(path) => {
            std::fs::write(path, &html)?;
            println!(
                "Rendered {} ({}x{} pixels, {} bytes)",
                path.display(),
                grid.width(),
                grid.height(),
                html.len()
            );
        }
        None => println!("{html}"),
    }

    Ok(())
}

/// Display status and usage information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Charcoal v{VERSION}");
    println!("Colorized ASCII art server for raster images\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  charcoal serve     Start the HTTP server");
    println!("  charcoal convert   Convert an image file to an HTML document");
    println!("\nRun 'charcoal --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charcoal=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let mut config = AppConfig::load(config_file.as_deref());
    if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
        config.bind_addr = bind_addr;
    }
    let config = Arc::new(config);

    // Create application state using shared server module
    let state = server::create_app_state(config.clone())?;
    tracing::info!(
        ramp_len = state.ramp.len(),
        palette_len = state.palette.len(),
        "Conversion tables initialized"
    );

    // Build router: shared API routes plus OpenAPI documentation
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Charcoal server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
