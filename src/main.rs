use cloudml::catalog::Catalog;
use cloudml::config;
use cloudml::error::ServeError;
use cloudml::models::AppState;
use cloudml::routes::build_app;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use config::{DEFAULT_HOST, DEFAULT_PORT};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);
    AppState {
        catalog: Arc::new(Catalog::standard()),
        public_base_url: config::get_public_base_url(),
        platform_name: config::get_platform_name(),
        custom_css: None,
    }
}

async fn start_server(
    mut state: AppState,
    host: &str,
    port: u16,
    stylesheet: Option<String>,
) -> Result<(), ServeError> {
    if let Some(path) = stylesheet {
        let css = std::fs::read_to_string(&path).map_err(|source| ServeError::StylesheetRead {
            path: path.clone(),
            source,
        })?;
        tracing::info!("Loaded custom stylesheet from {}", path);
        state.custom_css = Some(css);
    }

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let app = build_app(state);
    tracing::info!(%addr, "Starting CloudML pricing server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}

async fn run_server(state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Err(e) = start_server(state, host, port, stylesheet).await {
        tracing::error!(%e, "Server failed");
        eprintln!("{}", yansi::Paint::new(format!("{}", e)).red());
        if matches!(e, ServeError::Bind { .. }) {
            eprintln!(
                "{}",
                yansi::Paint::new(
                    "Please stop any process using this port, or start the server with a different --port value."
                )
                .yellow()
            );
        }
        process::exit(1);
    }
}

fn print_plan_table(catalog: &Catalog) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }

    table.set_header(vec!["Plan", "Price", "Description", "Features"]);
    for plan in catalog.plans() {
        table.add_row(vec![
            plan.name.clone(),
            plan.price.clone(),
            plan.description.clone(),
            plan.features.join("\n"),
        ]);
    }

    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "cloudml",
    author,
    version,
    about = "CloudML plan selection and pricing",
    long_about = r#"CloudML — serve the plan-selection and pricing page for the CloudML platform.

This tool surfaces a small set of commands to run the pricing server and inspect the plan catalog. Use the `--env-file` option or environment variables to configure the public base URL and platform name.

Examples:
  1) Build & run (dev):
      cargo run -- serve --host 127.0.0.1 --port 5000
  2) Build a release binary:
      cargo build --release
  3) Inspect the catalog:
      cloudml plans
      cloudml plans --json
"#,
    after_help = "Use `cloudml <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Print the plan catalog
    #[command(about = "Print the plan catalog", long_about = "Print the fixed plan catalog (name, price, description, features) as a table, or as JSON with `--json`.")]
    Plans {
        /// Print the catalog as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // CLI parsing
    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    // Dispatch CLI commands. If no command provided, serve the web app by default
    if cli.command.is_none() {
        let state = build_state_from_env(None);
        run_server(state, DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    }
    match cli.command.unwrap() {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            run_server(state, &host, port, stylesheet).await;
        }
        Commands::Plans { json } => {
            let catalog = Catalog::standard();
            if json {
                match serde_json::to_string_pretty(catalog.plans()) {
                    Ok(out) => println!("{}", out),
                    Err(e) => {
                        eprintln!("{}: {}", yansi::Paint::new("Failed to encode catalog").red(), e);
                        process::exit(1);
                    }
                }
            } else {
                print_plan_table(&catalog);
            }
        }
    }
}
