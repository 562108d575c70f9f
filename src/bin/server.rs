use std::{fs::OpenOptions, net::SocketAddr, sync::Arc};

use axum::{
    Router,
    extract::{MatchedPath, Request},
};
use axum_server::Handle;
use clap::Parser;
use rusqlite::Connection;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use sales_stats_rs::{
    build_router,
    charts::HtmlChartRenderer,
    graceful_shutdown,
    pagination::PaginationConfig,
    seed::{DEFAULT_SEED_URL, FileSeedSource, HttpSeedSource, SeedSource},
    stores::sqlite::create_app_state,
};

/// The REST API server for sales_stats_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long)]
    db_path: String,

    /// The port to serve the API from.
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// URL of the JSON feed that `/initialize` seeds the database from.
    #[arg(long, default_value = DEFAULT_SEED_URL)]
    seed_url: String,

    /// Seed from a local JSON file instead of the feed URL.
    #[arg(long, conflicts_with = "seed_url")]
    seed_file: Option<String>,

    /// Write each chart requested from the chart endpoints to an HTML file in
    /// this directory.
    #[arg(long)]
    chart_dir: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));

    let seed_source: Arc<dyn SeedSource> = match &args.seed_file {
        Some(path) => Arc::new(FileSeedSource::new(path)),
        None => Arc::new(
            HttpSeedSource::new(&args.seed_url).expect("Could not parse the seed URL."),
        ),
    };

    let conn = Connection::open(&args.db_path).expect("Could not open the database.");
    let mut state = create_app_state(conn, seed_source, PaginationConfig::default())
        .expect("Could not initialize the database.");

    if let Some(chart_dir) = &args.chart_dir {
        tracing::info!("Rendering charts to {chart_dir}");
        state = state.with_chart_renderer(Arc::new(HtmlChartRenderer::new(chart_dir)));
    }

    let handle = Handle::new();
    tokio::spawn(graceful_shutdown(handle.clone()));

    let router = add_tracing_layer(build_router(state));

    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr)
        .handle(handle)
        .serve(router.into_make_service())
        .await
        .expect("The server stopped unexpectedly.");
}

fn setup_logging() {
    let stdout_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(stdout_filter);

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(filter::LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(stdout_log)
        .with(debug_log)
        .init();
}

fn add_tracing_layer(router: Router) -> Router {
    let tracing_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request| {
            let method = req.method();
            let uri = req.uri();

            let matched_path = req
                .extensions()
                .get::<MatchedPath>()
                .map(|matched_path| matched_path.as_str());

            tracing::debug_span!("request", %method, %uri, matched_path)
        })
        // By default, `TraceLayer` will log 5xx responses but we're doing our specific
        // logging of errors so disable that
        .on_failure(());

    router.layer(tracing_layer)
}
