use std::env;
use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroU32;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    extract::State,
    extract::connect_info::ConnectInfo,
    http::Method,
    http::Request,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
    middleware,
    middleware::Next,
    response::Response,
    routing::{get, post},
};
use clap::Parser;
use dotenvy::dotenv;
use governor::{
    Quota, RateLimiter, clock::DefaultClock, middleware::NoOpMiddleware,
    state::keyed::DashMapStateStore,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use dc_common::board::JobBoard;
use dc_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use dc_common::matching::{JobMatchEngine, MatchEngineConfig};

pub mod error;
pub mod handlers;

use error::ApiError;
use handlers::{health, jobs};

const SHUTDOWN_DRAIN_GRACE: Duration = Duration::from_millis(200);
const DEFAULT_METRICS_PORT: u16 = 9091;

#[derive(Debug, Clone, Parser)]
#[command(name = "dc-api", about = "HTTP API for the DEV-Connect job board")]
struct Cli {
    /// Server port
    #[arg(long, env = "DC_PORT", default_value_t = 8080)]
    port: u16,

    /// Optional JSON seed file loaded into the board at startup
    #[arg(long, env = "DC_JOBS_FILE")]
    jobs_file: Option<String>,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "DC_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub jobs_file: Option<String>,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cors_origins.iter().any(|origin| origin == "*") {
            return Err(ApiError::BadRequest(
                "DC_CORS_ORIGINS must list explicit origins when credentials are enabled".into(),
            ));
        }

        Ok(Self {
            port: cli.port,
            jobs_file: cli.jobs_file,
            cors_origins,
        })
    }

    pub fn for_tests() -> Self {
        Self {
            port: 8080,
            jobs_file: None,
            cors_origins: vec!["http://localhost:3000".into()],
        }
    }
}

type IpRateLimiter = RateLimiter<IpAddr, DashMapStateStore<IpAddr>, DefaultClock, NoOpMiddleware>;

#[derive(Clone)]
pub struct RateLimits {
    global: Arc<IpRateLimiter>,
    submit: Arc<IpRateLimiter>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub global_per_sec: u64,
    pub global_burst: u32,
    pub submit_per_sec: u64,
    pub submit_burst: u32,
}

impl RateLimitConfig {
    fn parse_env_u64(name: &str) -> Option<u64> {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|value| *value > 0)
    }

    fn parse_env_u32(name: &str) -> Option<u32> {
        env::var(name)
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|value| *value > 0)
    }

    fn from_env() -> Self {
        Self {
            global_per_sec: Self::parse_env_u64("DC_RATE_LIMIT_GLOBAL_PER_SEC").unwrap_or(20),
            global_burst: Self::parse_env_u32("DC_RATE_LIMIT_GLOBAL_BURST").unwrap_or(40),
            submit_per_sec: Self::parse_env_u64("DC_RATE_LIMIT_SUBMIT_PER_SEC").unwrap_or(1),
            submit_burst: Self::parse_env_u32("DC_RATE_LIMIT_SUBMIT_BURST").unwrap_or(5),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<JobBoard>>,
    pub engine: JobMatchEngine,
    pub config: AppConfig,
    pub(crate) rate_limits: RateLimits,
    pub readiness: Arc<AtomicBool>,
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(true)
}

fn build_ip_limiter(per_second: u64, burst_size: u32) -> Arc<IpRateLimiter> {
    let nanos_per_token = 1_000_000_000u64 / per_second.max(1);
    let quota = Quota::with_period(Duration::from_nanos(nanos_per_token.max(1)))
        .unwrap()
        .allow_burst(NonZeroU32::new(burst_size).unwrap());

    Arc::new(RateLimiter::keyed(quota))
}

pub fn default_rate_limits() -> RateLimits {
    let cfg = RateLimitConfig::from_env();
    RateLimits {
        global: build_ip_limiter(cfg.global_per_sec, cfg.global_burst),
        submit: build_ip_limiter(cfg.submit_per_sec, cfg.submit_burst),
    }
}

fn request_ip<B>(req: &Request<B>) -> Option<IpAddr> {
    req.extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip())
}

fn enforce_rate_limit(limiter: &IpRateLimiter, ip: Option<IpAddr>) -> Result<(), ApiError> {
    if let Some(client_ip) = ip {
        if limiter.check_key(&client_ip).is_err() {
            return Err(ApiError::TooManyRequests("rate limit exceeded".into()));
        }
    }

    Ok(())
}

async fn global_rate_limit(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    enforce_rate_limit(&state.rate_limits.global, request_ip(&req))?;
    Ok(next.run(req).await)
}

async fn submit_rate_limit(
    State(state): State<SharedState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    enforce_rate_limit(&state.rate_limits.submit, request_ip(&req))?;
    Ok(next.run(req).await)
}

async fn attach_request_id_context(req: Request<Body>, next: Next) -> Result<Response, ApiError> {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    Ok(error::with_request_id(request_id, next.run(req)).await)
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let request_id_header = HeaderName::from_static("x-request-id");
    let trace_header = request_id_header.clone();

    let trace = TraceLayer::new_for_http().make_span_with(move |request: &Request<Body>| {
        let request_id = request
            .headers()
            .get(&trace_header)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
            status = tracing::field::Empty,
        )
    });

    let api_routes = Router::new()
        .route("/jobs", get(jobs::list_jobs))
        .route(
            "/jobs",
            post(jobs::submit_job).route_layer(middleware::from_fn_with_state(
                state.clone(),
                submit_rate_limit,
            )),
        )
        .route("/jobs/search", post(jobs::search_jobs))
        .route("/jobs/:id", get(jobs::get_job))
        .route(
            "/jobs/:id/apply",
            post(jobs::apply_to_job).route_layer(middleware::from_fn_with_state(
                state.clone(),
                submit_rate_limit,
            )),
        )
        .route("/jobs/:id/close", post(jobs::close_job));

    Router::new()
        .route("/health", get(health::readyz))
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .nest("/api", api_routes)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            global_rate_limit,
        ))
        .layer(middleware::from_fn(attach_request_id_context))
        .layer(DefaultBodyLimit::max(256 * 1024))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(
            request_id_header,
            MakeRequestUuid::default(),
        ))
        .layer(cors)
        .with_state(state)
}

pub fn test_state(board: JobBoard) -> SharedState {
    Arc::new(AppState {
        board: Arc::new(RwLock::new(board)),
        engine: JobMatchEngine::new(MatchEngineConfig::default()),
        config: AppConfig::for_tests(),
        rate_limits: default_rate_limits(),
        readiness: Arc::new(AtomicBool::new(true)),
    })
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));
    let _ = dc_metrics::init_metrics("DC_METRICS_PORT", DEFAULT_METRICS_PORT);

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;

    let board = match config.jobs_file.as_deref() {
        Some(path) => JobBoard::load_seed_file(path)
            .map_err(|err| ApiError::Internal(format!("failed to load jobs file: {err}")))?,
        None => JobBoard::new(),
    };
    info!(postings = board.len(), "job board loaded");

    let state = Arc::new(AppState {
        board: Arc::new(RwLock::new(board)),
        engine: JobMatchEngine::new(MatchEngineConfig::from_env()),
        config: config.clone(),
        rate_limits: default_rate_limits(),
        readiness: Arc::new(AtomicBool::new(true)),
    });

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let app = create_router(state.clone());

    info!(%addr, "dc-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal(state.clone()))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

async fn shutdown_signal(state: SharedState) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
            let _ = sigterm.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state
        .readiness
        .store(false, std::sync::atomic::Ordering::SeqCst);

    // Give load balancers a brief window to observe /readyz as not ready
    // before axum stops accepting new connections.
    tokio::time::sleep(SHUTDOWN_DRAIN_GRACE).await;
}
