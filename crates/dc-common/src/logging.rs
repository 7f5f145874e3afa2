use std::panic;
use std::path::PathBuf;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

// Dropping the guard stops the background flush thread, so it is parked
// here for the life of the process.
static FLUSH_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Tracing setup for a service binary. `RUST_LOG` controls filtering and
/// defaults to `info`. With `DC_LOG_DIR` set, output switches from stdout to
/// `<DC_LOG_DIR>/<app_name>.log`, rotated daily.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt = tracing_subscriber::fmt().with_env_filter(filter);

    match file_writer(app_name) {
        Some(writer) => {
            let _ = fmt.with_writer(writer).try_init();
        }
        None => {
            let _ = fmt.try_init();
        }
    }
}

fn file_writer(app_name: &'static str) -> Option<BoxMakeWriter> {
    let dir = PathBuf::from(std::env::var_os("DC_LOG_DIR")?);
    if let Err(err) = std::fs::create_dir_all(&dir) {
        tracing::warn!(error = %err, "failed to create DC_LOG_DIR; keeping stdout");
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = FLUSH_GUARD.set(guard);

    Some(BoxMakeWriter::new(writer))
}

/// Send panics through the subscriber so they land in the same stream as
/// everything else. Installs at most once per process; with
/// `DC_LOG_INCLUDE_BACKTRACE=1` the previous hook runs afterwards for the
/// backtrace.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static HOOK: OnceLock<()> = OnceLock::new();

    HOOK.get_or_init(|| {
        let previous = panic::take_hook();
        let chain_previous = std::env::var("DC_LOG_INCLUDE_BACKTRACE")
            .is_ok_and(|value| value == "1" || value.eq_ignore_ascii_case("true"));

        panic::set_hook(Box::new(move |info| {
            let thread = std::thread::current();

            let message = if let Some(text) = info.payload().downcast_ref::<&str>() {
                (*text).to_string()
            } else if let Some(text) = info.payload().downcast_ref::<String>() {
                text.clone()
            } else {
                "non-string panic payload".to_string()
            };

            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()));

            tracing::error!(
                application = app_name,
                thread = thread.name().unwrap_or("unnamed"),
                location = location.as_deref().unwrap_or("unknown"),
                panic_message = %message,
                "panic captured"
            );

            if chain_previous {
                previous(info);
            }
        }));
    });
}
