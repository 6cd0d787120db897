use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG, DATABASE_URL and friends are visible
    dotenv().ok();

    let cfg = configs::AppConfig::load_or_env();
    let json_logs = cfg.as_ref().map(|c| c.logging.json).unwrap_or(false);
    common::utils::logging::init_logging(json_logs);

    let cfg = match cfg {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "server", event = "config_invalid", error = %e, "cannot load configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "server",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = cfg.server.worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "server", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "server",
        event = "start",
        %service_id,
        pid,
        version,
        threads = cfg.server.worker_threads.unwrap_or_default(),
        "server service starting"
    );

    match rt.block_on(server::run(cfg)) {
        Ok(()) => {
            info!(service = "server", event = "stop", %service_id, pid, "server stopped normally");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "server", event = "run_failed", error = %e, "server::run returned error");
            std::process::ExitCode::FAILURE
        }
    }
}
