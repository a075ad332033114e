use inventory_api::{app, db, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "inventory_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = AppState::init().await?;

    // `migrate` applies pending migrations and exits; the serving path never
    // touches the schema.
    if let Some(cmd) = std::env::args().nth(1) {
        return match cmd.as_str() {
            "migrate" => db::run_migrations(&state.db).await,
            other => anyhow::bail!("unknown command: {other}"),
        };
    }

    let app = app::build_app(state);
    app::serve(app).await
}
