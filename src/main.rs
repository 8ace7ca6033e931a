use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use venusevents_web::store::FormStore;
use venusevents_web::{AppState, SiteConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "venusevents_web=info,tower_http=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state_file =
        std::env::var("STATE_FILE").unwrap_or_else(|_| "data/state.json".to_string());
    let store = FormStore::load(&state_file);

    let site = SiteConfig {
        whatsapp_phone: std::env::var("WHATSAPP_PHONE")
            .unwrap_or_else(|_| "60123456789".to_string()),
    };

    let state = AppState::new(store, site);
    let app = venusevents_web::build_router(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
