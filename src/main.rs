use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_ranking::config::environment::EnvironmentConfig;
use car_ranking::database;
use car_ranking::routes;
use car_ranking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::default();

    // Configurar logging
    let max_level = if config.is_development() {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(max_level).init();

    info!("🚗 Car Ranking - Top Cars CRUD");
    info!("==============================");

    // Inicializar base de datos
    let pool = match database::create_pool(Some(&config.database_url)).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    database::ensure_schema(&pool).await?;

    let app_state = AppState::new(pool, config.clone());
    let app = routes::create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Listado con ranking recalculado");
    info!("   GET  /add - Formulario de alta");
    info!("   POST /add - Crear coche");
    info!("   GET  /edit?id=N - Formulario de edición");
    info!("   POST /edit?id=N - Edición parcial (rating, comment, img_link)");
    info!("   GET  /delete?id=N - Eliminar coche");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
