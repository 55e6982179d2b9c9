use stk_api::{config::ApiConfig, middleware::cors::create_cors_layer, state::ApiState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    stk_api::tracing::init_tracing(&config.env);

    // CORS is restricted to the frontend origin; credentials must be allowed
    // for the session cookie
    let cors = create_cors_layer(vec![config.frontend_url.clone()]);

    // Initialize the application state
    let state = ApiState::new(config)?;

    // Create the application router
    let app = stk_api::router::router().with_state(state).layer(cors);

    // Start the server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    tracing::info!("Server running on http://localhost:3000");
    axum::serve(listener, app).await?;

    Ok(())
}
