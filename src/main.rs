use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use roster_backend::api::{AuthApi, HealthApi, UsersApi};
use roster_backend::config::AppSettings;
use roster_backend::services::{AuthService, TokenService, UserService};
use roster_backend::stores::JsonFileUserStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let settings = AppSettings::from_env();
    settings.init_logging().expect("Failed to initialize logging");

    tracing::info!(data_file = %settings.data_file.display(), "using JSON data file");

    let store = Arc::new(JsonFileUserStore::new(settings.data_file.clone()));

    let token_service = Arc::new(TokenService::new(
        settings.jwt_secret.clone(),
        settings.jwt_expiration_minutes,
    ));
    let auth_service = Arc::new(AuthService::new(store.clone()));
    let user_service = Arc::new(UserService::new(store.clone()));

    let health_api = HealthApi::new(store);
    let auth_api = AuthApi::new(auth_service, token_service.clone());
    let users_api = UsersApi::new(user_service, token_service);

    // Create OpenAPI service with API implementations
    let api_service =
        OpenApiService::new((health_api, auth_api, users_api), "Roster API", "1.0.0")
            .server(format!("http://{}/api", settings.bind_addr));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!(bind_addr = %settings.bind_addr, "starting server");

    Server::new(TcpListener::bind(settings.bind_addr)).run(app).await
}
