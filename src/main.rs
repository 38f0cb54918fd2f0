use std::str::FromStr;
use std::sync::Arc;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use eyre::Result;
use log::{error, info};
use refinery::config::Config as MigrationConfig;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::room::CreateRoomRequest;
use crate::error::Error;
use crate::repository::rooms::RoomRepository;
use crate::repository::users::UserRepository;
use crate::routes::Api;
use crate::service::rooms::RoomService;
use crate::service::users::UserService;

mod config;
mod domain;
mod error;
mod repository;
mod routes;
mod service;

refinery::embed_migrations!("migrations");

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let config = Config::from_env()?;
    info!("server starts on {}", config.bind_address);

    // run migrations
    let mut migration_config = MigrationConfig::from_str(&config.database_url)?;
    migrations::runner().run_async(&mut migration_config).await?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.database_url)
        .await?;

    // repositories
    let room_repository = Arc::new(RoomRepository::new(pool.clone()));
    let user_repository = Arc::new(UserRepository::new(pool));

    // API
    let api = Api {
        room_service: RoomService {
            room_repository,
            user_service: UserService { user_repository },
        },
    };

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, router(api)).await?;
    Ok(())
}

fn router(api: Api) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rooms", get(list_rooms).post(create_room))
        .route("/rooms/{room_id}", get(get_room))
        .layer(Extension(api))
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

async fn create_room(
    Extension(api): Extension<Api>,
    Json(payload): Json<CreateRoomRequest>,
) -> impl IntoResponse {
    match api.create_room(payload).await {
        Ok(room) => (StatusCode::CREATED, Json(room)).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

async fn list_rooms(Extension(api): Extension<Api>) -> impl IntoResponse {
    match api.list_rooms().await {
        Ok(rooms) => (StatusCode::OK, Json(rooms)).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

async fn get_room(
    Extension(api): Extension<Api>,
    Path(room_id): Path<Uuid>,
) -> impl IntoResponse {
    match api.get_room(room_id).await {
        Ok(room) => (StatusCode::OK, Json(room)).into_response(),
        Err(e) => report_into_response(e).into_response(),
    }
}

/// Known errors keep their status and message. Anything else is an opaque 500.
fn report_into_response(e: eyre::Report) -> (StatusCode, String) {
    error!("Error occurred: {:?}", e);
    match e.downcast::<Error>() {
        Ok(error) => error.into_response_tuple(),
        Err(_) => (StatusCode::INTERNAL_SERVER_ERROR, "".to_string()),
    }
}
