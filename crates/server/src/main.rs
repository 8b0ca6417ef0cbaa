// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;
use wod_book_api::{
    ApiError, BookClassRequest, BookClassResponse, CancelBookingRequest, CancelBookingResponse,
    CancelClassResponse, CreateClassRequest, CreateClassResponse, ListClassesResponse,
    ListMemberBookingsResponse, LogNotifier, RegisterMemberRequest, RegisterMemberResponse,
    book_class, cancel_booking, cancel_class, create_class, list_member_bookings,
    list_upcoming_classes, register_member,
};
use wod_book_persistence::Persistence;

/// Default number of classes returned by the upcoming-classes listing.
const DEFAULT_CLASS_LIMIT: i64 = 20;

/// WOD Book Server - HTTP server for the WOD Book class-booking system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The persistence layer is wrapped in a Mutex: handlers serialize on
/// the single connection, on top of the per-operation transactional
/// guarantee.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for members, classes, and bookings.
    persistence: Arc<Mutex<Persistence>>,
    /// The seat-available notification sink.
    notifier: LogNotifier,
}

/// API request for booking a class.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct BookClassApiRequest {
    /// The member making the booking.
    member_id: i64,
    /// The class to book.
    class_id: i64,
}

/// API request for cancelling a booking.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelBookingApiRequest {
    /// The member requesting the cancellation.
    member_id: i64,
}

/// API request for creating a class.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateClassApiRequest {
    /// Display name.
    name: String,
    /// Optional description.
    description: Option<String>,
    /// Class start time (RFC 3339).
    starts_at: DateTime<Utc>,
    /// Class duration in minutes.
    duration_minutes: i32,
    /// Maximum number of confirmed participants.
    max_participants: i32,
}

/// API request for registering a member.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterMemberApiRequest {
    /// The member's name.
    name: String,
    /// The member's email address.
    email: String,
    /// Membership plan label, if any.
    membership_type: Option<String>,
    /// When a time-limited membership expires (RFC 3339).
    membership_expires_at: Option<DateTime<Utc>>,
}

/// Query parameters for the upcoming-classes listing.
#[derive(Debug, Deserialize)]
struct ListClassesQuery {
    /// Maximum number of classes to return.
    limit: Option<i64>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::BookingRejected { .. } => Self {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            },
            ApiError::Forbidden { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Handler for GET `/classes` endpoint.
///
/// Lists upcoming classes with their current availability.
async fn handle_list_classes(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListClassesQuery>,
) -> Result<Json<ListClassesResponse>, HttpError> {
    let limit: i64 = query.limit.unwrap_or(DEFAULT_CLASS_LIMIT);

    let mut persistence = app_state.persistence.lock().await;
    let response: ListClassesResponse =
        list_upcoming_classes(&mut persistence, Utc::now(), limit)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/classes` endpoint.
///
/// Creates a new class.
async fn handle_create_class(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateClassApiRequest>,
) -> Result<Json<CreateClassResponse>, HttpError> {
    info!(name = %req.name, starts_at = %req.starts_at, "Handling create_class request");

    let request: CreateClassRequest = CreateClassRequest {
        name: req.name,
        description: req.description,
        starts_at: req.starts_at,
        duration_minutes: req.duration_minutes,
        max_participants: req.max_participants,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateClassResponse = create_class(&mut persistence, &request, Utc::now())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/classes/{class_id}/cancel` endpoint.
///
/// Marks a class as cancelled. Existing bookings are left untouched.
async fn handle_cancel_class(
    AxumState(app_state): AxumState<AppState>,
    Path(class_id): Path<i64>,
) -> Result<Json<CancelClassResponse>, HttpError> {
    info!(class_id, "Handling cancel_class request");

    let mut persistence = app_state.persistence.lock().await;
    let response: CancelClassResponse = cancel_class(&mut persistence, class_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/members` endpoint.
///
/// Registers a new member.
async fn handle_register_member(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterMemberApiRequest>,
) -> Result<Json<RegisterMemberResponse>, HttpError> {
    info!(name = %req.name, "Handling register_member request");

    let request: RegisterMemberRequest = RegisterMemberRequest {
        name: req.name,
        email: req.email,
        membership_type: req.membership_type,
        membership_expires_at: req.membership_expires_at,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: RegisterMemberResponse =
        register_member(&mut persistence, &request, Utc::now())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/members/{member_id}/bookings` endpoint.
///
/// Lists a member's bookings for upcoming classes.
async fn handle_list_member_bookings(
    AxumState(app_state): AxumState<AppState>,
    Path(member_id): Path<i64>,
) -> Result<Json<ListMemberBookingsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ListMemberBookingsResponse =
        list_member_bookings(&mut persistence, member_id, Utc::now())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings` endpoint.
///
/// Books a class for a member.
async fn handle_book_class(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<BookClassApiRequest>,
) -> Result<Json<BookClassResponse>, HttpError> {
    info!(
        member_id = req.member_id,
        class_id = req.class_id,
        "Handling book_class request"
    );

    let request: BookClassRequest = BookClassRequest {
        member_id: req.member_id,
        class_id: req.class_id,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: BookClassResponse = book_class(&mut persistence, &request, Utc::now())?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/bookings/{booking_id}/cancel` endpoint.
///
/// Cancels a booking; a freed confirmed seat promotes the oldest
/// waiting-list booking and notifies that member.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    Path(booking_id): Path<i64>,
    Json(req): Json<CancelBookingApiRequest>,
) -> Result<Json<CancelBookingResponse>, HttpError> {
    info!(
        booking_id,
        member_id = req.member_id,
        "Handling cancel_booking request"
    );

    let request: CancelBookingRequest = CancelBookingRequest {
        booking_id,
        member_id: req.member_id,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: CancelBookingResponse = cancel_booking(
        &mut persistence,
        &app_state.notifier,
        &request,
        Utc::now(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/classes", get(handle_list_classes))
        .route("/classes", post(handle_create_class))
        .route("/classes/{class_id}/cancel", post(handle_cancel_class))
        .route("/members", post(handle_register_member))
        .route(
            "/members/{member_id}/bookings",
            get(handle_list_member_bookings),
        )
        .route("/bookings", post(handle_book_class))
        .route("/bookings/{booking_id}/cancel", post(handle_cancel_booking))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing WOD Book Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        notifier: LogNotifier,
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
