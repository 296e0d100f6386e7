//! HTTP API endpoint handlers.
//!
//! Handlers only translate between HTTP and the use cases; the status code
//! for each outcome is decided in [`error_response`].

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    infrastructure::dto::http::{HotelDetailDto, HotelDto, PaymentRequiredDto},
    ui::{identity::AuthenticatedUser, state::AppState},
    usecase::{GetHotelDetailUseCase, HotelError, ListHotelsUseCase},
};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get list of hotels
pub async fn list_hotels(State(state): State<Arc<AppState>>, user: AuthenticatedUser) -> Response {
    let usecase = ListHotelsUseCase::new(
        state.enrollment_repository.clone(),
        state.ticket_repository.clone(),
        state.hotel_repository.clone(),
    );

    match usecase.execute(user.id()).await {
        Ok(hotels) => {
            let body: Vec<HotelDto> = hotels.into_iter().map(HotelDto::from).collect();
            Json(body).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get hotel detail with rooms by ID
pub async fn get_hotel_detail(
    State(state): State<Arc<AppState>>,
    user: AuthenticatedUser,
    hotel_id: Result<Path<String>, PathRejection>,
) -> Response {
    // A segment that does not decode to UTF-8 is an unparsable id like any other
    let Path(hotel_id) = match hotel_id {
        Ok(path) => path,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejecting hotel id segment");
            return StatusCode::NOT_FOUND.into_response();
        }
    };

    let usecase = GetHotelDetailUseCase::new(
        state.enrollment_repository.clone(),
        state.ticket_repository.clone(),
        state.hotel_repository.clone(),
    );

    match usecase.execute(user.id(), &hotel_id).await {
        Ok(detail) => Json(HotelDetailDto::from(detail)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Map a use case failure to its HTTP response
fn error_response(error: HotelError) -> Response {
    match error {
        HotelError::NotFound(resource) => {
            tracing::debug!("{} not found", resource);
            StatusCode::NOT_FOUND.into_response()
        }
        HotelError::CannotFindAValidTicketToGetHotel(reason) => (
            StatusCode::PAYMENT_REQUIRED,
            Json(PaymentRequiredDto::new(reason)),
        )
            .into_response(),
        HotelError::Repository(e) => {
            tracing::error!(error = %e, "Repository failure while serving hotels");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{IneligibleReason, RepositoryError},
        usecase::MissingResource,
    };

    #[test]
    fn test_error_response_status_codes() {
        // テスト項目: 失敗の種類ごとにステータスコードが決まる
        let cases = [
            (
                HotelError::NotFound(MissingResource::Enrollment),
                StatusCode::NOT_FOUND,
            ),
            (
                HotelError::NotFound(MissingResource::Hotel),
                StatusCode::NOT_FOUND,
            ),
            (
                HotelError::CannotFindAValidTicketToGetHotel(IneligibleReason::TicketNotPaid),
                StatusCode::PAYMENT_REQUIRED,
            ),
            (
                HotelError::Repository(RepositoryError::Unavailable("down".to_string())),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error_response(error).status(), expected);
        }
    }
}
