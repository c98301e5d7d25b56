//! Server error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hx_views::ViewError;

/// Error returned by request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Fragment resolution or rendering failed.
    #[error("{0}")]
    View(#[from] ViewError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match self {
            Self::View(err) => {
                tracing::error!(error = %err, "view rendering failed");
                // Nothing has been written yet; the whole response is
                // replaced with a diagnostic naming the missing fragment.
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use hx_views::ViewError;

    use super::*;

    #[test]
    fn test_view_error_maps_to_500_with_fragment_names() {
        let err = ServerError::View(ViewError::NotFound {
            name: "row".to_owned(),
            attempted: vec!["users/row.html".to_owned()],
        });

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
