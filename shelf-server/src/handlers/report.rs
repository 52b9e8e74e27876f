//! Reading goal report download

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use serde::Deserialize;
use shelf_core::report::{render_report, REPORT_FILE_NAME};
use shelf_core::ReadingGoal;

/// Goal values supplied by the client
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub target: Option<u32>,
    pub completed: Option<u32>,
}

impl ReportQuery {
    fn goal(&self) -> ReadingGoal {
        let defaults = ReadingGoal::default();
        ReadingGoal::new(
            self.target.unwrap_or(defaults.target),
            self.completed.unwrap_or(defaults.completed),
        )
    }
}

/// Render the goal report over the books currently being read
pub async fn download_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let books = state.shelf.list().await?;
    let report = render_report(&query.goal(), &books);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        report,
    ))
}
