
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use lib::service::common_structs::ClassificationStatus;
use lib::service::CommonService;
use lib::utilities::is_blank;
use serde::Deserialize;
use tracing::{info, warn};

use crate::pages;


#[derive(Debug, Deserialize)]
pub struct DetectorForm {
    #[serde(rename = "textToAnalyze", default)]
    pub text_to_analyze: Option<String>,
}


fn build_error_response(status: StatusCode, page: String) -> Response {
    (status, Html(page)).into_response()
}

fn build_success_response(page: String) -> Response {
    (StatusCode::OK, Html(page)).into_response()
}


pub async fn render_index_page() -> Html<String> {
    Html(pages::index_page())
}

pub async fn emotion_detector_route(
    State(service): State<CommonService>,
    form: Result<Form<DetectorForm>, FormRejection>
) -> Response {

    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(%rejection, "Unreadable detector form");
            return build_error_response(StatusCode::BAD_REQUEST, pages::invalid_input_page());
        },
    };

    // Blank input never reaches the emotion service.
    let text = match form.text_to_analyze {
        Some(text) if !is_blank(&text) => text,
        _ => {
            info!("Rejecting blank text");
            return build_error_response(StatusCode::BAD_REQUEST, pages::invalid_input_page());
        },
    };

    let result = service.watson.classify(&text).await;
    info!(status = ?result.status(), "Classified text");

    if result.status() == ClassificationStatus::Unavailable {
        return build_error_response(StatusCode::SERVICE_UNAVAILABLE, pages::unavailable_page());
    }

    let (Some(scores), Some(dominant)) = (result.scores(), result.dominant_emotion()) else {
        return build_error_response(StatusCode::UNPROCESSABLE_ENTITY, pages::processing_error_page());
    };

    info!(dominant_emotion = %dominant, "Rendering emotion scores");
    let mocked = result.status() == ClassificationStatus::Mocked;
    build_success_response(pages::results_page(&text, scores, dominant, mocked))
}
