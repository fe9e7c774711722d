use axum::Json;
use axum::extract::rejection::FormRejection;
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::ClassifierError;
use crate::application::services::{
    DiabetesObservation, HeartObservation, KidneyObservation,
};
use crate::domain::{Disease, HealthAdvice};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct PredictionResponse {
    pub result: String,
    pub confidence: f32,
    pub current_time: String,
    pub health_advice: HealthAdvice,
    pub disease_type: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[tracing::instrument(skip(state, observation))]
pub async fn diabetes_handler(
    State(state): State<AppState>,
    observation: Result<Form<DiabetesObservation>, FormRejection>,
) -> Response {
    let Form(observation) = match observation {
        Ok(form) => form,
        Err(e) => return invalid_input(&e),
    };
    if let Err(e) = observation.validate() {
        return validation_rejection(&e.to_string());
    }
    respond(&state, Disease::Diabetes, observation.features(), |positive| {
        if positive {
            "The person is predicted to have diabetes"
        } else {
            "The person is predicted to not have diabetes"
        }
    })
    .await
}

#[tracing::instrument(skip(state, observation))]
pub async fn heart_handler(
    State(state): State<AppState>,
    observation: Result<Form<HeartObservation>, FormRejection>,
) -> Response {
    let Form(observation) = match observation {
        Ok(form) => form,
        Err(e) => return invalid_input(&e),
    };
    if let Err(e) = observation.validate() {
        return validation_rejection(&e.to_string());
    }
    respond(&state, Disease::Heart, observation.features(), |positive| {
        if positive {
            "This person is predicted to have heart disease"
        } else {
            "This person is predicted to not have heart disease"
        }
    })
    .await
}

#[tracing::instrument(skip(state, observation))]
pub async fn kidney_handler(
    State(state): State<AppState>,
    observation: Result<Form<KidneyObservation>, FormRejection>,
) -> Response {
    let Form(observation) = match observation {
        Ok(form) => form,
        Err(e) => return invalid_input(&e),
    };
    if let Err(e) = observation.validate() {
        return validation_rejection(&e.to_string());
    }
    respond(&state, Disease::Kidney, observation.features(), |positive| {
        if positive {
            "The person is predicted to have kidney disease"
        } else {
            "The person is predicted to not have kidney disease"
        }
    })
    .await
}

async fn respond(
    state: &AppState,
    disease: Disease,
    features: Vec<f32>,
    result_text: fn(bool) -> &'static str,
) -> Response {
    match state.prediction_service.predict(disease, &features).await {
        Ok(prediction) => {
            tracing::info!(
                disease = disease.as_str(),
                positive = prediction.positive,
                "Prediction complete"
            );
            (
                StatusCode::OK,
                Json(PredictionResponse {
                    result: result_text(prediction.positive).to_string(),
                    confidence: round2(prediction.confidence),
                    current_time: chrono::Local::now()
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string(),
                    health_advice: HealthAdvice::for_outcome(disease, prediction.positive),
                    disease_type: disease.as_str(),
                }),
            )
                .into_response()
        }
        Err(ClassifierError::Unavailable) => {
            tracing::warn!(disease = disease.as_str(), "Prediction requested but no model is loaded");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ErrorResponse {
                    error: format!(
                        "Prediction is currently unavailable for {}. Please try again later.",
                        disease.as_str()
                    ),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(disease = disease.as_str(), error = %e, "Prediction failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("An error occurred: {e}"),
                }),
            )
                .into_response()
        }
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

fn invalid_input(rejection: &FormRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: format!("Invalid input: {rejection}. Please enter numeric values."),
        }),
    )
        .into_response()
}

fn validation_rejection(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
        .into_response()
}
