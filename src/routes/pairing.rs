use crate::core::{build_pairing_prompt, LookupPlan, Resolver};
use crate::models::{HealthResponse, PairingForm};
use crate::routes::pages;
use crate::services::{GenerationClient, GeoIpClient};
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse, Responder};
use chrono::Datelike;
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub geoip: Arc<GeoIpClient>,
    pub generation: Arc<GenerationClient>,
    pub resolver: Resolver,
    pub geolocation_enabled: bool,
}

/// Configure the pairing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/", web::post().to(submit))
        .route("/health", web::get().to(health_check));
}

/// Render the empty form
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::render_index(None, None))
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let generation_up = state.generation.health().await;

    let status = if generation_up { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Handle a form submission
///
/// POST /
///
/// Resolves the season and region (geolocating when the form leaves them
/// blank), builds the prompt and renders the generated pairing text. A
/// generation failure renders an error banner instead of failing the
/// request.
async fn submit(state: web::Data<AppState>, form: web::Form<PairingForm>) -> impl Responder {
    if let Err(errors) = form.validate() {
        tracing::info!("Validation failed for pairing form: {}", errors);
        return HttpResponse::BadRequest()
            .content_type(ContentType::html())
            .body(pages::render_index(
                None,
                Some("One of the form fields is too long. Please shorten it and try again."),
            ));
    }

    let season_input = form.season_input();
    let location_input = form.location_input();

    // Collected per submission for the request log; the prompt template
    // does not use them.
    let preferences = form.preferences();
    if !preferences.is_empty() {
        tracing::debug!("Preferences submitted: {:?}", preferences);
    }

    let lookup = match state.resolver.plan(season_input, location_input) {
        LookupPlan::Skip => None,
        _ if !state.geolocation_enabled => {
            tracing::debug!("Geolocation disabled, using configured defaults");
            None
        }
        plan => match state.geoip.lookup().await {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(
                    "Geolocation failed ({:?}), falling back to configured defaults: {}",
                    plan,
                    e
                );
                None
            }
        },
    };

    let month = chrono::Utc::now().month();
    let resolution = state
        .resolver
        .resolve(season_input, location_input, lookup.as_ref(), month);

    tracing::info!(
        "Resolved pairing request: season={}, region={}",
        resolution.season,
        resolution.region
    );

    let prompt = build_pairing_prompt(resolution.season, &resolution.region);

    match state.generation.generate(&prompt).await {
        Ok(result) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(pages::render_index(Some(&result.response_text), None)),
        Err(e) => {
            tracing::error!("Generation request failed: {}", e);
            HttpResponse::BadGateway()
                .content_type(ContentType::html())
                .body(pages::render_index(
                    None,
                    Some("The pairing service is unavailable right now. Please try again later."),
                ))
        }
    }
}
