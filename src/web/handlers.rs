use actix_web::http::header::{self, ContentType};
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use std::time::Instant;

use super::{pages, AppState};
use crate::error::Result;
use crate::generator::GenerationSummary;
use crate::logging::log_request_outcome;
use crate::prompt::{HeadlineRequest, PromptBuilder};
use crate::recent::latest_entries;
use crate::selector::SheetUser;

#[derive(Debug, Deserialize)]
pub struct ResultQuery {
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    pub user: Option<String>,
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body)
}

pub async fn index() -> HttpResponse {
    html(pages::index_page(None))
}

/// Handle a form submission: pick the sheet, generate, redirect to the result page
pub async fn submit(
    state: web::Data<AppState>,
    form: web::Form<HeadlineRequest>,
) -> Result<HttpResponse> {
    let start = Instant::now();
    let request = form.into_inner();

    let result: Result<GenerationSummary> = async {
        let (_, sheet) = state.router.select(&request.user)?;
        let builder = PromptBuilder::from_request(&request);
        state.generator.generate(&builder, sheet).await
    }
    .await;

    log_request_outcome("POST /", start.elapsed().as_millis() as u64, &result);
    let summary = result?;

    let location = format!(
        "/result?description={}",
        urlencoding::encode(&summary.message())
    );
    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish())
}

pub async fn result(query: web::Query<ResultQuery>) -> HttpResponse {
    html(pages::index_page(query.description.as_deref()))
}

pub async fn latest_topics(
    state: web::Data<AppState>,
    query: web::Query<LatestQuery>,
) -> Result<HttpResponse> {
    let start = Instant::now();
    let user = match query.user.as_deref() {
        Some(raw) => raw.parse::<SheetUser>()?,
        None => SheetUser::January,
    };

    let sheet = state.router.sheet_for(user);
    let result = latest_entries(sheet.store().as_ref(), state.recent_limit).await;
    log_request_outcome(
        "GET /latest_topics",
        start.elapsed().as_millis() as u64,
        &result,
    );

    Ok(html(pages::latest_topics_page(user, &result?)))
}

pub async fn gdn() -> HttpResponse {
    html(pages::gdn_page())
}
