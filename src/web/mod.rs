//! HTTP surface
//!
//! | route | method | purpose |
//! |---|---|---|
//! | `/` | GET | generation form |
//! | `/` | POST | generate three headlines, redirect to `/result` |
//! | `/result` | GET | form plus the confirmation message |
//! | `/latest_topics` | GET | recent rows, newest first |
//! | `/gdn` | GET, POST | static page |

mod handlers;
pub mod pages;

use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::generator::HeadlineGenerator;
use crate::selector::SheetRouter;

/// Collaborators shared by every worker
pub struct AppState {
    pub generator: HeadlineGenerator,
    pub router: SheetRouter,
    pub recent_limit: usize,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/", web::post().to(handlers::submit))
        .route("/result", web::get().to(handlers::result))
        .route("/latest_topics", web::get().to(handlers::latest_topics))
        .route("/gdn", web::get().to(handlers::gdn))
        .route("/gdn", web::post().to(handlers::gdn));
}

pub async fn run_server(state: AppState, bind: &str) -> std::io::Result<()> {
    let data = web::Data::new(state);
    info!(bind = bind, "Starting headline server");

    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(bind)?
        .run()
        .await
}
