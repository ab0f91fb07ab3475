use actix_web::{web, App, HttpResponse, HttpServer, Result};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct CompletionRequest {
    model: String,
    prompt: String,
    #[serde(default)]
    max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(default)]
    max_tokens: Option<u32>,
}

const MOCK_HEADLINES: &[&str] = &[
    "Tired Of Waiting? Relief Starts Today",
    "Is This The Fix You've Been Looking For?",
    "Don't Miss What Everyone Is Talking About",
];

/// Canned answer chosen by prompt kind
fn canned_reply(prompt: &str) -> String {
    if prompt.starts_with("What is an appropriate emoji") {
        "✨".to_string()
    } else if prompt.starts_with("Describe the idea behind the topic") {
        "A quick look at why this topic matters, who it helps, and the simple first step \
         anyone can take today to see a real difference in how they feel and live every day."
            .to_string()
    } else {
        let idx = prompt.len() % MOCK_HEADLINES.len();
        MOCK_HEADLINES[idx].to_string()
    }
}

async fn completions(request: web::Json<CompletionRequest>) -> Result<HttpResponse> {
    let text = canned_reply(&request.prompt);
    Ok(HttpResponse::Ok().json(json!({
        "id": "cmpl-mock",
        "object": "text_completion",
        "model": request.model,
        "choices": [{ "index": 0, "text": format!("\n\n{}", text), "finish_reason": "stop" }],
        "usage": { "max_tokens": request.max_tokens }
    })))
}

async fn chat_completions(request: web::Json<ChatRequest>) -> Result<HttpResponse> {
    let prompt = request
        .messages
        .last()
        .map(|m| m.content.as_str())
        .unwrap_or_default();
    let text = canned_reply(prompt);
    Ok(HttpResponse::Ok().json(json!({
        "id": "chatcmpl-mock",
        "object": "chat.completion",
        "model": request.model,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": text },
            "finish_reason": "stop"
        }],
        "usage": { "max_tokens": request.max_tokens }
    })))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let bind = std::env::var("MOCK_COMPLETION_BIND").unwrap_or_else(|_| "127.0.0.1:8089".to_string());

    println!("Starting mock completion API on http://{}", bind);
    println!("Point the generator at it with:");
    println!("   OPENAI_BASE_URL=http://{} OPENAI_KEY=mock HEADLINER_SHEETS_BACKEND=memory headliner serve", bind);

    HttpServer::new(|| {
        App::new()
            .route("/v1/completions", web::post().to(completions))
            .route("/v1/chat/completions", web::post().to(chat_completions))
            .route(
                "/",
                web::get().to(|| async { HttpResponse::Ok().body("Headliner mock completion API") }),
            )
    })
    .bind(bind.as_str())?
    .run()
    .await
}
