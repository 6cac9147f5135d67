use actix_web::http::header;
use actix_web::{HttpResponse, web};
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use serde::Serialize;
use tera::{Context, Tera};

pub mod inquiries;
pub mod main;
pub mod products;

/// Flash message as exposed to the templates.
#[derive(Debug, Serialize)]
struct FlashMessageView {
    level: &'static str,
    content: String,
}

/// Base template context: flash messages and the marker used to highlight
/// the active navigation entry.
pub fn base_context(flash_messages: &IncomingFlashMessages, active_page: &str) -> Context {
    let messages: Vec<FlashMessageView> = flash_messages
        .iter()
        .map(|message| FlashMessageView {
            level: match message.level() {
                Level::Success => "success",
                Level::Warning => "warning",
                Level::Error => "error",
                _ => "info",
            },
            content: message.content().to_string(),
        })
        .collect();

    let mut context = Context::new();
    context.insert("flash_messages", &messages);
    context.insert("active_page", active_page);
    context
}

/// Renders `template` with `context`, answering 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render {template}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Redirects the browser to `location` with a 303 so a POST lands on a
/// GET afterwards.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders the 404 page.
pub fn render_not_found(tera: &Tera) -> HttpResponse {
    let mut context = Context::new();
    context.insert("flash_messages", &Vec::<FlashMessageView>::new());
    context.insert("active_page", "");
    context.insert("nav", &Vec::<crate::services::NavCategory>::new());

    match tera.render("not_found.html", &context) {
        Ok(body) => HttpResponse::NotFound()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render not_found.html: {err}");
            HttpResponse::NotFound().finish()
        }
    }
}

/// Fallback handler for every path no route claims.
pub async fn default_not_found(tera: web::Data<Tera>) -> HttpResponse {
    render_not_found(&tera)
}
