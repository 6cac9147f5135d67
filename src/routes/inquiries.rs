use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::forms::inquiry::InquiryForm;
use crate::repository::HttpRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::inquiries::{load_inquiry_page, submit_inquiry as submit_inquiry_service};
use crate::services::ServiceError;

/// Query parameters accepted by the inquiry form page.
#[derive(Debug, Default, Deserialize)]
pub struct InquiryQuery {
    /// Slug of the product the visitor is asking about.
    pub product: Option<String>,
}

#[get("/inquiry")]
pub async fn show_inquiry_form(
    params: web::Query<InquiryQuery>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_inquiry_page(repo.get_ref(), params.product.as_deref()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "inquiry");
            context.insert("nav", &data.nav);
            context.insert("product", &data.product);
            render_template(&tera, "inquiries/new.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the inquiry page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/inquiry")]
pub async fn submit_inquiry(
    repo: web::Data<HttpRepository>,
    web::Form(form): web::Form<InquiryForm>,
) -> impl Responder {
    match submit_inquiry_service(repo.get_ref(), form).await {
        Ok(outcome) => {
            FlashMessage::success(outcome.message).send();
            redirect(&outcome.redirect_to)
        }
        Err(ServiceError::Form(message)) => {
            FlashMessage::error(message).send();
            redirect("/inquiry")
        }
        Err(err) => {
            log::error!("Failed to submit an inquiry: {err}");
            FlashMessage::error("Nu am putut trimite cererea. Te rugăm să încerci din nou.").send();
            redirect("/inquiry")
        }
    }
}
