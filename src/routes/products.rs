use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::repository::HttpRepository;
use crate::routes::{base_context, render_not_found, render_template};
use crate::services::ServiceError;
use crate::services::products::{
    CategoryPageQuery, load_category_page, load_product_page, load_products_page,
};

#[get("/products")]
pub async fn show_products(
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match load_products_page(repo.get_ref()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("nav", &data.nav);
            context.insert("categories", &data.categories);
            render_template(&tera, "products/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to load the catalog page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{category}")]
pub async fn show_category(
    path: web::Path<String>,
    params: web::Query<CategoryPageQuery>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let slug = path.into_inner();

    match load_category_page(repo.get_ref(), &slug, params.into_inner()).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, &slug);
            context.insert("nav", &data.nav);
            context.insert("category", &data.category);
            context.insert("breadcrumb", &data.breadcrumb);
            context.insert("subcategories", &data.subcategories);
            context.insert("products", &data.products);
            context.insert("total", &data.total);
            context.insert("filter_groups", &data.filter_groups);
            context.insert("sort_options", &data.sort_options);
            context.insert("active_filter_count", &data.active_filter_count);
            context.insert("selection", &data.selection);
            context.insert("reset_url", &data.reset_url);
            render_template(&tera, "products/category.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load category {slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/products/{category}/{product}")]
pub async fn show_product(
    path: web::Path<(String, String)>,
    repo: web::Data<HttpRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    // The category segment is routing context only; the product's own
    // category reference drives the breadcrumb.
    let (_, product_slug) = path.into_inner();

    match load_product_page(repo.get_ref(), &product_slug).await {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("nav", &data.nav);
            context.insert("product", &data.product);
            context.insert("breadcrumb", &data.breadcrumb);
            render_template(&tera, "products/detail.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load product {product_slug}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
