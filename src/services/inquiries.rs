use serde::Serialize;

use crate::forms::inquiry::InquiryForm;
use crate::repository::{CategoryListQuery, CategoryReader, InquiryWriter, ProductReader};
use crate::services::{NavCategory, ServiceError, ServiceResult, build_nav};

/// Minimal product context shown above the inquiry form when the visitor
/// arrived from a product page.
#[derive(Debug, Serialize)]
pub struct InquiryProductView {
    pub id: i64,
    pub title: String,
    pub model_code: String,
}

/// Data required to render the inquiry form page.
pub struct InquiryPageData {
    pub nav: Vec<NavCategory>,
    pub product: Option<InquiryProductView>,
}

/// Loads the inquiry form page. An unknown product slug in the preselect
/// parameter is not an error; the form simply renders without a product.
pub async fn load_inquiry_page<R>(
    repo: &R,
    product_slug: Option<&str>,
) -> ServiceResult<InquiryPageData>
where
    R: CategoryReader + ProductReader + ?Sized,
{
    let categories = repo.list_categories(CategoryListQuery::new()).await?;

    let product = match product_slug {
        Some(slug) => repo.get_product_by_slug(slug).await?.map(|product| {
            InquiryProductView {
                id: product.id,
                title: product.title,
                model_code: product.model_code,
            }
        }),
        None => None,
    };

    Ok(InquiryPageData {
        nav: build_nav(&categories),
        product,
    })
}

/// Outcome of a successful inquiry submission.
pub struct InquiryOutcome {
    /// Confirmation shown to the visitor as a flash message.
    pub message: String,
    /// Location the browser is sent to after the POST.
    pub redirect_to: String,
}

/// Validates and stores one inquiry submission.
pub async fn submit_inquiry<R>(repo: &R, form: InquiryForm) -> ServiceResult<InquiryOutcome>
where
    R: InquiryWriter + ?Sized,
{
    let inquiry = form
        .into_new_inquiry()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_inquiry(&inquiry).await?;

    Ok(InquiryOutcome {
        message: "Cererea ta a fost trimisă. Te vom contacta în cel mai scurt timp.".to_string(),
        redirect_to: "/".to_string(),
    })
}
