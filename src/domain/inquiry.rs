use serde::Serialize;

/// Payload written to the content API when a visitor submits the inquiry
/// form. The storefront only ever creates inquiries; reading and managing
/// them happens in the content-management backend.
#[derive(Debug, Clone, Serialize)]
pub struct NewInquiry {
    /// Full name entered by the visitor.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Optional free-form message; sent as an empty string when absent.
    pub message: String,
    /// Identifier of the product the inquiry is about, if any.
    pub product: Option<i64>,
}

impl NewInquiry {
    /// Build an inquiry payload with the required contact fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: String::new(),
            product: None,
        }
    }

    /// Attach a message to the payload.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the product the visitor is asking about.
    pub fn with_product(mut self, product_id: i64) -> Self {
        self.product = Some(product_id);
        self
    }
}
