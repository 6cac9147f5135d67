use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::inquiry::NewInquiry;

/// Maximum allowed length for the visitor's name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Maximum allowed length for the phone number.
const PHONE_MAX_LEN: usize = 32;
const PHONE_MAX_LEN_VALIDATOR: u64 = PHONE_MAX_LEN as u64;

/// Maximum allowed length for the free-form message.
const MESSAGE_MAX_LEN: usize = 4096;
const MESSAGE_MAX_LEN_VALIDATOR: u64 = MESSAGE_MAX_LEN as u64;

/// Result type returned by the inquiry form helpers.
pub type InquiryFormResult<T> = Result<T, InquiryFormError>;

/// Errors that can occur while processing the inquiry form.
#[derive(Debug, Error)]
pub enum InquiryFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("name cannot be empty")]
    EmptyName,
    /// The provided phone number is empty after sanitization.
    #[error("phone number cannot be empty")]
    EmptyPhone,
    /// Supplied identifier field could not be parsed.
    #[error("invalid {field} `{value}`")]
    InvalidIdentifier { field: &'static str, value: String },
}

/// Form payload emitted when submitting the inquiry form.
#[derive(Debug, Deserialize, Validate)]
pub struct InquiryForm {
    /// Full name entered by the visitor.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Contact email.
    #[validate(email)]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, max = PHONE_MAX_LEN_VALIDATOR))]
    pub phone: String,
    /// Optional free-form message.
    #[validate(length(max = MESSAGE_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub message: Option<String>,
    /// Identifier of the product the visitor is asking about, in string
    /// form as submitted by the hidden form field.
    #[serde(default)]
    pub product_id: Option<String>,
}

impl InquiryForm {
    /// Validates and sanitizes the payload into a domain `NewInquiry`.
    pub fn into_new_inquiry(self) -> InquiryFormResult<NewInquiry> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(InquiryFormError::EmptyName);
        }

        let phone = sanitize_inline_text(&self.phone);
        if phone.is_empty() {
            return Err(InquiryFormError::EmptyPhone);
        }

        let email = self.email.trim().to_string();

        let message = self
            .message
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty());

        let product = parse_optional_i64(self.product_id, "product")?;

        let mut inquiry = NewInquiry::new(name, email, phone);
        if let Some(message) = message {
            inquiry = inquiry.with_message(message);
        }
        if let Some(product) = product {
            inquiry = inquiry.with_product(product);
        }

        Ok(inquiry)
    }
}

fn parse_optional_i64(
    value: Option<String>,
    field: &'static str,
) -> InquiryFormResult<Option<i64>> {
    match value {
        None => Ok(None),
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                match trimmed.parse::<i64>() {
                    Ok(parsed) if parsed > 0 => Ok(Some(parsed)),
                    Ok(_) => Ok(None),
                    Err(_) => Err(InquiryFormError::InvalidIdentifier {
                        field,
                        value: trimmed.to_string(),
                    }),
                }
            }
        }
    }
}

fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

fn sanitize_multiline_text(input: &str) -> String {
    let mut lines: Vec<String> = input.lines().map(sanitize_inline_text).collect();

    while matches!(lines.first(), Some(line) if line.is_empty()) {
        lines.remove(0);
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        return String::new();
    }

    let mut result = Vec::with_capacity(lines.len());
    let mut previous_empty = false;
    for line in lines {
        let is_empty = line.is_empty();
        if is_empty {
            if previous_empty {
                continue;
            }
            previous_empty = true;
            result.push(String::new());
        } else {
            previous_empty = false;
            result.push(line);
        }
    }

    result.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inquiry_form_converts_successfully() {
        let form = InquiryForm {
            name: "  Ana   Popescu ".to_string(),
            email: " ana@example.com ".to_string(),
            phone: " 0722 123 456 ".to_string(),
            message: Some(" First line.\n\n Second line.  ".to_string()),
            product_id: Some(" 7 ".to_string()),
        };

        let inquiry = form.into_new_inquiry().expect("expected success");

        assert_eq!(inquiry.name, "Ana Popescu");
        assert_eq!(inquiry.email, "ana@example.com");
        assert_eq!(inquiry.phone, "0722 123 456");
        assert_eq!(inquiry.message, "First line.\n\nSecond line.");
        assert_eq!(inquiry.product, Some(7));
    }

    #[test]
    fn inquiry_form_rejects_empty_name() {
        let form = InquiryForm {
            name: "   ".to_string(),
            email: "ana@example.com".to_string(),
            phone: "0722123456".to_string(),
            message: None,
            product_id: None,
        };

        let result = form.into_new_inquiry();

        assert!(matches!(result, Err(InquiryFormError::EmptyName)));
    }

    #[test]
    fn inquiry_form_rejects_invalid_email() {
        let form = InquiryForm {
            name: "Ana".to_string(),
            email: "not-an-email".to_string(),
            phone: "0722123456".to_string(),
            message: None,
            product_id: None,
        };

        let result = form.into_new_inquiry();

        assert!(matches!(result, Err(InquiryFormError::Validation(_))));
    }

    #[test]
    fn inquiry_form_rejects_missing_phone() {
        let form = InquiryForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: String::new(),
            message: None,
            product_id: None,
        };

        let result = form.into_new_inquiry();

        assert!(matches!(result, Err(InquiryFormError::Validation(_))));
    }

    #[test]
    fn inquiry_form_rejects_invalid_product_id() {
        let form = InquiryForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "0722123456".to_string(),
            message: None,
            product_id: Some("abc".to_string()),
        };

        let result = form.into_new_inquiry();

        assert!(matches!(
            result,
            Err(InquiryFormError::InvalidIdentifier { field, value })
                if field == "product" && value == "abc"
        ));
    }

    #[test]
    fn inquiry_form_drops_empty_message_and_blank_product() {
        let form = InquiryForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "0722123456".to_string(),
            message: Some("   ".to_string()),
            product_id: Some("  ".to_string()),
        };

        let inquiry = form.into_new_inquiry().expect("expected success");

        assert_eq!(inquiry.message, "");
        assert!(inquiry.product.is_none());
    }
}
