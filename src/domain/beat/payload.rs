//! The JSON body posted to the service-beat endpoint.

use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use serde::Serialize;

use super::{BeatRequest, BeatTemplate, ServiceAddress};
use crate::domain::foundation::Timestamp;

/// Length of the synthesized device-serial and ticket tokens.
pub const TOKEN_DIGITS: usize = 10;

/// Placeholder identifiers the remote API requires but QA beats don't have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTokens {
    pub device_serial: String,
    pub ticket_reference: String,
}

impl PlaceholderTokens {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            device_serial: random_digits(rng, TOKEN_DIGITS),
            ticket_reference: random_digits(rng, TOKEN_DIGITS),
        }
    }
}

/// Draws `len` decimal digits, each uniformly from 0-9.
pub fn random_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    let digit = Uniform::from(0u32..10);
    (0..len)
        .map(|_| char::from_digit(digit.sample(rng), 10).unwrap_or('0'))
        .collect()
}

/// Beat creation body in the remote API's shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeatPayload {
    pub reference_type: String,
    pub reference_value: String,
    pub priority: String,
    pub emp_code: String,
    pub tags: Vec<String>,
    pub tasks: String,
    pub reason_for_service: String,
    pub device_serial_number: String,
    pub freshdesk_ticket_number: String,
    pub product: String,
    pub type_of_product_model: String,
    pub language_of_product: String,
    #[serde(rename = "created_at")]
    pub created_at: String,
    pub address: ServiceAddress,
}

impl BeatPayload {
    pub fn assemble(
        request: &BeatRequest,
        template: &BeatTemplate,
        tokens: PlaceholderTokens,
        created_at: Timestamp,
    ) -> Self {
        Self {
            reference_type: template.reference_type.clone(),
            reference_value: request.mid().to_string(),
            priority: template.priority.clone(),
            emp_code: request.ecode().to_string(),
            tags: vec![request.tag().to_string()],
            tasks: template.tasks.clone(),
            reason_for_service: template.reason_for_service.clone(),
            device_serial_number: tokens.device_serial,
            freshdesk_ticket_number: tokens.ticket_reference,
            product: template.product.clone(),
            type_of_product_model: template.product_model.clone(),
            language_of_product: template.language.clone(),
            created_at: created_at.beat_format(),
            address: template.address.clone(),
        }
    }
}
