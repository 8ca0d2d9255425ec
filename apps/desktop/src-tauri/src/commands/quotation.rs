//! # Quotation Commands
//!
//! Tauri commands for editing the document header, client record, and terms.
//!
//! ## Editing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every input widget maps to exactly one command:                       │
//! │                                                                         │
//! │  N° Cotización input ───────► set_quotation_number                     │
//! │  Date picker ───────────────► set_quotation_date                       │
//! │  Client inputs (4) ─────────► set_client_field(field, value)           │
//! │  Condition inputs (3) ──────► set_terms_field(field, value)            │
//! │  Validity input ────────────► set_validity_days (text, coerced)        │
//! │  Authorized-by input ───────► set_authorized_by                        │
//! │                                                                         │
//! │  Every command returns the full new document plus recomputed totals;   │
//! │  the frontend re-renders from the response instead of patching its     │
//! │  own copy. Totals are derived on every response, never cached.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::debug;

use crate::state::QuotationState;
use cotiza_core::{ClientField, Quotation, QuotationTotals, TermsField};

/// Document response: the full state plus derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationResponse {
    pub quotation: Quotation,
    pub totals: QuotationTotals,
}

impl From<&Quotation> for QuotationResponse {
    fn from(quotation: &Quotation) -> Self {
        QuotationResponse {
            totals: QuotationTotals::from(quotation),
            quotation: quotation.clone(),
        }
    }
}

/// Gets the current document.
///
/// Called once when the form mounts; afterwards the frontend stays in sync
/// through the responses of the mutating commands.
#[tauri::command]
pub fn get_quotation(quotation: State<'_, QuotationState>) -> QuotationResponse {
    debug!("get_quotation command");
    quotation.with_document(QuotationResponse::from)
}

/// Replaces the quotation number.
#[tauri::command]
pub fn set_quotation_number(
    quotation: State<'_, QuotationState>,
    number: String,
) -> QuotationResponse {
    debug!(number = %number, "set_quotation_number command");
    quotation.with_document_mut(|q| {
        q.set_number(number);
        QuotationResponse::from(&*q)
    })
}

/// Replaces the emission date (ISO text from the date widget).
#[tauri::command]
pub fn set_quotation_date(
    quotation: State<'_, QuotationState>,
    date: String,
) -> QuotationResponse {
    debug!(date = %date, "set_quotation_date command");
    quotation.with_document_mut(|q| {
        q.set_date(date);
        QuotationResponse::from(&*q)
    })
}

/// Replaces the validity period.
///
/// Takes the raw input text; unparsable or negative values coerce to 0,
/// mirroring the numeric item fields.
#[tauri::command]
pub fn set_validity_days(
    quotation: State<'_, QuotationState>,
    value: String,
) -> QuotationResponse {
    debug!(value = %value, "set_validity_days command");
    quotation.with_document_mut(|q| {
        q.set_validity_days(&value);
        QuotationResponse::from(&*q)
    })
}

/// Replaces the signatory name.
#[tauri::command]
pub fn set_authorized_by(
    quotation: State<'_, QuotationState>,
    name: String,
) -> QuotationResponse {
    debug!(name = %name, "set_authorized_by command");
    quotation.with_document_mut(|q| {
        q.set_authorized_by(name);
        QuotationResponse::from(&*q)
    })
}

/// Replaces one field of the client record; siblings are untouched.
#[tauri::command]
pub fn set_client_field(
    quotation: State<'_, QuotationState>,
    field: ClientField,
    value: String,
) -> QuotationResponse {
    debug!(?field, "set_client_field command");
    quotation.with_document_mut(|q| {
        q.set_client_field(field, value);
        QuotationResponse::from(&*q)
    })
}

/// Replaces one field of the terms record; siblings are untouched.
#[tauri::command]
pub fn set_terms_field(
    quotation: State<'_, QuotationState>,
    field: TermsField,
    value: String,
) -> QuotationResponse {
    debug!(?field, "set_terms_field command");
    quotation.with_document_mut(|q| {
        q.set_terms_field(field, value);
        QuotationResponse::from(&*q)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_camel_case_with_raw_totals() {
        let response = QuotationResponse::from(&Quotation::seed());
        let json = serde_json::to_value(&response).unwrap();

        // The IPC contract: camelCase keys, totals as raw integers
        assert_eq!(json["quotation"]["number"], "11-2025");
        assert_eq!(json["quotation"]["validityDays"], 5);
        assert_eq!(json["quotation"]["items"][1]["unitPrice"], 27000);
        assert_eq!(json["totals"]["subtotal"], 5_400_000);
        assert_eq!(json["totals"]["iva"], 1_026_000);
        assert_eq!(json["totals"]["total"], 6_426_000);
    }

    #[test]
    fn test_response_carries_fresh_totals() {
        let mut q = Quotation::seed();
        q.set_item_field(0, cotiza_core::ItemField::Quantity, "0").unwrap();

        let response = QuotationResponse::from(&q);
        assert_eq!(response.quotation.items[0].quantity, 0);
        // 100×27000 + 100×5000 = 3.200.000
        assert_eq!(response.totals.subtotal.clp(), 3_200_000);
        assert_eq!(
            response.totals.total.clp(),
            response.totals.subtotal.clp() + response.totals.iva.clp()
        );
    }
}
