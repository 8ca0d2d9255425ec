//! # CSV Report
//!
//! Renders the quotation and its derived totals into the delimited report
//! the export button downloads. This is the one external artifact of the
//! system, so its structure is fixed:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GESTIONES Y SERVICIOS MP - COTIZACIÓN          ◄─ letterhead          │
//! │  RUT: 77.968.591-8                                 (constants, never   │
//! │  Antonio Bellet 193, Of. 1210, ...                  from the document) │
//! │                                                                         │
//! │  Cotización N°: 11-2025                         ◄─ header              │
//! │  Fecha: 2025-11-07                                                      │
//! │                                                                         │
//! │  INFORMACIÓN DEL CLIENTE                        ◄─ label,value pairs   │
//! │  Cliente:,Paulina Mujica                                                │
//! │  ...                                                                    │
//! │                                                                         │
//! │  PRODUCTOS Y SERVICIOS                                                  │
//! │  Código,Descripción,Cantidad,Precio Unitario,Total                      │
//! │  A7F3X9Q2,...,100,22000,2200000                 ◄─ raw integers, no    │
//! │  ...                                               currency formatting │
//! │                                                                         │
//! │  Subtotal:,,,,5400000                           ◄─ four empty fields,  │
//! │  IVA (19%):,,,,1026000                             value in the Total  │
//! │  TOTAL:,,,,6426000                                 column              │
//! │                                                                         │
//! │  CONDICIONES                                                            │
//! │  Solicitado por:,... / Validez:,5 días / Autorizado por:,...           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quoting
//! Fields containing the delimiter, a quote, or a line break are quoted per
//! RFC 4180 by the `csv` writer. The original export concatenated strings
//! and produced malformed rows for such values; that was a latent defect,
//! not a contract. Every field without those characters still serializes
//! byte-identically to the historical output.
//!
//! Rendering is a pure function of the document: exporting twice without a
//! mutation in between yields byte-identical text.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ExportError;
use crate::types::Quotation;

// =============================================================================
// Letterhead
// =============================================================================

/// The fixed organization block at the top of the report.
///
/// Not derived from the document. `Default` carries the issuing company's
/// real details; the desktop shell may override them from the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Letterhead {
    /// Organization name, uppercased on the document.
    pub organization: String,

    /// Chilean RUT of the issuing company.
    pub tax_id: String,

    /// Single-line postal address.
    pub address: String,
}

impl Default for Letterhead {
    fn default() -> Self {
        Letterhead {
            organization: "GESTIONES Y SERVICIOS MP".to_string(),
            tax_id: "77.968.591-8".to_string(),
            address: "Antonio Bellet 193, Of. 1210, Providencia, Santiago".to_string(),
        }
    }
}

// =============================================================================
// Rendering
// =============================================================================

/// Renders the full report for `quotation` as UTF-8 text.
///
/// Line totals and the summary figures are the raw integers from the totals
/// calculator; the es-CL formatting is display-only and never exported.
///
/// Records go through the `csv` writer so field quoting is correct; the
/// blank separator lines are appended directly, because a CSV writer would
/// render a lone empty field as `""` instead of an empty line.
pub fn render_report(quotation: &Quotation, letterhead: &Letterhead) -> Result<String, ExportError> {
    let mut report = String::new();

    // Letterhead
    line(&mut report, &format!("{} - COTIZACIÓN", letterhead.organization))?;
    line(&mut report, &format!("RUT: {}", letterhead.tax_id))?;
    line(&mut report, &letterhead.address)?;
    report.push('\n');

    // Document header
    line(&mut report, &format!("Cotización N°: {}", quotation.number))?;
    line(&mut report, &format!("Fecha: {}", quotation.date))?;
    report.push('\n');

    // Client section
    line(&mut report, "INFORMACIÓN DEL CLIENTE")?;
    pair(&mut report, "Cliente:", &quotation.client.name)?;
    pair(&mut report, "Teléfono:", &quotation.client.phone)?;
    pair(&mut report, "Dirección:", &quotation.client.address)?;
    pair(&mut report, "Asunto:", &quotation.client.subject)?;
    report.push('\n');

    // Item table
    line(&mut report, "PRODUCTOS Y SERVICIOS")?;
    record(
        &mut report,
        &["Código", "Descripción", "Cantidad", "Precio Unitario", "Total"],
    )?;
    for item in &quotation.items {
        let quantity = item.quantity.to_string();
        let unit_price = item.unit_price.to_string();
        let line_total = item.line_total().clp().to_string();
        record(
            &mut report,
            &[
                item.code.as_str(),
                item.description.as_str(),
                quantity.as_str(),
                unit_price.as_str(),
                line_total.as_str(),
            ],
        )?;
    }
    report.push('\n');

    // Summary rows: raw integers in the Total column
    summary(&mut report, "Subtotal:", quotation.subtotal().clp())?;
    summary(&mut report, "IVA (19%):", quotation.iva().clp())?;
    summary(&mut report, "TOTAL:", quotation.total().clp())?;
    report.push('\n');

    // Conditions
    line(&mut report, "CONDICIONES")?;
    pair(&mut report, "Solicitado por:", &quotation.terms.requested_by)?;
    pair(&mut report, "Forma de Pago:", &quotation.terms.payment_method)?;
    pair(&mut report, "Despacho:", &quotation.terms.delivery)?;
    pair(&mut report, "Validez:", &format!("{} días", quotation.validity_days))?;
    pair(&mut report, "Autorizado por:", &quotation.authorized_by)?;

    Ok(report)
}

/// Builds the download filename for a quotation number.
///
/// `Cotizacion_<number>.csv`, with every `/` replaced by `-` so numbers
/// like `11/2025` stay filesystem-safe.
pub fn export_file_name(number: &str) -> String {
    format!("Cotizacion_{}.csv", number.replace('/', "-"))
}

// -----------------------------------------------------------------------------
// Record helpers
// -----------------------------------------------------------------------------

/// Serializes one record, quoting where required, and appends it (with its
/// line terminator) to the report.
fn record(report: &mut String, fields: &[&str]) -> Result<(), ExportError> {
    let mut buf = Vec::new();
    {
        let mut wtr = csv::Writer::from_writer(&mut buf);
        wtr.write_record(fields)?;
        wtr.flush()?;
    }
    report.push_str(&String::from_utf8(buf)?);
    Ok(())
}

/// One single-field record.
fn line(report: &mut String, text: &str) -> Result<(), ExportError> {
    record(report, &[text])
}

/// One `label,value` record.
fn pair(report: &mut String, label: &str, value: &str) -> Result<(), ExportError> {
    record(report, &[label, value])
}

/// One summary record: label, empty filler fields, raw integer value in the
/// Total column.
fn summary(report: &mut String, label: &str, value: i64) -> Result<(), ExportError> {
    let value = value.to_string();
    record(report, &[label, "", "", "", value.as_str()])
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ClientInfo, LineItem, Terms};

    fn quotation_with_items(items: Vec<LineItem>) -> Quotation {
        Quotation {
            number: "001".to_string(),
            date: "2025-01-15".to_string(),
            client: ClientInfo {
                name: "Acme".to_string(),
                address: "Av. Siempreviva 742".to_string(),
                phone: "+56 9 1111 1111".to_string(),
                subject: "Pedido".to_string(),
            },
            items,
            terms: Terms {
                requested_by: "Acme".to_string(),
                payment_method: "Transferencia".to_string(),
                delivery: "Retiro en tienda".to_string(),
            },
            validity_days: 10,
            authorized_by: "MP".to_string(),
        }
    }

    #[test]
    fn test_seed_report_exact() {
        let report = render_report(&Quotation::seed(), &Letterhead::default()).unwrap();

        let expected = concat!(
            "GESTIONES Y SERVICIOS MP - COTIZACIÓN\n",
            "RUT: 77.968.591-8\n",
            "\"Antonio Bellet 193, Of. 1210, Providencia, Santiago\"\n",
            "\n",
            "Cotización N°: 11-2025\n",
            "Fecha: 2025-11-07\n",
            "\n",
            "INFORMACIÓN DEL CLIENTE\n",
            "Cliente:,Paulina Mujica\n",
            "Teléfono:,+56 9 5058 8170\n",
            "Dirección:,\"Eduardo Frei Montalva 7050, bodega n7\"\n",
            "Asunto:,100 toldos estampados y 100 mesas\n",
            "\n",
            "PRODUCTOS Y SERVICIOS\n",
            "Código,Descripción,Cantidad,Precio Unitario,Total\n",
            "A7F3X9Q2,\"Servicio de estampado en una cara con logotipo \"\"NIVEA\"\"\",100,22000,2200000\n",
            "T9L2R7K8,Toldo plegable araña 3x3m Azul,100,27000,2700000\n",
            "L6Q1R8F3,Mesa plegable rectangular tipo maleta 180cm blanco,100,5000,500000\n",
            "\n",
            "Subtotal:,,,,5400000\n",
            "IVA (19%):,,,,1026000\n",
            "TOTAL:,,,,6426000\n",
            "\n",
            "CONDICIONES\n",
            "Solicitado por:,Paulina Mujica\n",
            "Forma de Pago:,Transferencia\n",
            "Despacho:,Despacho a coordinar\n",
            "Validez:,5 días\n",
            "Autorizado por:,MATIAS PEÑA\n",
        );

        assert_eq!(report, expected);
    }

    #[test]
    fn test_item_row_and_summaries() {
        let q = quotation_with_items(vec![LineItem {
            code: "A1".to_string(),
            description: "Widget".to_string(),
            quantity: 2,
            unit_price: 100,
        }]);
        let report = render_report(&q, &Letterhead::default()).unwrap();

        assert!(report.contains("A1,Widget,2,100,200\n"));
        assert!(report.contains("Subtotal:,,,,200\n"));
        assert!(report.contains("IVA (19%):,,,,38\n"));
        assert!(report.contains("TOTAL:,,,,238\n"));
    }

    #[test]
    fn test_empty_item_list_reports_zero_totals() {
        let q = quotation_with_items(Vec::new());
        let report = render_report(&q, &Letterhead::default()).unwrap();

        // Header row immediately followed by the blank separator
        assert!(report.contains("Código,Descripción,Cantidad,Precio Unitario,Total\n\n"));
        assert!(report.contains("Subtotal:,,,,0\n"));
        assert!(report.contains("IVA (19%):,,,,0\n"));
        assert!(report.contains("TOTAL:,,,,0\n"));
    }

    #[test]
    fn test_export_is_idempotent() {
        let q = Quotation::seed();
        let letterhead = Letterhead::default();
        let first = render_report(&q, &letterhead).unwrap();
        let second = render_report(&q, &letterhead).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_delimiter_in_field_is_quoted() {
        let mut q = quotation_with_items(Vec::new());
        q.client.name = "Muebles, Toldos y Cía.".to_string();
        let report = render_report(&q, &Letterhead::default()).unwrap();

        assert!(report.contains("Cliente:,\"Muebles, Toldos y Cía.\"\n"));
    }

    #[test]
    fn test_newline_in_field_is_quoted() {
        let mut q = quotation_with_items(vec![LineItem::new()]);
        q.items[0].description = "línea uno\nlínea dos".to_string();
        let report = render_report(&q, &Letterhead::default()).unwrap();

        assert!(report.contains(",\"línea uno\nlínea dos\",1,0,0\n"));
    }

    #[test]
    fn test_raw_integers_not_display_formatting() {
        let report = render_report(&Quotation::seed(), &Letterhead::default()).unwrap();
        // The on-screen string for the subtotal is "$5.400.000"; the export
        // must carry the raw integer instead.
        assert!(report.contains(",,,,5400000\n"));
        assert!(!report.contains("$5.400.000"));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("11-2025"), "Cotizacion_11-2025.csv");
        assert_eq!(export_file_name("11/2025"), "Cotizacion_11-2025.csv");
        // Every slash is replaced, not just the first
        assert_eq!(export_file_name("1/2/3"), "Cotizacion_1-2-3.csv");
        assert_eq!(export_file_name(""), "Cotizacion_.csv");
    }

    #[test]
    fn test_validity_suffix() {
        let q = quotation_with_items(Vec::new());
        let report = render_report(&q, &Letterhead::default()).unwrap();
        assert!(report.contains("Validez:,10 días\n"));
    }

    #[test]
    fn test_letterhead_override() {
        let letterhead = Letterhead {
            organization: "OTRA EMPRESA SPA".to_string(),
            tax_id: "11.111.111-1".to_string(),
            address: "Calle Falsa 123".to_string(),
        };
        let report = render_report(&Quotation::seed(), &letterhead).unwrap();

        assert!(report.starts_with("OTRA EMPRESA SPA - COTIZACIÓN\nRUT: 11.111.111-1\nCalle Falsa 123\n\n"));
    }
}
