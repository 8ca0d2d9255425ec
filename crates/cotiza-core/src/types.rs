//! # Document Model
//!
//! The quotation document and its update operations.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Document Types                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                        Quotation                                │   │
//! │  │  ───────────────────────────────────────────────────────────   │   │
//! │  │  number, date                    free text header               │   │
//! │  │  client: ClientInfo              name/address/phone/subject     │   │
//! │  │  items: Vec<LineItem>            ordered, positional identity   │   │
//! │  │  terms: Terms                    requested_by/payment/delivery  │   │
//! │  │  validity_days, authorized_by    footer                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  Derived (never stored):  subtotal() ──► iva() ──► total()             │
//! │                                                                         │
//! │  Field selectors: ClientField / TermsField / ItemField                 │
//! │  (closed enums - the IPC layer cannot name a field that doesn't exist) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Editing Model
//! The document is value-semantic: the desktop shell owns exactly one
//! `Quotation` behind a mutex, every update runs through one of the methods
//! here, and each command returns the full new state. Items have no identity
//! beyond their position; removal is "drop the entry at this index".

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::parse::parse_non_negative_int;
use crate::IVA_RATE;

// =============================================================================
// Field Selectors
// =============================================================================

/// One editable field of the embedded client record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ClientField {
    Name,
    Address,
    Phone,
    Subject,
}

/// One editable field of the embedded terms record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TermsField {
    RequestedBy,
    PaymentMethod,
    Delivery,
}

/// One editable field of a line item.
///
/// `Quantity` and `UnitPrice` coerce their text through
/// [`parse_non_negative_int`]; the other two are free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ItemField {
    Code,
    Description,
    Quantity,
    UnitPrice,
}

// =============================================================================
// Embedded Records
// =============================================================================

/// Client details. All free text, independently mutable, blanks tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub name: String,
    /// Delivery address shown on the document and in the export.
    pub address: String,
    pub phone: String,
    /// What the quote is for, in the client's words.
    pub subject: String,
}

/// Commercial conditions. All free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Terms {
    pub requested_by: String,
    pub payment_method: String,
    pub delivery: String,
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the quotation: a quantity of a priced product or service.
///
/// `code` is an opaque SKU-like string; no format is enforced. `quantity`
/// and `unit_price` are whole non-negative integers (unit price in whole
/// pesos), kept that way by the coercion in [`LineItem::set_field`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub code: String,
    pub description: String,
    pub quantity: i64,
    pub unit_price: i64,
}

impl LineItem {
    /// Creates the blank row the "add item" button appends: empty texts,
    /// quantity 1, price 0.
    pub fn new() -> Self {
        LineItem {
            code: String::new(),
            description: String::new(),
            quantity: 1,
            unit_price: 0,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_clp(self.unit_price)
    }

    /// Calculates the line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price() * self.quantity
    }

    /// Replaces one field from input text.
    ///
    /// Numeric fields coerce through [`parse_non_negative_int`]: unparsable
    /// or negative input becomes `0`, silently.
    pub fn set_field(&mut self, field: ItemField, value: &str) {
        match field {
            ItemField::Code => self.code = value.to_string(),
            ItemField::Description => self.description = value.to_string(),
            ItemField::Quantity => self.quantity = parse_non_negative_int(value),
            ItemField::UnitPrice => self.unit_price = parse_non_negative_int(value),
        }
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Quotation
// =============================================================================

/// The root document: one price quote to one client.
///
/// ## Invariants
/// - `items` may be empty; every total of an empty list is zero
/// - No field is required to be non-empty; there is no validation layer
/// - `validity_days` is non-negative (coerced on input)
/// - Item order is meaningful: it is display order and CSV row order;
///   duplicates are permitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    /// Free-text identifier, e.g. "11-2025". No uniqueness enforced.
    pub number: String,

    /// ISO-formatted date as the date widget produces it.
    pub date: String,

    pub client: ClientInfo,

    pub items: Vec<LineItem>,

    pub terms: Terms,

    /// Business days the quote remains valid.
    pub validity_days: i64,

    /// Signatory name.
    pub authorized_by: String,
}

impl Quotation {
    /// The hard-coded state the app starts from.
    ///
    /// There is no persistence: the session begins here, lives in memory,
    /// and is discarded on exit.
    pub fn seed() -> Self {
        Quotation {
            number: "11-2025".to_string(),
            date: "2025-11-07".to_string(),
            client: ClientInfo {
                name: "Paulina Mujica".to_string(),
                address: "Eduardo Frei Montalva 7050, bodega n7".to_string(),
                phone: "+56 9 5058 8170".to_string(),
                subject: "100 toldos estampados y 100 mesas".to_string(),
            },
            items: vec![
                LineItem {
                    code: "A7F3X9Q2".to_string(),
                    description: "Servicio de estampado en una cara con logotipo \"NIVEA\""
                        .to_string(),
                    quantity: 100,
                    unit_price: 22000,
                },
                LineItem {
                    code: "T9L2R7K8".to_string(),
                    description: "Toldo plegable araña 3x3m Azul".to_string(),
                    quantity: 100,
                    unit_price: 27000,
                },
                LineItem {
                    code: "L6Q1R8F3".to_string(),
                    description: "Mesa plegable rectangular tipo maleta 180cm blanco".to_string(),
                    quantity: 100,
                    unit_price: 5000,
                },
            ],
            terms: Terms {
                requested_by: "Paulina Mujica".to_string(),
                payment_method: "Transferencia".to_string(),
                delivery: "Despacho a coordinar".to_string(),
            },
            validity_days: 5,
            authorized_by: "MATIAS PEÑA".to_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Header / footer scalars
    // -------------------------------------------------------------------------

    /// Replaces the quotation number.
    pub fn set_number(&mut self, number: String) {
        self.number = number;
    }

    /// Replaces the emission date.
    pub fn set_date(&mut self, date: String) {
        self.date = date;
    }

    /// Replaces the validity period from input text (coerced non-negative).
    pub fn set_validity_days(&mut self, text: &str) {
        self.validity_days = parse_non_negative_int(text);
    }

    /// Replaces the signatory name.
    pub fn set_authorized_by(&mut self, name: String) {
        self.authorized_by = name;
    }

    // -------------------------------------------------------------------------
    // Embedded records
    // -------------------------------------------------------------------------

    /// Replaces one client field; sibling fields are untouched.
    pub fn set_client_field(&mut self, field: ClientField, value: String) {
        match field {
            ClientField::Name => self.client.name = value,
            ClientField::Address => self.client.address = value,
            ClientField::Phone => self.client.phone = value,
            ClientField::Subject => self.client.subject = value,
        }
    }

    /// Replaces one terms field; sibling fields are untouched.
    pub fn set_terms_field(&mut self, field: TermsField, value: String) {
        match field {
            TermsField::RequestedBy => self.terms.requested_by = value,
            TermsField::PaymentMethod => self.terms.payment_method = value,
            TermsField::Delivery => self.terms.delivery = value,
        }
    }

    // -------------------------------------------------------------------------
    // Items
    // -------------------------------------------------------------------------

    /// Appends a blank line item (quantity 1, price 0) to the end of the
    /// list. Existing entries are not altered.
    pub fn add_item(&mut self) {
        self.items.push(LineItem::new());
    }

    /// Replaces one field of the item at `index`.
    ///
    /// ## Errors
    /// `ItemIndexOutOfRange` if `index` is not a valid position. The
    /// original UI left this undefined; here it is an explicit error so a
    /// stale index from the frontend cannot corrupt a different row.
    pub fn set_item_field(&mut self, index: usize, field: ItemField, value: &str) -> CoreResult<()> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CoreError::ItemIndexOutOfRange { index, len })?;
        item.set_field(field, value);
        Ok(())
    }

    /// Removes the item at `index`; subsequent items shift down one
    /// position. Same error contract as [`Quotation::set_item_field`].
    pub fn remove_item(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.items.len() {
            return Err(CoreError::ItemIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.items.remove(index);
        Ok(())
    }

    /// Returns the number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // -------------------------------------------------------------------------
    // Derived totals
    // -------------------------------------------------------------------------
    // Pure functions of `items`, recomputed on every read. There is no cache
    // and therefore no invalidation to get wrong.

    /// Sum of all line totals, before tax.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|item| item.line_total()).sum()
    }

    /// IVA (19%) on the subtotal, rounded per the pinned rule.
    pub fn iva(&self) -> Money {
        self.subtotal().calculate_iva(IVA_RATE)
    }

    /// Grand total: subtotal + IVA.
    pub fn total(&self) -> Money {
        self.subtotal() + self.iva()
    }
}

impl Default for Quotation {
    fn default() -> Self {
        Quotation::seed()
    }
}

// =============================================================================
// Totals Summary
// =============================================================================

/// The three derived figures, bundled for command responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuotationTotals {
    pub subtotal: Money,
    pub iva: Money,
    pub total: Money,
}

impl From<&Quotation> for QuotationTotals {
    fn from(quotation: &Quotation) -> Self {
        QuotationTotals {
            subtotal: quotation.subtotal(),
            iva: quotation.iva(),
            total: quotation.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_quotation() -> Quotation {
        Quotation {
            items: Vec::new(),
            ..Quotation::seed()
        }
    }

    #[test]
    fn test_seed_totals() {
        let q = Quotation::seed();
        assert_eq!(q.subtotal().clp(), 5_400_000);
        assert_eq!(q.iva().clp(), 1_026_000);
        assert_eq!(q.total().clp(), 6_426_000);
    }

    #[test]
    fn test_empty_items_all_totals_zero() {
        let q = empty_quotation();
        assert_eq!(q.subtotal(), Money::zero());
        assert_eq!(q.iva(), Money::zero());
        assert_eq!(q.total(), Money::zero());
    }

    #[test]
    fn test_line_total_is_exact_product() {
        let mut item = LineItem::new();
        item.set_field(ItemField::Quantity, "7");
        item.set_field(ItemField::UnitPrice, "1999");
        assert_eq!(item.line_total().clp(), 7 * 1999);
    }

    #[test]
    fn test_total_equals_subtotal_plus_iva() {
        let mut q = empty_quotation();
        q.add_item();
        q.set_item_field(0, ItemField::Quantity, "3").unwrap();
        q.set_item_field(0, ItemField::UnitPrice, "17").unwrap();
        // subtotal 51, 19% = 9.69 → 10
        assert_eq!(q.subtotal().clp(), 51);
        assert_eq!(q.iva().clp(), 10);
        assert_eq!(q.total().clp(), 61);
    }

    #[test]
    fn test_add_item_appends_blank_row() {
        let mut q = Quotation::seed();
        let before = q.items.clone();

        q.add_item();

        assert_eq!(q.item_count(), before.len() + 1);
        assert_eq!(q.items[..before.len()], before[..]);

        let added = q.items.last().unwrap();
        assert_eq!(added.code, "");
        assert_eq!(added.description, "");
        assert_eq!(added.quantity, 1);
        assert_eq!(added.unit_price, 0);
    }

    #[test]
    fn test_remove_item_shifts_following_rows() {
        let mut q = Quotation::seed();
        let second = q.items[1].clone();
        let third = q.items[2].clone();

        q.remove_item(0).unwrap();

        assert_eq!(q.item_count(), 2);
        assert_eq!(q.items[0], second);
        assert_eq!(q.items[1], third);
    }

    #[test]
    fn test_remove_item_out_of_range() {
        let mut q = Quotation::seed();
        let err = q.remove_item(3).unwrap_err();
        assert!(matches!(
            err,
            CoreError::ItemIndexOutOfRange { index: 3, len: 3 }
        ));

        let mut empty = empty_quotation();
        assert!(empty.remove_item(0).is_err());
    }

    #[test]
    fn test_set_item_field_out_of_range() {
        let mut q = empty_quotation();
        assert!(q.set_item_field(0, ItemField::Code, "X").is_err());
    }

    #[test]
    fn test_set_item_field_coerces_numerics() {
        let mut q = Quotation::seed();

        q.set_item_field(0, ItemField::Quantity, "not a number").unwrap();
        assert_eq!(q.items[0].quantity, 0);

        q.set_item_field(0, ItemField::UnitPrice, "-20").unwrap();
        assert_eq!(q.items[0].unit_price, 0);

        q.set_item_field(0, ItemField::Quantity, "12").unwrap();
        assert_eq!(q.items[0].quantity, 12);
    }

    #[test]
    fn test_set_client_field_leaves_siblings() {
        let mut q = Quotation::seed();
        q.set_client_field(ClientField::Phone, "+56 2 2222 2222".to_string());

        assert_eq!(q.client.phone, "+56 2 2222 2222");
        assert_eq!(q.client.name, "Paulina Mujica");
        assert_eq!(q.client.address, "Eduardo Frei Montalva 7050, bodega n7");
        assert_eq!(q.client.subject, "100 toldos estampados y 100 mesas");
    }

    #[test]
    fn test_set_terms_field_leaves_siblings() {
        let mut q = Quotation::seed();
        q.set_terms_field(TermsField::PaymentMethod, "Efectivo".to_string());

        assert_eq!(q.terms.payment_method, "Efectivo");
        assert_eq!(q.terms.requested_by, "Paulina Mujica");
        assert_eq!(q.terms.delivery, "Despacho a coordinar");
    }

    #[test]
    fn test_set_validity_days_coerces() {
        let mut q = Quotation::seed();
        q.set_validity_days("30");
        assert_eq!(q.validity_days, 30);
        q.set_validity_days("soon");
        assert_eq!(q.validity_days, 0);
    }

    #[test]
    fn test_blank_strings_tolerated_everywhere() {
        let mut q = Quotation::seed();
        q.set_number(String::new());
        q.set_date(String::new());
        q.set_authorized_by(String::new());
        q.set_client_field(ClientField::Name, String::new());
        q.set_terms_field(TermsField::Delivery, String::new());
        // Totals are unaffected by text fields
        assert_eq!(q.total().clp(), 6_426_000);
    }

    #[test]
    fn test_duplicate_items_permitted() {
        let mut q = empty_quotation();
        q.add_item();
        q.add_item();
        for i in 0..2 {
            q.set_item_field(i, ItemField::Code, "A1").unwrap();
            q.set_item_field(i, ItemField::Quantity, "2").unwrap();
            q.set_item_field(i, ItemField::UnitPrice, "100").unwrap();
        }
        assert_eq!(q.subtotal().clp(), 400);
    }

    #[test]
    fn test_totals_summary() {
        let q = Quotation::seed();
        let totals = QuotationTotals::from(&q);
        assert_eq!(totals.subtotal.clp(), 5_400_000);
        assert_eq!(totals.iva.clp(), 1_026_000);
        assert_eq!(totals.total.clp(), 6_426_000);
    }
}
