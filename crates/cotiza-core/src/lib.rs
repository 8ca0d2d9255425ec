//! # cotiza-core: Pure Business Logic for Cotiza
//!
//! This crate is the **heart** of Cotiza. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Cotiza Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Header inputs ──► Item table ──► Totals ──► Export button   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                              │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    set_client_field, add_item, export_csv, etc.                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ cotiza-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   parse   │  │  export   │  │   │
//! │  │   │ Quotation │  │   Money   │  │  numeric  │  │    CSV    │  │   │
//! │  │   │ LineItem  │  │  TaxRate  │  │ coercion  │  │  report   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The quotation document model and derived totals
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`parse`] - Numeric input coercion rules
//! - [`export`] - CSV report rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File, network, and window access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are whole pesos (i64), never floats
//! 4. **Explicit Errors**: Out-of-range access is typed, never a silent no-op
//!
//! ## Example Usage
//!
//! ```rust
//! use cotiza_core::money::Money;
//! use cotiza_core::IVA_RATE;
//!
//! // Create money from whole pesos (never from floats!)
//! let subtotal = Money::from_clp(5_400_000);
//!
//! // Calculate IVA with the pinned rounding rule
//! let iva = subtotal.calculate_iva(IVA_RATE);
//! assert_eq!(iva.clp(), 1_026_000);
//!
//! // Format for display (es-CL, zero decimals)
//! assert_eq!(subtotal.format_clp(), "$5.400.000");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod money;
pub mod parse;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cotiza_core::Money` instead of
// `use cotiza_core::money::Money`

pub use error::{CoreError, CoreResult, ExportError};
pub use export::{export_file_name, render_report, Letterhead};
pub use money::{Money, TaxRate};
pub use parse::parse_non_negative_int;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Chilean IVA rate in basis points (1900 = 19%).
///
/// ## Why a constant?
/// Every quotation in this system applies the same national VAT rate to the
/// subtotal. Making it a crate constant keeps the totals calculator, the CSV
/// report label ("IVA (19%)"), and the tests pointed at one value.
pub const IVA_RATE: TaxRate = TaxRate::from_bps(1900);
