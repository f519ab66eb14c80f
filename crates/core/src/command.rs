//! Intents, typed entity sets and the parsed command envelope
//!
//! Every free-form message resolves to one `Intent` plus an `EntitySet`
//! variant holding only the fields relevant to that intent. Callers match
//! exhaustively on both; there is no generic key/value bag.

use serde::{Deserialize, Serialize};

use crate::language::LanguageDecision;
use crate::time::TimeWindow;

/// The canonical actions a seller message can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    GetInventory,
    GetLowStock,
    GetReport,
    GetTopProducts,
    GetCustomerData,
    AddProduct,
    EditStock,
    GetOrders,
    SearchProduct,
    Unknown,
}

impl Intent {
    /// Stable wire name ("get_inventory", "add_product", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::GetInventory => "get_inventory",
            Intent::GetLowStock => "get_low_stock",
            Intent::GetReport => "get_report",
            Intent::GetTopProducts => "get_top_products",
            Intent::GetCustomerData => "get_customer_data",
            Intent::AddProduct => "add_product",
            Intent::EditStock => "edit_stock",
            Intent::GetOrders => "get_orders",
            Intent::SearchProduct => "search_product",
            Intent::Unknown => "unknown",
        }
    }

    /// Parse a wire name back into an intent
    pub fn from_name(name: &str) -> Option<Intent> {
        match name {
            "get_inventory" => Some(Intent::GetInventory),
            "get_low_stock" => Some(Intent::GetLowStock),
            "get_report" => Some(Intent::GetReport),
            "get_top_products" => Some(Intent::GetTopProducts),
            "get_customer_data" => Some(Intent::GetCustomerData),
            "add_product" => Some(Intent::AddProduct),
            "edit_stock" => Some(Intent::EditStock),
            "get_orders" => Some(Intent::GetOrders),
            "search_product" => Some(Intent::SearchProduct),
            "unknown" => Some(Intent::Unknown),
            _ => None,
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-intent entities, discriminated by the resolved intent
///
/// Extraction is best-effort: fields a partial match could not supply are
/// `None`, and the envelope reports them through
/// [`ParseStatus::MissingEntity`] instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EntitySet {
    /// No entities for this intent (inventory listing, negated input, unknown)
    #[default]
    None,
    AddProduct {
        name: Option<String>,
        price: Option<i64>,
        stock: Option<i64>,
    },
    /// Stock is signed: the permissive parse accepts negative values
    EditStock {
        name: Option<String>,
        stock: Option<i64>,
    },
    LowStock {
        threshold: u32,
    },
    Search {
        name: Option<String>,
    },
    /// Report / order queries scoped to a time window
    TimeWindow {
        window: TimeWindow,
    },
    /// Top-products / customer queries: time window plus a result limit
    RankedTimeWindow {
        window: TimeWindow,
        limit: u32,
    },
}

impl EntitySet {
    /// Names of required fields this variant is still missing
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match self {
            EntitySet::AddProduct { name, price, stock } => {
                if name.is_none() {
                    missing.push("name");
                }
                if price.is_none() {
                    missing.push("price");
                }
                if stock.is_none() {
                    missing.push("stock");
                }
            }
            EntitySet::EditStock { name, stock } => {
                if name.is_none() {
                    missing.push("name");
                }
                if stock.is_none() {
                    missing.push("stock");
                }
            }
            EntitySet::Search { name } => {
                if name.is_none() {
                    missing.push("name");
                }
            }
            EntitySet::None
            | EntitySet::LowStock { .. }
            | EntitySet::TimeWindow { .. }
            | EntitySet::RankedTimeWindow { .. } => {}
        }
        missing
    }

    pub fn is_none(&self) -> bool {
        matches!(self, EntitySet::None)
    }
}

/// Terminal status of the parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseStatus {
    /// Intent resolved and all required entities present
    Success,
    /// No intent matched, or the message was a negation
    Unknown,
    /// Intent resolved but required entity fields are absent; callers can
    /// prompt the user for exactly these fields
    MissingEntity { fields: Vec<String> },
}

/// Immutable result of interpreting one message
///
/// Constructed once per input and returned by value. Both the raw and the
/// normalized text are preserved for downstream logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedCommand {
    pub raw_text: String,
    pub normalized_text: String,
    pub language: LanguageDecision,
    pub intent: Intent,
    pub entities: EntitySet,
    pub confidence: f32,
    pub has_negation: bool,
    pub status: ParseStatus,
}

impl ParsedCommand {
    pub fn is_success(&self) -> bool {
        self.status == ParseStatus::Success
    }
}
