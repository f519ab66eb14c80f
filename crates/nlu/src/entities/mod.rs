//! Per-intent entity extraction
//!
//! One extractor per intent, all operating on normalized text. Extractors
//! never fail; absent fields stay `None` and the envelope turns them into
//! a `missing_entity` status.

pub mod product;
pub mod search;
pub mod stock;
pub mod time;

use std::sync::Arc;

use chrono::NaiveDate;

use dukaan_config::{EngineSettings, Lexicon};
use dukaan_core::{EntitySet, Intent, TimeBucket, TimeWindow};

use crate::error::Result;

pub use time::TimeExtractor;

/// Extractor set keyed by the resolved intent
pub struct EntityExtractors {
    time: TimeExtractor,
    lexicon: Arc<Lexicon>,
    low_stock_default: u32,
    top_limit_default: u32,
}

impl EntityExtractors {
    pub fn new(lexicon: Arc<Lexicon>, settings: &EngineSettings) -> Result<Self> {
        Ok(Self {
            time: TimeExtractor::new(&lexicon)?,
            lexicon,
            low_stock_default: settings.low_stock_threshold,
            top_limit_default: settings.top_limit,
        })
    }

    /// Extract the entity set for one resolved intent
    pub fn extract(&self, intent: Intent, text: &str, today: NaiveDate) -> EntitySet {
        match intent {
            Intent::AddProduct => product::extract_add_product(text, &self.lexicon),
            Intent::EditStock => stock::extract_edit_stock(text, &self.lexicon),
            Intent::GetLowStock => EntitySet::LowStock {
                threshold: stock::extract_threshold(text).unwrap_or(self.low_stock_default),
            },
            Intent::SearchProduct => search::extract_search(text, &self.lexicon),
            Intent::GetReport | Intent::GetOrders => EntitySet::TimeWindow {
                window: self.window(text, today),
            },
            Intent::GetTopProducts | Intent::GetCustomerData => EntitySet::RankedTimeWindow {
                window: self.window(text, today),
                limit: self
                    .time
                    .extract_limit(text)
                    .unwrap_or(self.top_limit_default),
            },
            Intent::GetInventory | Intent::Unknown => EntitySet::None,
        }
    }

    /// Time window with the whole-history default
    fn window(&self, text: &str, today: NaiveDate) -> TimeWindow {
        self.time
            .extract(text, today)
            .unwrap_or(TimeWindow::Bucket {
                bucket: TimeBucket::All,
            })
    }
}
