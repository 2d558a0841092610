// core/src/stats.rs

//! Whole-catalog statistics.
//!
//! Rows are folded one at a time into a `StatsAccumulator`, so the store can
//! stream the table once instead of issuing one aggregate query per category.
//! `finish()` applies the rounding and produces the serializable `CatalogStats`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;

/// Rounds a monetary aggregate to 2 decimal places.
///
/// Ties go to the even digit and are judged on the exact binary value, so
/// `0.125` becomes `0.12` while `2.675` (stored just below) becomes `2.67`.
/// Fixed-precision formatting works on the exact value and never scales it,
/// which keeps very large sums finite.
pub fn round2(value: f64) -> f64 {
  if !value.is_finite() {
    return value;
  }
  format!("{:.2}", value).parse().unwrap_or(value)
}

/// The four fixed histogram buckets. Upper bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBucket {
  UpTo1000,
  UpTo5000,
  UpTo10000,
  Above10000,
}

impl PriceBucket {
  pub fn for_price(price: f64) -> Self {
    if price <= 1000.0 {
      PriceBucket::UpTo1000
    } else if price <= 5000.0 {
      PriceBucket::UpTo5000
    } else if price <= 10000.0 {
      PriceBucket::UpTo10000
    } else {
      PriceBucket::Above10000
    }
  }
}

/// Product counts per price bucket, serialized under the bucket labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRanges {
  #[serde(rename = "0-1000")]
  pub up_to_1000: i64,
  #[serde(rename = "1000-5000")]
  pub up_to_5000: i64,
  #[serde(rename = "5000-10000")]
  pub up_to_10000: i64,
  #[serde(rename = "10000+")]
  pub above_10000: i64,
}

impl PriceRanges {
  pub fn record(&mut self, price: f64) {
    match PriceBucket::for_price(price) {
      PriceBucket::UpTo1000 => self.up_to_1000 += 1,
      PriceBucket::UpTo5000 => self.up_to_5000 += 1,
      PriceBucket::UpTo10000 => self.up_to_10000 += 1,
      PriceBucket::Above10000 => self.above_10000 += 1,
    }
  }

  pub fn total(&self) -> i64 {
    self.up_to_1000 + self.up_to_5000 + self.up_to_10000 + self.above_10000
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStats {
  pub count: i64,
  pub total_value: f64,
  pub average_price: f64,
  pub total_quantity: i64,
}

/// The body of `GET /api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
  pub total_products: i64,
  pub total_value: f64,
  pub average_price: f64,
  pub categories: Vec<String>,
  pub total_categories: usize,
  pub categories_count: BTreeMap<String, i64>,
  pub category_stats: BTreeMap<String, CategoryStats>,
  pub price_ranges: PriceRanges,
}

impl CatalogStats {
  pub fn empty() -> Self {
    StatsAccumulator::default().finish()
  }

  /// Folds already-loaded records, e.g. the ones a seed call returned.
  pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> CatalogResult<Self> {
    let mut acc = StatsAccumulator::default();
    for product in products {
      acc.push(&product.category, product.price, product.quantity)?;
    }
    Ok(acc.finish())
  }
}

#[derive(Debug, Clone, Default)]
struct Totals {
  count: i64,
  price_sum: f64,
  value_sum: f64,
  quantity_sum: i64,
}

impl Totals {
  // Leaves the totals untouched when a sum would leave its range.
  fn add(&mut self, price: f64, quantity: i64) -> CatalogResult<()> {
    let quantity_sum = self
      .quantity_sum
      .checked_add(quantity)
      .ok_or(CatalogError::AggregateOverflow("total_quantity"))?;
    let price_sum = self.price_sum + price;
    if !price_sum.is_finite() {
      return Err(CatalogError::AggregateOverflow("average_price"));
    }
    let value_sum = self.value_sum + price * quantity as f64;
    if !value_sum.is_finite() {
      return Err(CatalogError::AggregateOverflow("total_value"));
    }

    self.count += 1;
    self.price_sum = price_sum;
    self.value_sum = value_sum;
    self.quantity_sum = quantity_sum;
    Ok(())
  }

  fn average_price(&self) -> f64 {
    if self.count == 0 {
      0.0
    } else {
      round2(self.price_sum / self.count as f64)
    }
  }
}

/// Single-pass fold over `(category, price, quantity)` rows.
#[derive(Debug, Clone, Default)]
pub struct StatsAccumulator {
  overall: Totals,
  per_category: BTreeMap<String, Totals>,
  price_ranges: PriceRanges,
}

impl StatsAccumulator {
  /// Folds one row in. Fails when a running sum would overflow; the
  /// accumulator should then be discarded.
  pub fn push(&mut self, category: &str, price: f64, quantity: i64) -> CatalogResult<()> {
    self.overall.add(price, quantity)?;
    // Avoid allocating the key for categories already seen.
    match self.per_category.get_mut(category) {
      Some(totals) => totals.add(price, quantity)?,
      None => {
        let mut totals = Totals::default();
        totals.add(price, quantity)?;
        self.per_category.insert(category.to_string(), totals);
      }
    }
    self.price_ranges.record(price);
    Ok(())
  }

  pub fn rows_seen(&self) -> i64 {
    self.overall.count
  }

  pub fn finish(self) -> CatalogStats {
    let categories: Vec<String> = self.per_category.keys().cloned().collect();
    let categories_count = self
      .per_category
      .iter()
      .map(|(name, totals)| (name.clone(), totals.count))
      .collect();
    let category_stats = self
      .per_category
      .iter()
      .map(|(name, totals)| {
        (
          name.clone(),
          CategoryStats {
            count: totals.count,
            total_value: round2(totals.value_sum),
            average_price: totals.average_price(),
            total_quantity: totals.quantity_sum,
          },
        )
      })
      .collect();

    CatalogStats {
      total_products: self.overall.count,
      total_value: round2(self.overall.value_sum),
      average_price: self.overall.average_price(),
      total_categories: categories.len(),
      categories,
      categories_count,
      category_stats,
      price_ranges: self.price_ranges,
    }
  }
}
