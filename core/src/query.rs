// core/src/query.rs

//! Listing parameters: filters, the sort order and offset/limit pagination.

use std::fmt;
use std::str::FromStr;

use crate::error::{CatalogError, CatalogResult};

pub const DEFAULT_LIMIT: i64 = 100;

/// Sort orders accepted by the listing endpoint. Listing without a key orders by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
  PriceAsc,
  PriceDesc,
  Name,
  Newest,
}

impl SortKey {
  pub const ALL: [SortKey; 4] = [SortKey::PriceAsc, SortKey::PriceDesc, SortKey::Name, SortKey::Newest];

  pub fn as_str(&self) -> &'static str {
    match self {
      SortKey::PriceAsc => "price_asc",
      SortKey::PriceDesc => "price_desc",
      SortKey::Name => "name",
      SortKey::Newest => "newest",
    }
  }

  /// ORDER BY body for this key. Ties are broken by id so pages are stable.
  pub fn order_by(key: Option<SortKey>) -> &'static str {
    match key {
      Some(SortKey::PriceAsc) => "price ASC, id ASC",
      Some(SortKey::PriceDesc) => "price DESC, id ASC",
      Some(SortKey::Name) => "name ASC, id ASC",
      Some(SortKey::Newest) => "created_at DESC, id DESC",
      None => "id ASC",
    }
  }
}

impl fmt::Display for SortKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortKey {
  type Err = CatalogError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    SortKey::ALL
      .into_iter()
      .find(|key| key.as_str() == s)
      .ok_or_else(|| CatalogError::UnknownSortKey(s.to_string()))
  }
}

/// Inclusive price range. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceBounds {
  pub min: Option<f64>,
  pub max: Option<f64>,
}

impl PriceBounds {
  pub fn contains(&self, price: f64) -> bool {
    self.min.map_or(true, |min| price >= min) && self.max.map_or(true, |max| price <= max)
  }
}

fn check_price_bound(param: &'static str, value: f64) -> CatalogResult<f64> {
  if !value.is_finite() {
    return Err(CatalogError::InvalidQuery {
      param,
      message: "must be a finite number".to_string(),
    });
  }
  if value < 0.0 {
    return Err(CatalogError::InvalidQuery {
      param,
      message: format!("must be greater than or equal to 0, got {}", value),
    });
  }
  Ok(value)
}

/// A listing request: conjunctive filters, one sort order, then offset/limit.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
  pub skip: i64,
  pub limit: i64,
  pub category: Option<String>,
  pub price: PriceBounds,
  pub sort: Option<SortKey>,
}

impl Default for ProductQuery {
  fn default() -> Self {
    Self {
      skip: 0,
      limit: DEFAULT_LIMIT,
      category: None,
      price: PriceBounds::default(),
      sort: None,
    }
  }
}

impl ProductQuery {
  pub fn new(skip: i64, limit: i64) -> CatalogResult<Self> {
    if skip < 0 {
      return Err(CatalogError::InvalidQuery {
        param: "skip",
        message: format!("must be non-negative, got {}", skip),
      });
    }
    if limit < 0 {
      return Err(CatalogError::InvalidQuery {
        param: "limit",
        message: format!("must be non-negative, got {}", limit),
      });
    }
    Ok(Self {
      skip,
      limit,
      ..Self::default()
    })
  }

  /// An empty category string means "no category filter".
  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    let category = category.into();
    self.category = if category.is_empty() { None } else { Some(category) };
    self
  }

  pub fn with_min_price(mut self, min: f64) -> CatalogResult<Self> {
    self.price.min = Some(check_price_bound("min_price", min)?);
    Ok(self)
  }

  pub fn with_max_price(mut self, max: f64) -> CatalogResult<Self> {
    self.price.max = Some(check_price_bound("max_price", max)?);
    Ok(self)
  }

  pub fn sorted_by(mut self, key: SortKey) -> Self {
    self.sort = Some(key);
    self
  }

  /// Whether a product passes the filters of this query (pagination aside).
  pub fn matches(&self, category: &str, price: f64) -> bool {
    self.category.as_deref().map_or(true, |wanted| wanted == category) && self.price.contains(price)
  }
}
