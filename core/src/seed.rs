// core/src/seed.rs

//! Fixed sample data for the debug seed endpoint: eight products, two in each
//! of the electronics, clothing, books and food categories.

use crate::models::NewProduct;

pub const SAMPLE_CATEGORIES: [&str; 4] = ["electronics", "clothing", "books", "food"];

pub fn sample_products() -> Vec<NewProduct> {
  vec![
    NewProduct::new("ASUS TUF Gaming Laptop", 85999.0, "electronics")
      .with_description("Gaming laptop with RTX 3060, 16GB RAM, 512GB SSD")
      .with_quantity(8),
    NewProduct::new("Nike Sport T-Shirt", 2499.0, "clothing")
      .with_description("Cotton t-shirt for training")
      .with_quantity(25),
    NewProduct::new("Python for Beginners", 1899.0, "books")
      .with_description("A complete guide to Python 3")
      .with_quantity(15),
    NewProduct::new("Lavazza Coffee Beans", 1499.0, "food")
      .with_description("100% Arabica, 1 kg")
      .with_quantity(30),
    NewProduct::new("Samsung Galaxy S23", 79999.0, "electronics")
      .with_description("128GB, 8GB RAM, black")
      .with_quantity(5),
    NewProduct::new("Levi's 501 Jeans", 5999.0, "clothing")
      .with_description("Classic straight-leg jeans")
      .with_quantity(12),
    NewProduct::new("Clean Code by Robert Martin", 2999.0, "books")
      .with_description("A handbook of agile software craftsmanship")
      .with_quantity(10),
    NewProduct::new("Ahmad Green Tea", 899.0, "food")
      .with_description("100 tea bags")
      .with_quantity(40),
  ]
}
