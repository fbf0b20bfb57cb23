//! # Cart View
//!
//! Presentation over a [`CartClient`]: derives the values a cart page shows
//! (formatted unit price, subtotal per line, grand total) and turns the page's
//! buttons into cart operations. Failed operations become one [`Notice`] each
//! and are never handed back to the caller as errors.
//!
//! [`Notice`]: crate::notify::Notice

use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::model::{CartItem, ProductId};
use crate::notify::{Notifier, ADD_FAILED, OUT_OF_STOCK, REMOVE_FAILED, UPDATE_FAILED};
use std::fmt::Write;
use tracing::{debug, warn};

/// Formats `value` as Brazilian reais, e.g. `R$ 1.250,00` (non-breaking space after the symbol).
pub fn format_price(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$\u{a0}{grouped},{:02}", cents % 100)
}

/// One rendered cart row.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: CartItem,
    pub price_formatted: String,
    pub subtotal: f64,
    pub subtotal_formatted: String,
    /// Decrement is offered only while more than one unit is held.
    pub can_decrement: bool,
}

impl CartLine {
    pub fn new(item: CartItem) -> Self {
        let subtotal = item.subtotal();
        Self {
            price_formatted: format_price(item.price),
            subtotal_formatted: format_price(subtotal),
            can_decrement: item.amount > 1,
            subtotal,
            item,
        }
    }
}

/// Everything the cart page displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub total: f64,
    pub total_formatted: String,
}

impl CartSummary {
    pub fn new(items: Vec<CartItem>) -> Self {
        let lines: Vec<CartLine> = items.into_iter().map(CartLine::new).collect();
        let total = lines.iter().map(|line| line.subtotal).sum();
        Self {
            lines,
            total,
            total_formatted: format_price(total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text table of the cart with a total footer.
    pub fn render_table(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{:<4} {:<40} {:>5} {:>14}  IMAGE",
            "ID", "PRODUCT", "QTY", "SUBTOTAL"
        );
        if self.lines.is_empty() {
            let _ = writeln!(out, "(cart is empty)");
        }
        for line in &self.lines {
            let product = format!("{} ({})", line.item.title, line.price_formatted);
            let _ = writeln!(
                out,
                "{:<4} {:<40} {:>5} {:>14}  {}",
                line.item.id.0, product, line.item.amount, line.subtotal_formatted, line.item.image
            );
        }
        let _ = writeln!(out, "{:<4} {:<40} {:>5} {:>14}", "", "TOTAL", "", self.total_formatted);
        out
    }
}

/// The cart page: reads through a [`CartClient`], reports failures through a [`Notifier`].
#[derive(Clone)]
pub struct CartView {
    client: CartClient,
    notifier: Notifier,
}

impl CartView {
    pub fn new(client: CartClient, notifier: Notifier) -> Self {
        Self { client, notifier }
    }

    pub fn client(&self) -> &CartClient {
        &self.client
    }

    /// Reads the cart and derives the displayed values.
    pub async fn render(&self) -> Result<CartSummary, CartError> {
        Ok(CartSummary::new(self.client.cart().await?))
    }

    /// "Add to cart" on a product page. Returns whether the cart changed.
    pub async fn add(&self, product_id: ProductId) -> bool {
        match self.client.add_product(product_id).await {
            Ok(_) => true,
            Err(e) => self.reject(&e, ADD_FAILED),
        }
    }

    /// The "+" button on a line.
    pub async fn increment(&self, item: &CartItem) -> bool {
        self.update(item.id, i64::from(item.amount) + 1).await
    }

    /// The "-" button on a line. Does nothing while a single unit is held.
    pub async fn decrement(&self, item: &CartItem) -> bool {
        if item.amount <= 1 {
            debug!(product_id = %item.id, "Decrement disabled");
            return false;
        }
        self.update(item.id, i64::from(item.amount) - 1).await
    }

    /// The delete button on a line.
    pub async fn remove(&self, product_id: ProductId) -> bool {
        match self.client.remove_product(product_id).await {
            Ok(_) => true,
            Err(e) => self.reject(&e, REMOVE_FAILED),
        }
    }

    /// Sets a line's quantity directly. Non-positive amounts are ignored.
    pub async fn update(&self, product_id: ProductId, amount: i64) -> bool {
        match self.client.update_product_amount(product_id, amount).await {
            Ok(item) => item.is_some(),
            Err(e) => self.reject(&e, UPDATE_FAILED),
        }
    }

    fn reject(&self, error: &CartError, fallback: &str) -> bool {
        warn!(%error, "Cart operation rejected");
        if error.is_stock_exceeded() {
            self.notifier.error(OUT_OF_STOCK);
        } else {
            self.notifier.error(fallback);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, price: f64, amount: u32) -> CartItem {
        CartItem {
            id: ProductId(id),
            title: format!("Product {}", id),
            price,
            image: format!("{}.jpg", id),
            amount,
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(250.0), "R$\u{a0}250,00");
        assert_eq!(format_price(0.0), "R$\u{a0}0,00");
        assert_eq!(format_price(179.9), "R$\u{a0}179,90");
        assert_eq!(format_price(1250.5), "R$\u{a0}1.250,50");
        assert_eq!(format_price(1234567.891), "R$\u{a0}1.234.567,89");
        assert_eq!(format_price(-12.5), "-R$\u{a0}12,50");
        assert_eq!(format_price(-0.001), "R$\u{a0}0,00");
    }

    #[test]
    fn test_summary_totals() {
        let summary = CartSummary::new(vec![item(1, 100.0, 2), item(2, 50.0, 1)]);

        assert_eq!(summary.total, 250.0);
        assert_eq!(summary.total_formatted, format_price(250.0));
        assert_eq!(summary.lines[0].subtotal_formatted, "R$\u{a0}200,00");
        assert_eq!(summary.lines[0].price_formatted, "R$\u{a0}100,00");
        assert!(summary.lines[0].can_decrement);
        assert!(!summary.lines[1].can_decrement);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::new(vec![]);
        assert!(summary.is_empty());
        assert_eq!(summary.total_formatted, "R$\u{a0}0,00");
        assert!(summary.render_table().contains("(cart is empty)"));
    }

    #[test]
    fn test_render_table() {
        let table = CartSummary::new(vec![item(1, 100.0, 2)]).render_table();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("Product 1 (R$\u{a0}100,00)"));
        assert!(lines[1].contains("R$\u{a0}200,00"));
        assert!(lines[1].ends_with("1.jpg"));
        assert!(lines[2].contains("TOTAL"));
    }
}
