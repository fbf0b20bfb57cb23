//! Pure data structures: the cart entity, its line items, and the catalog records
//! returned by the stock service.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
