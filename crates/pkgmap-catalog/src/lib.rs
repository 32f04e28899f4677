//! Argument catalog input for pkgmap.
//!
//! Reads rows exported from the remote routine-argument metadata view (one
//! JSON object per row, column names as keys) and hands the rows of one
//! package to the generator in position order.
//!
//! # Examples
//!
//! ```no_run
//! use pkgmap_catalog::Catalog;
//!
//! # async fn example() -> pkgmap_core::Result<()> {
//! let catalog = Catalog::load_file("arguments.json").await?;
//! let rows = catalog.for_package("APP", "ORDERS_PKG");
//! println!("{} rows", rows.len());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod catalog;
mod row;

pub use catalog::{Catalog, MAX_CATALOG_SIZE};
pub use row::ArgumentRow;
