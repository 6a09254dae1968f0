//! # FxYield Core
//!
//! Core types for analysing a fixed-coupon bond bought in a foreign
//! (local) currency and redeemed back into the investor's currency.
//!
//! This crate provides:
//!
//! - **BondSpec**: validated bond parameters built through [`BondSpecBuilder`]
//! - **Errors**: the closed [`FxError`] taxonomy shared by every FxYield crate
//!
//! ## Example
//!
//! ```rust
//! use fxyield_core::prelude::*;
//!
//! let spec = BondSpec::builder()
//!     .coupon_rate(9.85)?
//!     .nominal_yield_rate(19.70)?
//!     .duration_years(2.5)?
//!     .build()?;
//! assert_eq!(spec.nominal_yield_rate(), 19.70);
//! # Ok::<(), FxError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]

pub mod bond_spec;
pub mod error;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bond_spec::{BondSpec, BondSpecBuilder};
    pub use crate::error::{FxError, FxResult};
}

// Re-export commonly used types at crate root
pub use bond_spec::{BondSpec, BondSpecBuilder};
pub use error::{ensure_positive, FxError, FxResult};
