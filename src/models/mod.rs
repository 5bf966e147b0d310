//! QuickBooks API model types.

mod common;
mod enums;
mod purchase;
mod sales_receipt;

pub use common::*;
pub use enums::*;
pub use purchase::*;
pub use sales_receipt::*;
