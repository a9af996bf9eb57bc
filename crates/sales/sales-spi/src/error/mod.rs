//! Error module containing schema errors and row rejections

mod rejection;
mod sales_error;

pub use rejection::{RejectionReason, RowRejection};
pub use sales_error::{Result, SalesError};
