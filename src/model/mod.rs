//! Backend records.
//!
//! These mirror the JSON the REST backend sends and accepts:
//!
//! - [`Customer`]: a customer, optionally linked to a company via `companyId`
//! - [`Company`]: a company
//! - [`NewCustomer`]: the create payload
//! - [`CustomerPatch`]: the partial-update payload

mod company;
mod customer;
mod scalar;

pub use company::Company;
pub use customer::{Customer, CustomerPatch, NewCustomer};
