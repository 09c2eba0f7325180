//! GraphQL schema and resolvers for crmql.
//!
//! Every field that needs data the parent does not already carry is resolved
//! with exactly one call to the REST backend. Backend failures surface as
//! field-level errors.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! crmql serve --port 4000
//!
//! # Execute a query from CLI
//! crmql query '{ customer(id: "2") { name company { id name } } }'
//!
//! # Execute a mutation from CLI
//! crmql mutate 'addCustomer(name: "Harry White", email: "harry@gmail.com", age: 34) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `customer`, `customers`, `company`, `companies`
//! - **Mutations**: `addCustomer`, `deleteCustomer`, `editCustomer`
//! - **Relations**: `Customer.company`, `Company.customers`

mod schema;
mod server;
mod types;

pub use schema::{CrmqlSchema, MutationRoot, QueryRoot, build_schema, export_sdl, sdl};
pub use server::{router, run_server, serve};
pub use types::*;
