use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::backend::BackendClient;
use crate::model::{CustomerPatch, NewCustomer};

use super::types::*;

pub type CrmqlSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(backend: BackendClient) -> CrmqlSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(backend)
        .finish()
}

/// Schema definition language for the full API.
pub fn sdl(schema: &CrmqlSchema) -> String {
    schema.sdl()
}

/// SDL without a backend attached. Resolvers are never run, so no client or
/// base URL is needed.
pub fn export_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

pub(super) fn backend<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a BackendClient> {
    ctx.data::<BackendClient>()
}

// Object-valued fields are nullable so a failed backend call nulls only that field.

pub struct QueryRoot;

#[Object(name = "RootQueryType")]
impl QueryRoot {
    /// Get a single customer by ID
    async fn customer(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Customer>> {
        let customer = backend(ctx)?.customer(&id).await?;
        Ok(Some(customer.into()))
    }

    /// List all customers
    async fn customers(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Customer>>> {
        let customers = backend(ctx)?.customers().await?;
        Ok(Some(customers.into_iter().map(Customer::from).collect()))
    }

    /// Get a single company by ID
    async fn company(&self, ctx: &Context<'_>, id: String) -> async_graphql::Result<Option<Company>> {
        let company = backend(ctx)?.company(&id).await?;
        Ok(Some(company.into()))
    }

    /// List all companies
    async fn companies(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Company>>> {
        let companies = backend(ctx)?.companies().await?;
        Ok(Some(companies.into_iter().map(Company::from).collect()))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a customer
    async fn add_customer(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
        age: i32,
    ) -> async_graphql::Result<Option<Customer>> {
        let created = backend(ctx)?
            .create_customer(&NewCustomer { name, email, age })
            .await?;
        Ok(Some(created.into()))
    }

    /// Delete a customer, returning the backend's echo of it
    async fn delete_customer(
        &self,
        ctx: &Context<'_>,
        id: String,
    ) -> async_graphql::Result<Option<Customer>> {
        let deleted = backend(ctx)?.delete_customer(&id).await?;
        Ok(Some(deleted.into()))
    }

    /// Update some fields of a customer; omitted fields are left unchanged
    async fn edit_customer(
        &self,
        ctx: &Context<'_>,
        id: String,
        name: Option<String>,
        email: Option<String>,
        age: Option<i32>,
    ) -> async_graphql::Result<Option<Customer>> {
        let patch = CustomerPatch::new(id)
            .with_name(name)
            .with_email(email)
            .with_age(age);
        let updated = backend(ctx)?.update_customer(&patch).await?;
        Ok(Some(updated.into()))
    }
}
