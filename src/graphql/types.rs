use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::backend;
use crate::model;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Customer {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,

    #[graphql(skip)]
    pub company_id: Option<String>,
}

#[ComplexObject]
impl Customer {
    /// The company this customer belongs to
    async fn company(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Company>> {
        let Some(company_id) = self.company_id.as_deref() else {
            return Ok(None);
        };
        let company = backend(ctx)?.company(company_id).await?;
        Ok(Some(company.into()))
    }
}

impl From<model::Customer> for Customer {
    fn from(c: model::Customer) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            age: c.age,
            company_id: c.company_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Company {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

#[ComplexObject]
impl Company {
    /// Customers employed by this company
    async fn customers(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Customer>>> {
        let Some(id) = self.id.as_deref() else {
            return Ok(None);
        };
        let customers = backend(ctx)?.company_customers(id).await?;
        Ok(Some(customers.into_iter().map(Customer::from).collect()))
    }
}

impl From<model::Company> for Company {
    fn from(c: model::Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
        }
    }
}
