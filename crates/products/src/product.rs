use chrono::{DateTime, Utc};

use forgecrm_core::{CustomerId, DomainError, DomainResult, Entity, ProductId};

/// Entity: a product, optionally owned by a customer.
///
/// Prices are integer cents to avoid floating-point money. Price and stock
/// are signed so that negative inputs are representable at the boundary and
/// rejected here rather than silently wrapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    id: ProductId,
    name: String,
    description: String,
    price_cents: i64,
    stock: i64,
    customer_id: Option<CustomerId>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl ProductDetail {
    pub fn new(
        id: ProductId,
        name: &str,
        description: &str,
        price_cents: i64,
        stock: i64,
        customer_id: Option<CustomerId>,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let mut product = Self {
            id,
            name: String::new(),
            description: String::new(),
            price_cents: 0,
            stock: 0,
            customer_id,
            created_at: now,
            updated_at: None,
        };
        product.apply(name, description, price_cents, stock)?;
        Ok(product)
    }

    /// Re-validate and replace all mutable fields except ownership.
    pub fn update(
        &mut self,
        name: &str,
        description: &str,
        price_cents: i64,
        stock: i64,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        self.apply(name, description, price_cents, stock)?;
        self.updated_at = Some(now);
        Ok(())
    }

    fn apply(
        &mut self,
        name: &str,
        description: &str,
        price_cents: i64,
        stock: i64,
    ) -> DomainResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if price_cents < 0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        if stock < 0 {
            return Err(DomainError::validation("stock cannot be negative"));
        }

        self.name = name.to_string();
        self.description = description.trim().to_string();
        self.price_cents = price_cents;
        self.stock = stock;
        Ok(())
    }

    /// Assign ownership to a customer (reassignment allowed).
    pub fn assign_to_customer(&mut self, customer_id: CustomerId, now: DateTime<Utc>) {
        self.customer_id = Some(customer_id);
        self.updated_at = Some(now);
    }

    /// Clear ownership; the product itself survives.
    pub fn unassign_from_customer(&mut self, now: DateTime<Utc>) {
        self.customer_id = None;
        self.updated_at = Some(now);
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price_cents(&self) -> i64 {
        self.price_cents
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for ProductDetail {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
