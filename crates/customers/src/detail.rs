use chrono::{DateTime, Utc};

use forgecrm_core::{CustomerId, DetailId, DomainError, DomainResult, Entity};

/// Entity: the one-to-one detail record owned by a customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDetail {
    id: DetailId,
    address: String,
    notes: String,
    customer_id: CustomerId,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl CustomerDetail {
    /// Create a detail record. Address must be non-empty after trim; notes
    /// are optional and stored trimmed.
    pub fn new(
        id: DetailId,
        address: &str,
        notes: &str,
        customer_id: CustomerId,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let mut detail = Self {
            id,
            address: String::new(),
            notes: String::new(),
            customer_id,
            created_at: now,
            updated_at: None,
        };
        detail.apply(address, notes)?;
        Ok(detail)
    }

    pub fn update(&mut self, address: &str, notes: &str, now: DateTime<Utc>) -> DomainResult<()> {
        self.apply(address, notes)?;
        self.updated_at = Some(now);
        Ok(())
    }

    fn apply(&mut self, address: &str, notes: &str) -> DomainResult<()> {
        let address = address.trim();
        if address.is_empty() {
            return Err(DomainError::validation("address cannot be empty"));
        }
        self.address = address.to_string();
        self.notes = notes.trim().to_string();
        Ok(())
    }

    pub fn id_typed(&self) -> DetailId {
        self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for CustomerDetail {
    type Id = DetailId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
