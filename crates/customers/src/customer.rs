use chrono::{DateTime, Utc};

use forgecrm_core::{CustomerId, DomainError, DomainResult, Entity};

use crate::detail::CustomerDetail;

/// Entity: a customer with contact details and an optional detail record.
///
/// All writes go through validating constructors/update methods; the fields
/// themselves stay private so an invalid customer cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: CustomerId,
    name: String,
    email: String,
    phone: String,
    detail: Option<CustomerDetail>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Customer {
    /// Create a new customer.
    ///
    /// Name, email, and phone are trimmed and must be non-empty afterwards.
    /// The email is stored lower-cased.
    pub fn new(
        id: CustomerId,
        name: &str,
        email: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<Self> {
        let (name, email, phone) = normalize_contact(name, email, phone)?;
        Ok(Self {
            id,
            name,
            email,
            phone,
            detail: None,
            created_at: now,
            updated_at: None,
        })
    }

    /// Re-validate and replace name/email/phone in one step.
    pub fn update(
        &mut self,
        name: &str,
        email: &str,
        phone: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        let (name, email, phone) = normalize_contact(name, email, phone)?;
        self.name = name;
        self.email = email;
        self.phone = phone;
        self.updated_at = Some(now);
        Ok(())
    }

    /// Attach or replace the customer's detail record.
    pub fn set_detail(&mut self, detail: CustomerDetail, now: DateTime<Utc>) {
        self.detail = Some(detail);
        self.updated_at = Some(now);
    }

    pub fn id_typed(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn detail(&self) -> Option<&CustomerDetail> {
        self.detail.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn normalize_contact(
    name: &str,
    email: &str,
    phone: &str,
) -> DomainResult<(String, String, String)> {
    let name = name.trim();
    let email = email.trim();
    let phone = phone.trim();

    if name.is_empty() {
        return Err(DomainError::validation("name cannot be empty"));
    }
    if email.is_empty() {
        return Err(DomainError::validation("email cannot be empty"));
    }
    if phone.is_empty() {
        return Err(DomainError::validation("phone cannot be empty"));
    }

    Ok((name.to_string(), email.to_lowercase(), phone.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_time() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn new_trims_fields_and_lowercases_email() {
        let customer = Customer::new(
            CustomerId::new(),
            "  Ada Lovelace ",
            " Ada@Example.COM ",
            " 555-0100 ",
            test_time(),
        )
        .unwrap();

        assert_eq!(customer.name(), "Ada Lovelace");
        assert_eq!(customer.email(), "ada@example.com");
        assert_eq!(customer.phone(), "555-0100");
        assert!(customer.updated_at().is_none());
    }

    #[test]
    fn new_rejects_blank_fields() {
        for (name, email, phone) in [
            ("   ", "a@b.com", "555"),
            ("Ada", "  ", "555"),
            ("Ada", "a@b.com", "\t"),
        ] {
            let err = Customer::new(CustomerId::new(), name, email, phone, test_time()).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn update_revalidates_and_stamps_updated_at() {
        let mut customer =
            Customer::new(CustomerId::new(), "Ada", "a@b.com", "555", test_time()).unwrap();

        let now = test_time();
        customer.update("Grace", "Grace@Example.com", "555-0101", now).unwrap();
        assert_eq!(customer.name(), "Grace");
        assert_eq!(customer.email(), "grace@example.com");
        assert_eq!(customer.updated_at(), Some(now));

        let err = customer.update("", "x@y.com", "555", test_time()).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        // Failed update leaves state untouched.
        assert_eq!(customer.name(), "Grace");
    }

    #[test]
    fn set_detail_replaces_existing_detail() {
        let mut customer =
            Customer::new(CustomerId::new(), "Ada", "a@b.com", "555", test_time()).unwrap();
        let id = customer.id_typed();

        let first =
            CustomerDetail::new(Default::default(), "1 Main St", "", id, test_time()).unwrap();
        let second =
            CustomerDetail::new(Default::default(), "2 Side Ave", "moved", id, test_time()).unwrap();

        customer.set_detail(first, test_time());
        customer.set_detail(second.clone(), test_time());
        assert_eq!(customer.detail(), Some(&second));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: stored email is always trimmed and lower-cased.
            #[test]
            fn email_is_normalized(
                local in "[A-Za-z0-9]{1,16}",
                domain in "[A-Za-z0-9]{1,16}",
                pad in " {0,3}"
            ) {
                let raw = format!("{pad}{local}@{domain}.COM{pad}");
                let customer = Customer::new(
                    CustomerId::new(),
                    "Name",
                    &raw,
                    "555",
                    Utc::now(),
                ).unwrap();

                prop_assert_eq!(customer.email(), raw.trim().to_lowercase());
            }

            /// Property: a failed update never changes observable state.
            #[test]
            fn failed_update_is_a_noop(name in "[A-Za-z][A-Za-z ]{0,40}") {
                let mut customer = Customer::new(
                    CustomerId::new(),
                    &name,
                    "a@b.com",
                    "555",
                    Utc::now(),
                ).unwrap();
                let before = customer.clone();

                prop_assert!(customer.update("", "", "", Utc::now()).is_err());
                prop_assert_eq!(customer, before);
            }
        }
    }
}
