use serde_json::Value;

use amlsynth_core::{FieldDefinition, FieldType};

use crate::locale::Locale;
use crate::pool::{CustomerPoolEntry, IdentityPool, customer_id_of};

/// Identity pinned for the record being resolved.
///
/// The resolver never mutates a context in place: each field folds its value
/// into a new context through [`GenerationContext::absorb`], and nested
/// schemas start from the context as it stands when they are reached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationContext {
    pub customer_id: Option<u64>,
    pub account_id: Option<String>,
    pub account_number: Option<String>,
    pub country: Option<Locale>,
    pub selected_customer: Option<CustomerPoolEntry>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country(mut self, country: Locale) -> Self {
        self.country = Some(country);
        self
    }

    pub fn with_customer_id(mut self, customer_id: u64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// Pin a pooled customer; its country (possibly none) becomes the record's.
    pub fn pin_customer(mut self, customer: CustomerPoolEntry) -> Self {
        self.country = customer.country;
        self.selected_customer = Some(customer);
        self
    }

    /// Fold one generated field into the context.
    ///
    /// `customerId` pins the customer (and, for a pool reference, the pooled
    /// customer's country), `accountNumber` pins both account number and
    /// account id, and `uuid` pins the account id only while none is set.
    pub fn absorb(mut self, field: &FieldDefinition, value: &Value, pool: &IdentityPool) -> Self {
        match field.name.as_str() {
            "customerId" => {
                if let Some(customer_id) = customer_id_of(value).filter(|id| *id != 0) {
                    self.customer_id = Some(customer_id);
                    if field.field_type == FieldType::CustomerIdRef {
                        if let Some(country) = pool.customer(customer_id).and_then(|c| c.country) {
                            self.country = Some(country);
                        }
                    }
                }
            }
            "accountNumber" => {
                if let Some(number) = non_empty_text(value) {
                    self.account_number = Some(number.clone());
                    self.account_id = Some(number);
                }
            }
            "uuid" => {
                if self.account_id.is_none() {
                    self.account_id = non_empty_text(value);
                }
            }
            _ => {}
        }
        self
    }
}

fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str, field_type: FieldType) -> FieldDefinition {
        FieldDefinition::new(name, field_type)
    }

    #[test]
    fn customer_ref_inherits_pooled_country() {
        let mut pool = IdentityPool::in_memory();
        pool.upsert_customer(CustomerPoolEntry::new(500123).with_country(Locale::Us))
            .expect("upsert");

        let ctx = GenerationContext::new().with_country(Locale::Bd).absorb(
            &field("customerId", FieldType::CustomerIdRef),
            &json!(500123),
            &pool,
        );
        assert_eq!(ctx.customer_id, Some(500123));
        assert_eq!(ctx.country, Some(Locale::Us));
    }

    #[test]
    fn minted_customer_id_keeps_country() {
        let pool = IdentityPool::in_memory();
        let ctx = GenerationContext::new().with_country(Locale::Bd).absorb(
            &field("customerId", FieldType::CustomerId),
            &json!(123456),
            &pool,
        );
        assert_eq!(ctx.customer_id, Some(123456));
        assert_eq!(ctx.country, Some(Locale::Bd));
    }

    #[test]
    fn uuid_only_seeds_unset_account_id() {
        let pool = IdentityPool::in_memory();
        let uuid = field("uuid", FieldType::Uuid);
        let ctx = GenerationContext::new().absorb(&uuid, &json!("u-1"), &pool);
        assert_eq!(ctx.account_id.as_deref(), Some("u-1"));

        let ctx = ctx
            .absorb(&field("accountNumber", FieldType::AccountNumber), &json!("12345678"), &pool)
            .absorb(&uuid, &json!("u-2"), &pool);
        assert_eq!(ctx.account_id.as_deref(), Some("12345678"));
        assert_eq!(ctx.account_number.as_deref(), Some("12345678"));
    }

    #[test]
    fn unrelated_fields_leave_context_unchanged() {
        let pool = IdentityPool::in_memory();
        let before = GenerationContext::new().with_customer_id(7);
        let after = before
            .clone()
            .absorb(&field("email", FieldType::Email), &json!("a@b.c"), &pool);
        assert_eq!(before, after);
    }
}
