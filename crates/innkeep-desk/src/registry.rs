//! # Customer Registry
//!
//! In-memory customer store. Identifiers are dense, 1-based, assigned in
//! registration order, and never reused, so the backing `Vec` doubles as the
//! id index.

use tracing::info;

use innkeep_core::validation::{validate_email, validate_guest_name, validate_national_id};
use innkeep_core::{Customer, CustomerId, ValidationError};

/// Stores customers and owns their identity data.
///
/// ## Invariants
/// - Customer ids are `1..=len`, in registration order
/// - A failed registration leaves the store untouched
/// - The VIP flag is only ever flipped true, never back
#[derive(Debug, Default)]
pub struct CustomerRegistry {
    customers: Vec<Customer>,
}

impl CustomerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a customer after validating all identity fields.
    ///
    /// The first offending field is reported and nothing is stored; the id
    /// sequence stays unbroken across failed attempts.
    ///
    /// ## Returns
    /// The stored customer, with its assigned id.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        national_id: &str,
        is_vip: bool,
    ) -> Result<&Customer, ValidationError> {
        validate_guest_name(name)?;
        validate_email(email)?;
        validate_national_id(national_id)?;

        let id = self.customers.len() as CustomerId + 1;
        self.customers.push(Customer {
            id,
            name: name.to_string(),
            national_id: national_id.to_string(),
            email: email.to_string(),
            is_vip,
        });
        info!(customer_id = id, vip = is_vip, "customer registered");

        Ok(&self.customers[id as usize - 1])
    }

    /// Looks up a customer by id. Pure query, no mutation.
    pub fn lookup(&self, id: CustomerId) -> Option<&Customer> {
        id.checked_sub(1)
            .and_then(|index| self.customers.get(index as usize))
    }

    /// Sets the customer's VIP flag.
    ///
    /// Idempotent: a no-op on already-VIP customers and unknown ids.
    ///
    /// ## Returns
    /// `true` if the flag actually changed.
    pub fn promote_to_vip(&mut self, id: CustomerId) -> bool {
        let Some(customer) = id
            .checked_sub(1)
            .and_then(|index| self.customers.get_mut(index as usize))
        else {
            return false;
        };

        if customer.is_vip {
            return false;
        }

        customer.is_vip = true;
        info!(customer_id = id, "customer promoted to VIP");
        true
    }

    /// All customers, in id order.
    pub fn customers(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.iter()
    }

    /// Number of registered customers.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// True iff no customers are registered.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
