//! Customer Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::customers::Customer;

/// Wrapper for customers in YAML
#[derive(Debug, Deserialize)]
pub struct CustomersFixture {
    /// Map of customer key -> customer fixture
    pub customers: FxHashMap<String, CustomerFixture>,
}

/// Customer Fixture
#[derive(Debug, Deserialize)]
pub struct CustomerFixture {
    /// Customer name
    pub name: String,
}

impl From<CustomerFixture> for Customer {
    fn from(fixture: CustomerFixture) -> Self {
        Customer { name: fixture.name }
    }
}
