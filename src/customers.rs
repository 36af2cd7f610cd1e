//! Customers

use slotmap::new_key_type;

new_key_type! {
    /// Customer Key
    pub struct CustomerKey;
}

/// A moviegoer making a reservation.
///
/// The fee engine never inspects the customer; it is carried through into
/// the reservation unmodified.
#[derive(Debug, Clone)]
pub struct Customer {
    /// Customer name
    pub name: String,
}
