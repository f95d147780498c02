//! Custom actions for the Address Book actor.

use crate::model::{Address, AddressDraft, AddressId, AddressPatch};

#[derive(Debug, Clone)]
pub enum AddressAction {
    Add(AddressDraft),
    Update { id: AddressId, patch: AddressPatch },
    Delete(AddressId),
    SetDefault(AddressId),
    /// Checkout-time choice; leaves the default flags alone.
    Select(AddressId),
    GetDefault,
    GetSelected,
    List,
}

/// Results from AddressActions - variants match 1:1 with AddressAction.
///
/// `None` marks an unknown address id, or an empty book for the getters.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressActionResult {
    Add(Address),
    Update(Option<Address>),
    Delete(Option<Address>),
    SetDefault(Option<Address>),
    Select(Option<Address>),
    GetDefault(Option<Address>),
    GetSelected(Option<Address>),
    List(Vec<Address>),
}
