use crate::model::error::AddressError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Address Books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressBookId(pub u32);

impl From<u32> for AddressBookId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AddressBookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "book_{}", self.0)
    }
}

/// Identifier of one saved address, unique within its book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub u32);

impl Display for AddressId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "addr_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

/// A saved delivery address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub name: String,
    pub phone: String,
    pub house_no: String,
    pub area: String,
    pub landmark: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    #[serde(rename = "type")]
    pub kind: AddressKind,
    pub is_default: bool,
}

/// Payload for adding an address. The id is assigned by the book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDraft {
    pub name: String,
    pub phone: String,
    pub house_no: String,
    pub area: String,
    pub landmark: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub kind: AddressKind,
    pub is_default: bool,
}

/// Partial update of an address. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub house_no: Option<String>,
    pub area: Option<String>,
    /// `Some(None)` clears the landmark.
    pub landmark: Option<Option<String>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pincode: Option<String>,
    pub kind: Option<AddressKind>,
    pub is_default: Option<bool>,
}

impl Address {
    fn from_draft(id: AddressId, draft: AddressDraft) -> Self {
        Self {
            id,
            name: draft.name,
            phone: draft.phone,
            house_no: draft.house_no,
            area: draft.area,
            landmark: draft.landmark,
            city: draft.city,
            state: draft.state,
            pincode: draft.pincode,
            kind: draft.kind,
            is_default: draft.is_default,
        }
    }

    /// Copy of `self` with every field set in `patch` replaced.
    fn patched(&self, patch: AddressPatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(phone) = patch.phone {
            next.phone = phone;
        }
        if let Some(house_no) = patch.house_no {
            next.house_no = house_no;
        }
        if let Some(area) = patch.area {
            next.area = area;
        }
        if let Some(landmark) = patch.landmark {
            next.landmark = landmark;
        }
        if let Some(city) = patch.city {
            next.city = city;
        }
        if let Some(state) = patch.state {
            next.state = state;
        }
        if let Some(pincode) = patch.pincode {
            next.pincode = pincode;
        }
        if let Some(kind) = patch.kind {
            next.kind = kind;
        }
        next
    }

    /// Checks the same rules as the address form.
    pub fn validate(&self) -> Result<(), AddressError> {
        let required = [
            ("name", &self.name),
            ("house_no", &self.house_no),
            ("area", &self.area),
            ("city", &self.city),
            ("state", &self.state),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AddressError::Validation {
                field: *field,
                reason: "must not be blank",
            });
        }
        if self.phone.trim().chars().count() < 10 {
            return Err(AddressError::Validation {
                field: "phone",
                reason: "must have at least 10 characters",
            });
        }
        let pincode = self.pincode.trim();
        if pincode.len() != 6 || !pincode.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddressError::Validation {
                field: "pincode",
                reason: "must be exactly 6 digits",
            });
        }
        Ok(())
    }
}

/// Payload for creating a new address book.
#[derive(Debug, Clone, Default)]
pub struct AddressBookCreate {
    pub owner: Option<String>,
}

/// A customer's saved addresses with one default and one checkout selection.
///
/// Whenever the book is non-empty exactly one address has `is_default` set.
/// Every operation rewrites the default flags of the whole collection in one
/// step, and the book is only reachable through its actor, so no reader ever
/// sees two defaults or none.
///
/// The selection is kept as an id, so it always resolves to the current
/// (possibly patched) entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressBook {
    pub id: AddressBookId,
    pub owner: Option<String>,
    addresses: Vec<Address>,
    selected: Option<AddressId>,
    next_address_seq: u32,
}

impl AddressBook {
    pub fn new(id: AddressBookId, owner: Option<String>) -> Self {
        Self {
            id,
            owner,
            addresses: Vec::new(),
            selected: None,
            next_address_seq: 1,
        }
    }

    pub fn addresses(&self) -> &[Address] {
        &self.addresses
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn get(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    /// Adds an address. The first address, or one marked default, becomes the
    /// default and the current selection.
    pub fn add_address(&mut self, draft: AddressDraft) -> Result<Address, AddressError> {
        let id = AddressId(self.next_address_seq);
        let mut address = Address::from_draft(id, draft);
        address.validate()?;
        self.next_address_seq += 1;

        address.is_default = address.is_default || self.addresses.is_empty();
        self.addresses.push(address.clone());
        if address.is_default {
            promote(&mut self.addresses, id);
            self.selected = Some(id);
        }
        Ok(address)
    }

    /// Merges `patch` into an address; `None` if the id is unknown.
    ///
    /// `is_default: Some(true)` moves the default here. `Some(false)` on the
    /// current default is ignored: the default can only move by promoting
    /// another address.
    pub fn update_address(
        &mut self,
        id: AddressId,
        patch: AddressPatch,
    ) -> Result<Option<Address>, AddressError> {
        let Some(index) = self.addresses.iter().position(|a| a.id == id) else {
            return Ok(None);
        };
        let make_default = patch.is_default == Some(true);
        let updated = self.addresses[index].patched(patch);
        updated.validate()?;

        self.addresses[index] = updated;
        if make_default {
            promote(&mut self.addresses, id);
        }
        Ok(self.get(id).cloned())
    }

    /// Removes an address.
    ///
    /// If it was the default, the first remaining address becomes default and is
    /// selected. If it was only selected, the selection moves to the first
    /// remaining address, or is cleared when none remain.
    pub fn delete_address(&mut self, id: AddressId) -> Option<Address> {
        let index = self.addresses.iter().position(|a| a.id == id)?;
        let removed = self.addresses.remove(index);
        let first = self.addresses.first().map(|a| a.id);

        if removed.is_default {
            if let Some(first) = first {
                promote(&mut self.addresses, first);
                self.selected = Some(first);
            }
        }
        if self.selected == Some(id) {
            self.selected = first;
        }
        Some(removed)
    }

    /// Makes `id` the only default. Unknown ids are ignored.
    pub fn set_default_address(&mut self, id: AddressId) -> Option<Address> {
        self.get(id)?;
        promote(&mut self.addresses, id);
        self.get(id).cloned()
    }

    /// Chooses the checkout address without touching default flags.
    pub fn select_address(&mut self, id: AddressId) -> Option<Address> {
        let address = self.get(id)?.clone();
        self.selected = Some(id);
        Some(address)
    }

    pub fn selected_address(&self) -> Option<&Address> {
        self.selected.and_then(|id| self.get(id))
    }

    /// The default address, falling back to the first one.
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

/// Rewrites the default flag of every address so that only `id` holds it.
fn promote(addresses: &mut [Address], id: AddressId) {
    for address in addresses.iter_mut() {
        address.is_default = address.id == id;
    }
}
