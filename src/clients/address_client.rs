//! # Address Client
//!
//! High-level API for the `AddressBook` actor.
use crate::address_actor::{AddressAction, AddressActionResult, AddressError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    Address, AddressBook, AddressBookCreate, AddressBookId, AddressDraft, AddressId, AddressPatch,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Address Book actor.
#[derive(Clone)]
pub struct AddressClient {
    inner: ResourceClient<AddressBook>,
}

#[async_trait]
impl ActorClient<AddressBook> for AddressClient {
    type Error = AddressError;

    fn inner(&self) -> &ResourceClient<AddressBook> {
        &self.inner
    }

    fn map_error(e: FrameworkError<AddressError>) -> Self::Error {
        AddressError::from(e)
    }
}

impl AddressClient {
    pub fn new(inner: ResourceClient<AddressBook>) -> Self {
        Self { inner }
    }

    async fn act(
        &self,
        book: AddressBookId,
        action: AddressAction,
    ) -> Result<AddressActionResult, AddressError> {
        self.inner
            .perform_action(book, action)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn create_book(&self, owner: Option<String>) -> Result<AddressBookId, AddressError> {
        debug!("Sending request");
        self.inner
            .create(AddressBookCreate { owner })
            .await
            .map(|book| book.id)
            .map_err(Self::map_error)
    }

    /// Adds an address. The first one, or one marked default, becomes the
    /// default and the selection.
    #[instrument(skip(self, draft))]
    pub async fn add_address(
        &self,
        book: AddressBookId,
        draft: AddressDraft,
    ) -> Result<Address, AddressError> {
        debug!("Sending request");
        match self.act(book, AddressAction::Add(draft)).await? {
            AddressActionResult::Add(address) => Ok(address),
            _ => unreachable!("Add action must return Add result"),
        }
    }

    #[instrument(skip(self, patch))]
    pub async fn update_address(
        &self,
        book: AddressBookId,
        id: AddressId,
        patch: AddressPatch,
    ) -> Result<Option<Address>, AddressError> {
        debug!("Sending request");
        match self.act(book, AddressAction::Update { id, patch }).await? {
            AddressActionResult::Update(address) => Ok(address),
            _ => unreachable!("Update action must return Update result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_address(
        &self,
        book: AddressBookId,
        id: AddressId,
    ) -> Result<Option<Address>, AddressError> {
        debug!("Sending request");
        match self.act(book, AddressAction::Delete(id)).await? {
            AddressActionResult::Delete(address) => Ok(address),
            _ => unreachable!("Delete action must return Delete result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn set_default_address(
        &self,
        book: AddressBookId,
        id: AddressId,
    ) -> Result<Option<Address>, AddressError> {
        debug!("Sending request");
        match self.act(book, AddressAction::SetDefault(id)).await? {
            AddressActionResult::SetDefault(address) => Ok(address),
            _ => unreachable!("SetDefault action must return SetDefault result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn select_address(
        &self,
        book: AddressBookId,
        id: AddressId,
    ) -> Result<Option<Address>, AddressError> {
        debug!("Sending request");
        match self.act(book, AddressAction::Select(id)).await? {
            AddressActionResult::Select(address) => Ok(address),
            _ => unreachable!("Select action must return Select result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_default_address(
        &self,
        book: AddressBookId,
    ) -> Result<Option<Address>, AddressError> {
        match self.act(book, AddressAction::GetDefault).await? {
            AddressActionResult::GetDefault(address) => Ok(address),
            _ => unreachable!("GetDefault action must return GetDefault result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_selected_address(
        &self,
        book: AddressBookId,
    ) -> Result<Option<Address>, AddressError> {
        match self.act(book, AddressAction::GetSelected).await? {
            AddressActionResult::GetSelected(address) => Ok(address),
            _ => unreachable!("GetSelected action must return GetSelected result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_addresses(&self, book: AddressBookId) -> Result<Vec<Address>, AddressError> {
        match self.act(book, AddressAction::List).await? {
            AddressActionResult::List(addresses) => Ok(addresses),
            _ => unreachable!("List action must return List result"),
        }
    }
}
