use super::actions::{AddressAction, AddressActionResult};
use super::error::AddressError;
use crate::framework::ActorEntity;
use crate::model::{AddressBook, AddressBookCreate, AddressBookId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for AddressBook {
    type Id = AddressBookId;
    type Create = AddressBookCreate;
    type Action = AddressAction;
    type ActionResult = AddressActionResult;
    type Context = ();
    type Error = AddressError;

    fn from_create_params(
        id: AddressBookId,
        params: AddressBookCreate,
    ) -> Result<Self, AddressError> {
        Ok(AddressBook::new(id, params.owner))
    }

    async fn handle_action(
        &mut self,
        action: AddressAction,
        _ctx: &(),
    ) -> Result<AddressActionResult, AddressError> {
        let result = match action {
            AddressAction::Add(draft) => AddressActionResult::Add(self.add_address(draft)?),
            AddressAction::Update { id, patch } => {
                AddressActionResult::Update(self.update_address(id, patch)?)
            }
            AddressAction::Delete(id) => AddressActionResult::Delete(self.delete_address(id)),
            AddressAction::SetDefault(id) => {
                AddressActionResult::SetDefault(self.set_default_address(id))
            }
            AddressAction::Select(id) => AddressActionResult::Select(self.select_address(id)),
            AddressAction::GetDefault => {
                AddressActionResult::GetDefault(self.default_address().cloned())
            }
            AddressAction::GetSelected => {
                AddressActionResult::GetSelected(self.selected_address().cloned())
            }
            AddressAction::List => AddressActionResult::List(self.addresses().to_vec()),
        };
        Ok(result)
    }
}
