//! Entity trait implementation for the MenuItem domain type.

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{MenuItem, MenuItemCreate};

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = String;
    type CreateParams = MenuItemCreate;
    type Action = (); // Catalog edits are delete + recreate; no custom actions
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String> {
        Ok(MenuItem::new(
            id,
            params.name,
            params.price,
            params.category,
            params.description,
        ))
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String> {
        Ok(())
    }
}
