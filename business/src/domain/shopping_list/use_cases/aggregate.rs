use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::shared::value_objects::UserId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct AggregateShoppingListParams {
    pub plan_id: Uuid,
    pub user_id: UserId,
}

#[async_trait]
pub trait AggregateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AggregateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
