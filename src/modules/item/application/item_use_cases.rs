use std::sync::Arc;

use crate::modules::item::application::ports::incoming::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemsUseCase, GetSingleItemUseCase,
    UpdateItemUseCase,
};

#[derive(Clone)]
pub struct ItemUseCases {
    pub create: Arc<dyn CreateItemUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetItemsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleItemUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateItemUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteItemUseCase + Send + Sync>,
}
