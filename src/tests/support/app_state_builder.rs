use actix_web::web;
use std::sync::Arc;

use crate::auth::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::bucketlist::application::bucketlist_use_cases::BucketlistUseCases;
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    CreateBucketlistUseCase, DeleteBucketlistUseCase, GetBucketlistsUseCase,
    GetSingleBucketlistUseCase, UpdateBucketlistUseCase,
};
use crate::modules::item::application::item_use_cases::ItemUseCases;
use crate::modules::item::application::ports::incoming::use_cases::{
    CreateItemUseCase, DeleteItemUseCase, GetItemsUseCase, GetSingleItemUseCase,
    UpdateItemUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;

/// Every slot starts as a stub that panics when called; tests swap in the
/// use cases their handler actually reaches.
pub struct TestAppStateBuilder {
    register_user: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    bucketlist: BucketlistUseCases,
    item: ItemUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: Arc::new(StubRegisterUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            delete_user: Arc::new(StubDeleteUserUseCase),
            bucketlist: BucketlistUseCases {
                create: Arc::new(StubCreateBucketlistUseCase),
                get_list: Arc::new(StubGetBucketlistsUseCase),
                get_single: Arc::new(StubGetSingleBucketlistUseCase),
                update: Arc::new(StubUpdateBucketlistUseCase),
                delete: Arc::new(StubDeleteBucketlistUseCase),
            },
            item: ItemUseCases {
                create: Arc::new(StubCreateItemUseCase),
                get_list: Arc::new(StubGetItemsUseCase),
                get_single: Arc::new(StubGetSingleItemUseCase),
                update: Arc::new(StubUpdateItemUseCase),
                delete: Arc::new(StubDeleteItemUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user(
        mut self,
        use_case: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_user = Arc::new(use_case);
        self
    }

    pub fn with_login_user(mut self, use_case: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(use_case);
        self
    }

    pub fn with_delete_user(
        mut self,
        use_case: impl IDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_user = Arc::new(use_case);
        self
    }

    pub fn with_create_bucketlist(
        mut self,
        use_case: impl CreateBucketlistUseCase + Send + Sync + 'static,
    ) -> Self {
        self.bucketlist.create = Arc::new(use_case);
        self
    }

    pub fn with_get_bucketlists(
        mut self,
        use_case: impl GetBucketlistsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.bucketlist.get_list = Arc::new(use_case);
        self
    }

    pub fn with_get_single_bucketlist(
        mut self,
        use_case: impl GetSingleBucketlistUseCase + Send + Sync + 'static,
    ) -> Self {
        self.bucketlist.get_single = Arc::new(use_case);
        self
    }

    pub fn with_update_bucketlist(
        mut self,
        use_case: impl UpdateBucketlistUseCase + Send + Sync + 'static,
    ) -> Self {
        self.bucketlist.update = Arc::new(use_case);
        self
    }

    pub fn with_delete_bucketlist(
        mut self,
        use_case: impl DeleteBucketlistUseCase + Send + Sync + 'static,
    ) -> Self {
        self.bucketlist.delete = Arc::new(use_case);
        self
    }

    pub fn with_create_item(mut self, use_case: impl CreateItemUseCase + Send + Sync + 'static) -> Self {
        self.item.create = Arc::new(use_case);
        self
    }

    pub fn with_get_items(mut self, use_case: impl GetItemsUseCase + Send + Sync + 'static) -> Self {
        self.item.get_list = Arc::new(use_case);
        self
    }

    pub fn with_get_single_item(
        mut self,
        use_case: impl GetSingleItemUseCase + Send + Sync + 'static,
    ) -> Self {
        self.item.get_single = Arc::new(use_case);
        self
    }

    pub fn with_update_item(mut self, use_case: impl UpdateItemUseCase + Send + Sync + 'static) -> Self {
        self.item.update = Arc::new(use_case);
        self
    }

    pub fn with_delete_item(mut self, use_case: impl DeleteItemUseCase + Send + Sync + 'static) -> Self {
        self.item.delete = Arc::new(use_case);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_use_case: self.register_user,
            login_user_use_case: self.login_user,
            delete_user_use_case: self.delete_user,
            bucketlist: self.bucketlist,
            item: self.item,
        })
    }
}
