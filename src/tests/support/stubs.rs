//! Use cases that fail loudly if a handler test reaches one it did not set up.

use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::delete_user::{
    DeleteUserError, DeleteUserRequest, IDeleteUserUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterOutcome, RegisterRequest, RegisterUserError,
};
use crate::modules::bucketlist::application::ports::incoming::use_cases::{
    CreateBucketlistError, CreateBucketlistUseCase, DeleteBucketlistError,
    DeleteBucketlistUseCase, GetBucketlistsError, GetBucketlistsUseCase,
    GetSingleBucketlistError, GetSingleBucketlistUseCase, UpdateBucketlistError,
    UpdateBucketlistUseCase,
};
use crate::modules::bucketlist::application::ports::outgoing::{
    BucketlistResult, UpdateBucketlistData,
};
use crate::modules::item::application::ports::incoming::use_cases::{
    CreateItemError, CreateItemUseCase, DeleteItemError, DeleteItemUseCase, GetItemsError,
    GetItemsUseCase, GetSingleItemError, GetSingleItemUseCase, UpdateItemError,
    UpdateItemUseCase,
};
use crate::modules::item::application::ports::outgoing::{ItemResult, UpdateItemData};

// ---------------------------------------------------------------- auth

pub struct StubRegisterUserUseCase;

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUserUseCase {
    async fn execute(
        &self,
        _request: RegisterRequest,
    ) -> Result<RegisterOutcome, RegisterUserError> {
        unimplemented!("register_user not configured for this test")
    }
}

pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("login_user not configured for this test")
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _request: DeleteUserRequest) -> Result<(), DeleteUserError> {
        unimplemented!("delete_user not configured for this test")
    }
}

// ---------------------------------------------------------------- bucketlists

pub struct StubCreateBucketlistUseCase;

#[async_trait]
impl CreateBucketlistUseCase for StubCreateBucketlistUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _name: &str,
    ) -> Result<BucketlistResult, CreateBucketlistError> {
        unimplemented!("create_bucketlist not configured for this test")
    }
}

pub struct StubGetBucketlistsUseCase;

#[async_trait]
impl GetBucketlistsUseCase for StubGetBucketlistsUseCase {
    async fn execute(&self, _owner: UserId) -> Result<Vec<BucketlistResult>, GetBucketlistsError> {
        unimplemented!("get_bucketlists not configured for this test")
    }
}

pub struct StubGetSingleBucketlistUseCase;

#[async_trait]
impl GetSingleBucketlistUseCase for StubGetSingleBucketlistUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
    ) -> Result<BucketlistResult, GetSingleBucketlistError> {
        unimplemented!("get_single_bucketlist not configured for this test")
    }
}

pub struct StubUpdateBucketlistUseCase;

#[async_trait]
impl UpdateBucketlistUseCase for StubUpdateBucketlistUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
        _data: UpdateBucketlistData,
    ) -> Result<BucketlistResult, UpdateBucketlistError> {
        unimplemented!("update_bucketlist not configured for this test")
    }
}

pub struct StubDeleteBucketlistUseCase;

#[async_trait]
impl DeleteBucketlistUseCase for StubDeleteBucketlistUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
    ) -> Result<(), DeleteBucketlistError> {
        unimplemented!("delete_bucketlist not configured for this test")
    }
}

// ---------------------------------------------------------------- items

pub struct StubCreateItemUseCase;

#[async_trait]
impl CreateItemUseCase for StubCreateItemUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
        _name: &str,
    ) -> Result<ItemResult, CreateItemError> {
        unimplemented!("create_item not configured for this test")
    }
}

pub struct StubGetItemsUseCase;

#[async_trait]
impl GetItemsUseCase for StubGetItemsUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
    ) -> Result<Vec<ItemResult>, GetItemsError> {
        unimplemented!("get_items not configured for this test")
    }
}

pub struct StubGetSingleItemUseCase;

#[async_trait]
impl GetSingleItemUseCase for StubGetSingleItemUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
        _item_id: i32,
    ) -> Result<ItemResult, GetSingleItemError> {
        unimplemented!("get_single_item not configured for this test")
    }
}

pub struct StubUpdateItemUseCase;

#[async_trait]
impl UpdateItemUseCase for StubUpdateItemUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
        _item_id: i32,
        _data: UpdateItemData,
    ) -> Result<ItemResult, UpdateItemError> {
        unimplemented!("update_item not configured for this test")
    }
}

pub struct StubDeleteItemUseCase;

#[async_trait]
impl DeleteItemUseCase for StubDeleteItemUseCase {
    async fn execute(
        &self,
        _owner: UserId,
        _bucketlist_id: i32,
        _item_id: i32,
    ) -> Result<(), DeleteItemError> {
        unimplemented!("delete_item not configured for this test")
    }
}
