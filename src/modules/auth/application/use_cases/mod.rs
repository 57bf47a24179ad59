pub mod delete_user;
pub mod login_user;
pub mod register_user;
