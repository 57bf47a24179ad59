mod delete_user;
mod login_user;
mod logout_user;
mod register_user;

pub use delete_user::{__path_delete_user_handler, delete_user_handler, DeleteUserQuery};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse};
pub use logout_user::{__path_logout_user_handler, logout_user_handler};
pub use register_user::{
    __path_register_user_handler, register_user_handler, RegisterUserRequest, RegisterUserResponse,
    RegisteredUser,
};
