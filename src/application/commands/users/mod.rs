// src/application/commands/users/mod.rs
mod login;
mod password;
mod refresh;
mod register;
mod service;

pub use login::{LoginResult, LoginUserCommand};
pub use refresh::RefreshTokenCommand;
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
