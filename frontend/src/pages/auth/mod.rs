pub mod login;
pub mod repository;
pub mod signup;
pub mod verify;
