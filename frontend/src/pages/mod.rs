pub mod admin;
pub mod auth_callback;
pub mod home;
pub mod not_found;
pub mod reset_password;
pub mod results;
pub mod settings;
pub mod survey;
