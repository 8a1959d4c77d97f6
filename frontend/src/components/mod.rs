pub mod auth_redirects;
pub mod header;
