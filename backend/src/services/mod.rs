pub mod assessment;
pub mod roles;
