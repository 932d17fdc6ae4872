pub mod footer;
pub mod logo;
pub mod nav;
