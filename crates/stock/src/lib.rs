pub mod part;
pub mod inventory;
