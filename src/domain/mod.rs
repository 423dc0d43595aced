pub mod activity;
pub mod errors;
pub mod site;
