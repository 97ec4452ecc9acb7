pub mod results;
pub mod script;
