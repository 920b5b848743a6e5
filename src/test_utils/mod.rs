pub mod diag;
pub mod fonts;
pub mod log;
pub mod temp;
