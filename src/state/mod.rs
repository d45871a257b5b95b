pub mod dashboard;
pub mod call_form;

pub use dashboard::*;
pub use call_form::*;
