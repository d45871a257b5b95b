pub mod options;
pub mod agent;
pub mod filter;
pub mod call;

pub use options::*;
pub use agent::*;
pub use filter::*;
pub use call::*;
