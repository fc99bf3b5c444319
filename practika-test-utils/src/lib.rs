pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod token;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
