pub mod kind;
pub mod record;

pub use kind::Kind;
pub use record::Record;
