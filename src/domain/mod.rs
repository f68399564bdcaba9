pub mod error;
pub mod id;
pub mod track;
pub(crate) mod validate;
