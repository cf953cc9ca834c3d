pub mod time_utils;
pub(crate) mod validation;
