pub mod amount_utils;
pub mod time_utils;
