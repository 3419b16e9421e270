mod name;
mod question;

pub use name::{PlayerName, is_valid_name};
pub use question::Question;
