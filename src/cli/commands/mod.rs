//! Command implementations

mod init;
mod same_name;
mod show;
mod validate;

pub use init::init;
pub use same_name::same_name;
pub use show::show;
pub use validate::validate;
