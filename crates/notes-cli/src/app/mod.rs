//! Application context, session and password handling.

mod context;
mod password;
mod session;

pub use context::AppContext;
pub use session::{LoadPolicy, Session};
