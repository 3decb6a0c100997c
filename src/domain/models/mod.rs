mod auth;
mod gateway;
mod identity;
mod outcome;
mod route;
mod scenario;
mod session;

pub use auth::*;
pub use gateway::*;
pub use identity::*;
pub use outcome::*;
pub use route::*;
pub use scenario::*;
pub use session::*;
