mod auth_flow;
mod history;
mod identity_store;
mod interview;
mod loading;
mod navigation;
mod scenario_composer;
mod session_context;
mod session_launch;

pub use auth_flow::*;
pub use history::*;
pub use identity_store::*;
pub use interview::*;
pub use loading::*;
pub use navigation::*;
pub use scenario_composer::*;
pub use session_context::*;
pub use session_launch::*;
