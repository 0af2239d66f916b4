pub mod avatar;

pub use avatar::{AgentState, AvatarAnimations};
