pub use crate::endpoint::EndpointContainer;
pub use crate::error::*;
pub use crate::event::Event;
pub use crate::model::channel::Channel;
pub use crate::model::message::{Message, MessageKind};
pub use crate::model::user::{Color, User};
