//! Domain layer: value objects, entities, the in-memory presence/room core
//! and the interfaces the core depends on (dependency inversion).

pub mod auth;
pub mod entity;
pub mod error;
pub mod presence;
pub mod pusher;
pub mod rooms;
pub mod store;
pub mod value_object;

pub use auth::AuthService;
pub use entity::{GroupMessage, PrivateMessage, User};
pub use error::{AuthError, MessagePushError, StoreError, ValidationError};
pub use presence::PresenceRegistry;
pub use pusher::{MessagePusher, PusherChannel};
pub use rooms::RoomDirectory;
pub use store::ChatStore;
pub use value_object::{ConnectionId, MessageBody, RoomName, Username};
