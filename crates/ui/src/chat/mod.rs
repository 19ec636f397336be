/// Author avatar shown beside each chat message.
pub mod avatar;
/// Ambient current-message scope for row decorations.
pub mod context;
pub mod error;
/// Message and role model read by chat components.
pub mod message;

pub use avatar::{
    AVATAR_SIZE, AvatarContent, AvatarKind, AvatarPresentation, AvatarTone, ChatMessageAvatar,
};
pub use context::MessageScope;
pub use error::{AvatarError, AvatarResult};
pub use message::{Message, MessageId, OtherRole, Role};
