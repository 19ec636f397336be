use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::{ActiveTheme, Icon, Theme};

use crate::assets::{LOGO_ASSET_PATH, USER_SEARCH_ICON_PATH};
use crate::chat::context::MessageScope;
use crate::chat::error::AvatarResult;
use crate::chat::message::{Message, Role};

/// Outer edge of every avatar box, independent of role.
pub const AVATAR_SIZE: f32 = 32.0;
pub const USER_GLYPH_SIZE: f32 = 16.0;
pub const LOGO_SIZE: f32 = 24.0;
pub const LOGO_ALT_TEXT: &str = "Bolueta Logo";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarKind {
    User,
    Assistant,
}

/// Color slot resolved against the active theme at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AvatarTone {
    /// Theme background.
    Background,
    /// Theme foreground.
    Foreground,
    /// Solid black regardless of theme mode.
    Inverted,
    /// Solid white, for content drawn over `Inverted`.
    OnInverted,
}

impl AvatarTone {
    pub fn resolve(self, theme: &Theme) -> Hsla {
        match self {
            Self::Background => theme.background,
            Self::Foreground => theme.foreground,
            Self::Inverted => black(),
            Self::OnInverted => white(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AvatarContent {
    /// Monochrome icon tinted with the avatar foreground.
    Glyph { path: &'static str, size: f32 },
    /// Bitmap image. `alt` describes it for readers that cannot see it.
    ///
    /// `eager` asks for the asset to be fetched on the first frame the avatar
    /// appears in; GPUI image elements start loading on first paint, so eager
    /// bitmaps are painted directly without a deferred placeholder.
    Bitmap {
        path: &'static str,
        width: f32,
        height: f32,
        alt: &'static str,
        eager: bool,
    },
}

/// Immutable description of one avatar, built fresh for every render.
#[derive(Debug, Clone, PartialEq)]
pub struct AvatarPresentation {
    pub kind: AvatarKind,
    pub size: f32,
    pub bordered: bool,
    pub background: AvatarTone,
    pub foreground: AvatarTone,
    pub content: AvatarContent,
}

impl AvatarPresentation {
    /// Maps an author role to its avatar.
    ///
    /// Only `Role::User` gets the user avatar; every other role, including ones
    /// the backend may add later, renders as the assistant.
    pub fn for_role(role: &Role) -> Self {
        match role {
            Role::User => Self::user(),
            Role::Assistant | Role::System | Role::Other(_) => Self::assistant(),
        }
    }

    pub fn for_message(message: &Message) -> Self {
        Self::for_role(&message.role)
    }

    pub fn user() -> Self {
        Self {
            kind: AvatarKind::User,
            size: AVATAR_SIZE,
            bordered: true,
            background: AvatarTone::Background,
            foreground: AvatarTone::Foreground,
            content: AvatarContent::Glyph {
                path: USER_SEARCH_ICON_PATH,
                size: USER_GLYPH_SIZE,
            },
        }
    }

    pub fn assistant() -> Self {
        Self {
            kind: AvatarKind::Assistant,
            size: AVATAR_SIZE,
            bordered: true,
            background: AvatarTone::Inverted,
            foreground: AvatarTone::OnInverted,
            content: AvatarContent::Bitmap {
                path: LOGO_ASSET_PATH,
                width: LOGO_SIZE,
                height: LOGO_SIZE,
                alt: LOGO_ALT_TEXT,
                eager: true,
            },
        }
    }

    /// Returns the bitmap path when this avatar requests an image asset.
    pub fn requested_asset(&self) -> Option<&'static str> {
        match self.content {
            AvatarContent::Bitmap { path, .. } => Some(path),
            AvatarContent::Glyph { .. } => None,
        }
    }
}

/// Author badge shown next to a chat message.
#[derive(IntoElement)]
pub struct ChatMessageAvatar {
    presentation: AvatarPresentation,
}

impl ChatMessageAvatar {
    pub fn new(message: &Message) -> Self {
        let presentation = AvatarPresentation::for_message(message);
        tracing::debug!(
            "avatar for message {} with role `{}`: {:?}",
            message.id.0,
            message.role,
            presentation.kind
        );
        Self { presentation }
    }

    /// Builds the avatar for the message currently installed in [`MessageScope`].
    ///
    /// Rendering an avatar outside a message row is a host bug, so there is no
    /// fallback avatar; the error goes back to the caller.
    pub fn from_scope(cx: &App) -> AvatarResult<Self> {
        let message = MessageScope::read(cx).inspect_err(|error| {
            tracing::warn!("cannot build chat avatar: {}", error);
        })?;
        Ok(Self::new(message))
    }

    pub fn presentation(&self) -> &AvatarPresentation {
        &self.presentation
    }
}

impl RenderOnce for ChatMessageAvatar {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let theme = cx.theme();
        let presentation = self.presentation;
        let background = presentation.background.resolve(theme);
        let foreground = presentation.foreground.resolve(theme);

        let content = match presentation.content {
            AvatarContent::Glyph { path, size } => Icon::empty()
                .path(path)
                .size(px(size))
                .text_color(foreground)
                .into_any_element(),
            AvatarContent::Bitmap {
                path,
                width,
                height,
                ..
            } => img(path)
                .w(px(width))
                .h(px(height))
                .rounded_md()
                .object_fit(ObjectFit::Contain)
                .into_any_element(),
        };

        div()
            .flex()
            .flex_shrink_0()
            .size(px(presentation.size))
            .items_center()
            .justify_center()
            .rounded_md()
            .when(presentation.bordered, |el| {
                el.border_1().border_color(theme.border)
            })
            .bg(background)
            .text_color(foreground)
            .shadow_sm()
            .child(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::message::MessageId;

    #[::core::prelude::v1::test]
    fn user_role_gets_bordered_glyph_avatar() {
        let avatar = ChatMessageAvatar::new(&Message::user(MessageId::new(1), "enciende la luz"));
        let presentation = avatar.presentation();

        assert_eq!(presentation.kind, AvatarKind::User);
        assert!(presentation.bordered);
        assert_eq!(presentation.background, AvatarTone::Background);
        assert_eq!(
            presentation.content,
            AvatarContent::Glyph {
                path: USER_SEARCH_ICON_PATH,
                size: USER_GLYPH_SIZE,
            }
        );
        assert_eq!(presentation.requested_asset(), None);
    }

    #[::core::prelude::v1::test]
    fn assistant_role_gets_eager_logo() {
        let presentation = AvatarPresentation::for_role(&Role::Assistant);

        assert_eq!(presentation.kind, AvatarKind::Assistant);
        assert_eq!(presentation.background, AvatarTone::Inverted);
        assert_eq!(presentation.foreground, AvatarTone::OnInverted);
        assert_eq!(
            presentation.content,
            AvatarContent::Bitmap {
                path: LOGO_ASSET_PATH,
                width: 24.0,
                height: 24.0,
                alt: "Bolueta Logo",
                eager: true,
            }
        );
        assert_eq!(presentation.requested_asset(), Some(LOGO_ASSET_PATH));
    }

    #[::core::prelude::v1::test]
    fn every_non_user_role_renders_as_assistant() {
        let assistant = AvatarPresentation::for_role(&Role::Assistant);

        for raw in ["system", "tool", "function", "memory", "", "User"] {
            assert_eq!(
                AvatarPresentation::for_role(&Role::parse(raw)),
                assistant,
                "role `{raw}`"
            );
        }
    }

    #[::core::prelude::v1::test]
    fn avatar_is_stable_across_a_wire_round_trip() {
        for raw in ["user", "assistant", "system", "tool"] {
            let message = Message::new(MessageId::new(9), raw, "");
            let wire = serde_json::to_string(&message).unwrap();
            let decoded: Message = serde_json::from_str(&wire).unwrap();

            assert_eq!(
                AvatarPresentation::for_message(&decoded),
                AvatarPresentation::for_message(&message),
                "role `{raw}`"
            );
        }
    }

    #[::core::prelude::v1::test]
    fn outer_size_does_not_depend_on_role() {
        assert_eq!(AvatarPresentation::user().size, AVATAR_SIZE);
        assert_eq!(AvatarPresentation::assistant().size, AVATAR_SIZE);
    }

    #[::core::prelude::v1::test]
    fn repeated_builds_are_identical() {
        let message = Message::new(MessageId::new(3), "system", "ready");

        assert_eq!(
            AvatarPresentation::for_message(&message),
            AvatarPresentation::for_message(&message)
        );
    }
}
