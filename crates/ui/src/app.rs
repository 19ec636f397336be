use gpui::*;
use gpui_component::{
    ActiveTheme, IconName, Sizable, Theme, ThemeMode,
    button::{Button, ButtonVariants},
    h_flex,
    label::Label,
    v_flex,
};

use crate::chat::{ChatMessageAvatar, Message, MessageId, MessageScope, Role};

const PREVIEW_CONTENT_WIDTH: Pixels = px(640.);
const ROW_GAP: Pixels = px(12.);

gpui::actions!(shell, [Quit]);

/// Transcript shown by the preview window, one row per role the avatar handles.
pub fn sample_messages() -> Vec<Message> {
    vec![
        Message::user(MessageId::new(1), "Is the living room light on?"),
        Message::assistant(
            MessageId::new(2),
            "Yes, the living room light is on at 60% brightness.",
        ),
        Message::new(MessageId::new(3), Role::System, "Entity descriptions loaded."),
        Message::new(MessageId::new(4), "tool", "light.living_room: on"),
    ]
}

/// Mode the preview switches to from `current`.
pub fn toggled_theme_mode(current: ThemeMode) -> ThemeMode {
    if current.is_dark() {
        ThemeMode::Light
    } else {
        ThemeMode::Dark
    }
}

/// Window content that renders chat rows the way a host chat list would.
///
/// Each row installs its message in [`MessageScope`] before building the avatar.
pub struct AvatarPreview {
    messages: Vec<Message>,
    theme_mode: ThemeMode,
}

impl AvatarPreview {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        Self {
            messages: sample_messages(),
            theme_mode: cx.theme().mode,
        }
    }

    fn toggle_theme(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        self.theme_mode = toggled_theme_mode(self.theme_mode);
        Theme::change(self.theme_mode, Some(window), cx);
        tracing::debug!("preview theme switched to {}", self.theme_mode.name());
        cx.notify();
    }

    fn render_row(&self, message: &Message, cx: &mut Context<Self>) -> AnyElement {
        let avatar = MessageScope::with_message(cx, message.clone(), |cx| {
            ChatMessageAvatar::from_scope(cx)
        });
        let theme = cx.theme();

        let avatar = match avatar {
            Ok(avatar) => avatar.into_any_element(),
            Err(error) => Label::new(error.to_string())
                .text_xs()
                .text_color(theme.danger)
                .into_any_element(),
        };

        h_flex()
            .w_full()
            .items_start()
            .gap_3()
            .child(avatar)
            .child(
                v_flex()
                    .flex_1()
                    .min_w_0()
                    .gap_1()
                    .child(
                        Label::new(message.role.to_string())
                            .text_xs()
                            .text_color(theme.foreground.opacity(0.5)),
                    )
                    .child(Label::new(message.content.clone()).text_sm()),
            )
            .into_any_element()
    }

    fn render_top_bar(&self, cx: &Context<Self>) -> impl IntoElement {
        let theme = cx.theme();
        let mode_icon = if self.theme_mode.is_dark() {
            IconName::Sun
        } else {
            IconName::Moon
        };

        h_flex()
            .id("preview-top-bar")
            .w_full()
            .flex_shrink_0()
            .px_4()
            .py_2()
            .items_center()
            .justify_between()
            .bg(theme.background)
            .border_b_1()
            .border_color(theme.border)
            .child(
                Label::new("Chat avatars")
                    .text_sm()
                    .text_color(theme.foreground),
            )
            .child(
                Button::new("preview-toggle-theme")
                    .ghost()
                    .small()
                    .icon(mode_icon)
                    .on_click(cx.listener(|this, _, window, cx| {
                        this.toggle_theme(window, cx);
                    })),
            )
    }
}

impl Render for AvatarPreview {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let rows = self
            .messages
            .iter()
            .map(|message| self.render_row(message, cx))
            .collect::<Vec<_>>();
        let theme = cx.theme();

        v_flex()
            .size_full()
            .bg(theme.background)
            .text_color(theme.foreground)
            .child(self.render_top_bar(cx))
            .child(
                v_flex()
                    .id("preview-rows")
                    .flex_1()
                    .min_h_0()
                    .overflow_y_scroll()
                    .items_center()
                    .py_4()
                    .child(
                        v_flex()
                            .w(PREVIEW_CONTENT_WIDTH)
                            .max_w_full()
                            .px_4()
                            .gap(ROW_GAP)
                            .children(rows),
                    ),
            )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::chat::{AvatarKind, AvatarPresentation};

    #[::core::prelude::v1::test]
    fn samples_cover_both_avatar_kinds() {
        let kinds = sample_messages()
            .iter()
            .map(|message| AvatarPresentation::for_message(message).kind)
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                AvatarKind::User,
                AvatarKind::Assistant,
                AvatarKind::Assistant,
                AvatarKind::Assistant,
            ]
        );
    }

    #[::core::prelude::v1::test]
    fn sample_ids_are_unique() {
        let ids = sample_messages()
            .iter()
            .map(|message| message.id)
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), sample_messages().len());
    }

    #[::core::prelude::v1::test]
    fn theme_toggle_alternates_modes() {
        assert_eq!(toggled_theme_mode(ThemeMode::Light), ThemeMode::Dark);
        assert_eq!(toggled_theme_mode(ThemeMode::Dark), ThemeMode::Light);
    }
}
