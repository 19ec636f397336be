use gpui::{App, Global};
use snafu::OptionExt;

use crate::chat::error::{AvatarResult, MissingMessageContextSnafu};
use crate::chat::message::Message;

/// Ambient "current message" slot.
///
/// A host list installs the message of the row it is about to render so that
/// row decorations can read it without threading it through every builder.
#[derive(Debug, Default)]
pub struct MessageScope {
    current: Option<Message>,
}

impl Global for MessageScope {}

impl MessageScope {
    /// Makes `message` current and returns the one it replaced.
    pub fn enter(&mut self, message: Message) -> Option<Message> {
        self.current.replace(message)
    }

    pub fn leave(&mut self) -> Option<Message> {
        self.current.take()
    }

    /// Puts back the message `enter` displaced, or clears the slot when there was none.
    pub fn restore(&mut self, previous: Option<Message>) {
        self.current = previous;
    }

    pub fn current(&self) -> AvatarResult<&Message> {
        self.current.as_ref().context(MissingMessageContextSnafu {
            stage: "read-current-message",
        })
    }

    /// Reads the current message from the app-wide scope.
    ///
    /// Fails when no scope was ever installed or when it is read outside a row.
    pub fn read(cx: &App) -> AvatarResult<&Message> {
        Self::resolve(cx.try_global::<Self>())
    }

    fn resolve(scope: Option<&Self>) -> AvatarResult<&Message> {
        scope
            .context(MissingMessageContextSnafu {
                stage: "read-message-scope",
            })?
            .current()
    }

    /// Runs `f` with `message` as the current message, then restores the previous one.
    pub fn with_message<R>(cx: &mut App, message: Message, f: impl FnOnce(&mut App) -> R) -> R {
        let previous = cx.default_global::<Self>().enter(message);
        let result = f(cx);

        cx.global_mut::<Self>().restore(previous);
        result
    }
}
