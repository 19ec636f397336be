use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for one message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MessageId(pub u64);

impl MessageId {
    /// Creates a typed message identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Chat speaker role.
///
/// Parsing is total: any value the chat backend sends that is not a known role
/// lands in `Other` with its raw text kept for round-tripping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    User,
    Assistant,
    System,
    Other(OtherRole),
}

/// Raw text of a role outside the known set.
///
/// Only [`Role::parse`] builds one, so it never holds `user`, `assistant` or `system`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtherRole(String);

impl OtherRole {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "user" => Self::User,
            "assistant" => Self::Assistant,
            "system" => Self::System,
            other => Self::Other(OtherRole(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::System => "system",
            Self::Other(raw) => raw.as_str(),
        }
    }

    /// Returns true only for the literal `user` role.
    pub fn is_user(&self) -> bool {
        matches!(self, Self::User)
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(OtherRole(raw)) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core immutable message model.
///
/// Mirrors the `{ "role", "content" }` shape of the chat API payload. The id is
/// assigned by the host list and defaults to zero when the payload has none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: MessageId,
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

impl Message {
    pub fn new(id: MessageId, role: impl Into<Role>, content: impl Into<String>) -> Self {
        Self {
            id,
            role: role.into(),
            content: content.into(),
        }
    }

    /// Creates a message authored by the user.
    pub fn user(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Role::User, content)
    }

    /// Creates a message authored by the assistant.
    pub fn assistant(id: MessageId, content: impl Into<String>) -> Self {
        Self::new(id, Role::Assistant, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse_to_their_variants() {
        assert_eq!(Role::parse("user"), Role::User);
        assert_eq!(Role::parse("assistant"), Role::Assistant);
        assert_eq!(Role::parse("system"), Role::System);
    }

    #[test]
    fn role_matching_is_case_sensitive() {
        // Only the literal lowercase value identifies the user.
        let role = Role::parse("User");
        assert!(matches!(&role, Role::Other(raw) if raw.as_str() == "User"));
        assert!(!Role::parse("USER").is_user());
    }

    #[test]
    fn unknown_role_keeps_raw_value() {
        let role = Role::parse("function");
        assert!(matches!(&role, Role::Other(_)));
        assert_eq!(role.as_str(), "function");
        assert_eq!(String::from(role), "function");
    }

    #[test]
    fn message_deserializes_from_chat_payload() {
        let message: Message =
            serde_json::from_str(r#"{"role":"tool","content":"lights on"}"#).unwrap();

        assert_eq!(message.id, MessageId::default());
        assert_eq!(message.role, Role::parse("tool"));
        assert!(matches!(message.role, Role::Other(_)));
        assert_eq!(message.content, "lights on");
    }

    #[test]
    fn other_never_holds_a_known_role() {
        for raw in ["user", "assistant", "system"] {
            assert!(!matches!(Role::parse(raw), Role::Other(_)), "role `{raw}`");
        }
    }

    #[test]
    fn roles_survive_a_wire_round_trip() {
        for raw in ["user", "assistant", "system", "tool", "User", ""] {
            let message = Message::new(MessageId::new(1), raw, "x");
            let wire = serde_json::to_string(&message).unwrap();
            let decoded: Message = serde_json::from_str(&wire).unwrap();

            assert_eq!(decoded, message, "role `{raw}`");
            assert_eq!(decoded.role.is_user(), message.role.is_user());
        }
    }

    #[test]
    fn message_serializes_role_as_plain_string() {
        let message = Message::user(MessageId::new(7), "hola");
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["role"], "user");
        assert_eq!(value["content"], "hola");
    }
}
