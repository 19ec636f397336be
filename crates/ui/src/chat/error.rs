use snafu::Snafu;

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum AvatarError {
    /// The avatar was rendered outside a row that provides a current message.
    #[snafu(display("no current message is available for the avatar on `{stage}`"))]
    MissingMessageContext { stage: &'static str },
}

pub type AvatarResult<T> = Result<T, AvatarError>;
