use thiserror::Error;

#[derive(Debug, Error)]
pub enum EndpointError {
    #[error("The `{endpoint}` endpoint requires a chatroom id, but none is set")]
    MissingChatroomId { endpoint: &'static str },
}

pub type EndpointResult<T> = Result<T, EndpointError>;
