use crate::error::{EndpointError, EndpointResult};

/// Versioned API prefix appended to every server url.
const API_PREFIX: &str = "api/v0";

/// Endpoints of the Teahaz API.
///
/// The container owns the server url and, once the server has assigned one,
/// the chatroom id. Chatroom-scoped endpoints fail with
/// [`EndpointError::MissingChatroomId`] instead of interpolating a
/// placeholder into the request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointContainer {
    url: String,
    chatroom_id: Option<String>,
}

impl EndpointContainer {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            chatroom_id: None,
        }
    }

    pub fn with_chatroom(url: &str, chatroom_id: &str) -> Self {
        let mut container = Self::new(url);
        container.set_chatroom(chatroom_id);
        container
    }

    /// Fill in the chatroom id after the server has assigned one.
    ///
    /// A chatroom that does not exist yet has no id until creation
    /// succeeds, so this is deferred rather than required up front.
    pub fn set_chatroom(&mut self, chatroom_id: &str) {
        self.chatroom_id = Some(chatroom_id.to_string());
    }

    pub fn base(&self) -> String {
        format!("{}/{API_PREFIX}", self.url)
    }

    pub fn chatroom(&self) -> String {
        format!("{}/chatroom", self.base())
    }

    pub fn login(&self) -> EndpointResult<String> {
        self.scoped("login")
    }

    pub fn files(&self) -> EndpointResult<String> {
        self.scoped("files")
    }

    pub fn messages(&self) -> EndpointResult<String> {
        self.scoped("messages")
    }

    pub fn channels(&self) -> EndpointResult<String> {
        self.scoped("channels")
    }

    fn scoped(&self, endpoint: &'static str) -> EndpointResult<String> {
        let chatroom_id = self
            .chatroom_id
            .as_deref()
            .ok_or(EndpointError::MissingChatroomId { endpoint })?;

        Ok(format!("{}/{endpoint}/{chatroom_id}", self.base()))
    }
}
