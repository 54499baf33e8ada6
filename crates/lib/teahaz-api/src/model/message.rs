use crate::event::Event;

/// Wire category of a message.
///
/// Anything the server tags with an unknown type is treated as a plain
/// text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum MessageKind {
    #[serde(rename = "delete")]
    Delete,

    #[serde(rename = "system")]
    System,

    #[serde(rename = "system-silent")]
    SystemSilent,

    #[default]
    #[serde(other, rename = "text")]
    Text,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    #[serde(rename = "userID")]
    pub user_id: String,

    #[serde(rename = "channelID")]
    pub channel_id: String,

    #[serde(rename = "replyID")]
    pub reply_id: Option<String>,

    pub data: String,

    #[serde(rename = "type", default)]
    pub kind: MessageKind,
}

impl Message {
    /// The subscription event this message should be dispatched as.
    pub fn event(&self) -> Event {
        match self.kind {
            MessageKind::Delete => Event::MsgDel,
            MessageKind::System => Event::MsgSys,
            MessageKind::SystemSilent => Event::MsgSysSilent,
            MessageKind::Text => Event::MsgNew,
        }
    }
}
