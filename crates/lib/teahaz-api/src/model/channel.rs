use std::collections::HashMap;

/// A channel inside a chatroom, as the server describes it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Channel {
    #[serde(rename = "channelID")]
    pub uid: String,

    #[serde(rename = "channel_name")]
    pub name: String,

    pub public: bool,

    pub permissions: HashMap<String, bool>,
}
