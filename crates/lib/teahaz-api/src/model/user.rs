/// A user's display color.
///
/// Kept as a typed RGB triple so the markup tag renders in a fixed
/// component order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    /// Render the color as a `red;green;blue` markup tag.
    pub fn markup_tag(&self) -> String {
        format!("{};{};{}", self.red, self.green, self.blue)
    }
}

/// A member of a chatroom, as the server describes it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct User {
    #[serde(rename = "userID")]
    pub uid: String,

    pub username: String,

    pub color: Color,
}

impl User {
    /// Get the user's color as a markup tag.
    pub fn color_tag(&self) -> String {
        self.color.markup_tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_server_shape() {
        let payload = r#"{
            "userID": "user-1",
            "username": "bczsalba",
            "color": { "red": 103, "green": 82, "blue": 255 }
        }"#;

        let user: User = serde_json::from_str(payload).expect("valid user payload");

        assert_eq!(user.uid, "user-1");
        assert_eq!(user.username, "bczsalba");
        assert_eq!(user.color_tag(), "103;82;255");
    }
}
