use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

/// A single entry in the chat transcript.
///
/// The transcript is append-only and lives in client memory for the lifetime
/// of the session: one student message per submission, exactly one teacher
/// message per completed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    text: String,
}

impl Message {
    pub fn student(text: impl Into<String>) -> Self {
        Self {
            role: Role::Student,
            text: text.into(),
        }
    }

    pub fn teacher(text: impl Into<String>) -> Self {
        Self {
            role: Role::Teacher,
            text: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let m = Message::student("What is oligopoly?");
        assert_eq!(m.role(), Role::Student);
        assert_eq!(m.text(), "What is oligopoly?");
        assert!(!m.is_teacher());

        let m = Message::teacher("A market dominated by a few firms.");
        assert!(m.is_teacher());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let m = Message::student("hi");
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"role":"student","text":"hi"}"#);
    }
}
