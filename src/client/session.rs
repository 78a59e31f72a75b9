use tracing::warn;

use crate::domain::{Message, TutorError};

/// Opening teacher message shown before any exchange.
pub const GREETING: &str = "Hello! 👋 I'm your AI Economics tutor specializing in Oligopoly. \
I can help you understand concepts, prepare for exams, and answer any questions about this \
market structure. What would you like to learn about today?";

/// Shown as the teacher's reply when the relay itself cannot be reached.
pub const CONNECTION_FAILURE_REPLY: &str = "❌ Sorry, I'm having trouble connecting to the \
server. Please make sure the backend is running on port 5000.";

/// Shown when the relay answered but the body carried no usable text.
pub const MISSING_ANSWER_REPLY: &str = "Sorry, I couldn't generate a response. Please try again.";

/// Shortcuts a student can pull into the input without submitting.
pub const SUGGESTED_QUESTIONS: [&str; 6] = [
    "What is oligopoly?",
    "Explain the kinked demand curve",
    "What are concentration ratios?",
    "Advantages and disadvantages of oligopoly",
    "How does collusion work?",
    "Give me exam tips for oligopoly",
];

/// The visible conversation plus the one-request-at-a-time admission policy.
///
/// Pure state, no I/O: the REPL drives it and renders from it. Per
/// submission the machine goes idle -> busy -> idle; a submission while busy
/// is rejected, never queued. Every accepted submission appends one student
/// message, and every completion appends exactly one teacher message.
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    busy: bool,
    exam_tips: Vec<String>,
    suggestion_cursor: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::teacher(GREETING)],
            input: String::new(),
            busy: false,
            exam_tips: Vec::new(),
            suggestion_cursor: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn exam_tips(&self) -> &[String] {
        &self.exam_tips
    }

    pub fn set_exam_tips(&mut self, tips: Vec<String>) {
        self.exam_tips = tips;
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Replace the input with the next suggested question. Never submits.
    pub fn cycle_suggestion(&mut self) {
        let suggestion = SUGGESTED_QUESTIONS[self.suggestion_cursor % SUGGESTED_QUESTIONS.len()];
        self.suggestion_cursor += 1;
        self.input = suggestion.to_string();
    }

    /// Try to start an exchange. Returns the question to send, or `None`
    /// when the input trims empty or a request is already in flight (the
    /// input is left untouched in both rejection cases).
    pub fn submit(&mut self) -> Option<String> {
        if self.busy || self.input.trim().is_empty() {
            return None;
        }

        let question = std::mem::take(&mut self.input);
        self.messages.push(Message::student(question.clone()));
        self.busy = true;
        Some(question)
    }

    /// Finish the in-flight exchange. Appends exactly one teacher message
    /// whatever the outcome and returns the session to idle.
    pub fn complete(&mut self, outcome: Result<String, TutorError>) {
        let text = match outcome {
            Ok(answer) if answer.trim().is_empty() => MISSING_ANSWER_REPLY.to_string(),
            Ok(answer) => answer,
            Err(e) => {
                warn!("Error asking question: {e}");
                CONNECTION_FAILURE_REPLY.to_string()
            }
        };

        self.messages.push(Message::teacher(text));
        self.busy = false;
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn session_opens_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].text(), GREETING);
        assert!(session.messages()[0].is_teacher());
        assert!(!session.is_busy());
    }

    #[test]
    fn empty_or_whitespace_input_is_rejected() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit(), None);

        session.push_char(' ');
        session.push_char('\t');
        assert_eq!(session.submit(), None);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.input(), " \t");
    }

    #[test]
    fn submit_appends_student_message_and_sets_busy() {
        let mut session = ChatSession::new();
        for c in "What is oligopoly?".chars() {
            session.push_char(c);
        }

        let question = session.submit().unwrap();
        assert_eq!(question, "What is oligopoly?");
        assert!(session.is_busy());
        assert_eq!(session.input(), "");

        let last = session.messages().last().unwrap();
        assert_eq!(last.role(), Role::Student);
        assert_eq!(last.text(), "What is oligopoly?");
    }

    #[test]
    fn submit_while_busy_has_no_observable_effect() {
        let mut session = ChatSession::new();
        session.push_char('q');
        session.submit().unwrap();

        session.push_char('r');
        assert_eq!(session.submit(), None);
        assert_eq!(session.messages().len(), 2, "no second student message");
        assert_eq!(session.input(), "r");

        session.complete(Ok("answer".to_string()));
        assert!(!session.is_busy());
        assert_eq!(session.submit().unwrap(), "r");
    }

    #[test]
    fn completion_appends_exactly_one_teacher_message() {
        let mut session = ChatSession::new();
        session.push_char('q');
        session.submit().unwrap();
        session.complete(Ok("- Def...\n- Tip: ...".to_string()));

        assert_eq!(session.messages().len(), 3);
        let last = session.messages().last().unwrap();
        assert!(last.is_teacher());
        assert_eq!(last.text(), "- Def...\n- Tip: ...");
        assert!(!session.is_busy());
    }

    #[test]
    fn transport_failure_becomes_connectivity_message() {
        let mut session = ChatSession::new();
        session.push_char('q');
        session.submit().unwrap();
        session.complete(Err(TutorError::transport("connection refused")));

        assert_eq!(session.messages().len(), 3);
        assert_eq!(
            session.messages().last().unwrap().text(),
            CONNECTION_FAILURE_REPLY
        );
        assert!(!session.is_busy());
    }

    #[test]
    fn blank_answer_becomes_fallback_message() {
        let mut session = ChatSession::new();
        session.push_char('q');
        session.submit().unwrap();
        session.complete(Ok("  \n".to_string()));

        assert_eq!(
            session.messages().last().unwrap().text(),
            MISSING_ANSWER_REPLY
        );
    }

    #[test]
    fn suggestions_populate_input_without_submitting() {
        let mut session = ChatSession::new();

        session.cycle_suggestion();
        assert_eq!(session.input(), SUGGESTED_QUESTIONS[0]);
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_busy());

        for expected in SUGGESTED_QUESTIONS.iter().skip(1) {
            session.cycle_suggestion();
            assert_eq!(session.input(), *expected);
        }

        // Wraps around.
        session.cycle_suggestion();
        assert_eq!(session.input(), SUGGESTED_QUESTIONS[0]);
    }
}
