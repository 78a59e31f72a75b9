//! Interactive terminal chat connected to the Relay Service.
//!
//! `econtutor chat [--server URL]`

use std::io::{self, Write};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use tracing::warn;

use crate::domain::{Message, Role};

use super::relay_api::RelayApi;
use super::session::ChatSession;

/// Run the chat client until the user quits.
pub async fn run(server_url: &str) -> Result<()> {
    let api = RelayApi::new(server_url);
    let mut session = ChatSession::new();

    // One fetch at startup; failure leaves the tips list empty.
    match api.exam_tips().await {
        Ok(tips) => session.set_exam_tips(tips),
        Err(e) => warn!("Error loading exam tips: {e}"),
    }

    println!("AI Economics Tutor — connected to {server_url}");
    println!("Enter sends. Tab cycles suggested questions. Ctrl+T shows exam tips. Ctrl+C quits.");

    terminal::enable_raw_mode()?;
    let result = event_loop(&api, &mut session).await;
    terminal::disable_raw_mode()?;
    println!();
    result
}

async fn event_loop(api: &RelayApi, session: &mut ChatSession) -> Result<()> {
    render_last_message(session);
    prompt(session.input());

    loop {
        let evt = read_event().await?;
        let Event::Key(key) = evt else { continue };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Enter => {
                if let Some(question) = session.submit() {
                    render_last_message(session);
                    print!("\r\x1b[2KAI Tutor is typing...\r\n");
                    io::stdout().flush().ok();

                    // One request at a time: the loop waits here, and the
                    // busy flag rejects anything that slips through.
                    let outcome = api.ask(&question).await;
                    session.complete(outcome);
                    render_last_message(session);
                }
                prompt(session.input());
            }
            KeyCode::Tab => {
                session.cycle_suggestion();
                prompt(session.input());
            }
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                render_exam_tips(session);
                prompt(session.input());
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Ok(());
            }
            KeyCode::Backspace => {
                session.backspace();
                prompt(session.input());
            }
            KeyCode::Char(c) => {
                session.push_char(c);
                prompt(session.input());
            }
            _ => {}
        }
    }
}

/// Keyboard reads block, so hand them to a blocking task instead of stalling
/// the runtime.
async fn read_event() -> Result<Event> {
    Ok(tokio::task::spawn_blocking(event::read).await??)
}

fn prompt(input: &str) {
    print!("\r\x1b[2Kyou> {input}");
    io::stdout().flush().ok();
}

fn render_last_message(session: &ChatSession) {
    if let Some(message) = session.messages().last() {
        render_message(message);
    }
}

fn render_message(message: &Message) {
    let label = match message.role() {
        Role::Teacher => "AI Tutor",
        Role::Student => "you",
    };

    print!("\r\x1b[2K\r\n{label}:\r\n");
    for line in message.text().lines() {
        print!("  {line}\r\n");
    }
    io::stdout().flush().ok();
}

fn render_exam_tips(session: &ChatSession) {
    print!("\r\x1b[2K\r\nExam Success Tips:\r\n");
    if session.exam_tips().is_empty() {
        print!("  (no tips loaded)\r\n");
    }
    for (i, tip) in session.exam_tips().iter().enumerate() {
        print!("  {}. {tip}\r\n", i + 1);
    }
    io::stdout().flush().ok();
}
