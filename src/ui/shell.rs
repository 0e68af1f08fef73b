use anyhow::Result;

use crate::usecases::{
    contracts::{LineTerminal, Responder},
    conversation::{ConversationOrchestrator, IgnoreReason, SubmitOutcome, QUICK_PROMPTS},
    session::SessionHandle,
};

use super::{message_rendering::render_message, styles};

const HELP_LINES: [&str; 5] = [
    "Ask about a company (Google, Microsoft, Amazon, Meta), coding questions, or tips.",
    "/1../4   send a quick prompt",
    "/prompts list quick prompts",
    "/clear   start over",
    "/quit    leave the chat",
];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ShellCommand {
    Quit,
    Help,
    Prompts,
    Clear,
    QuickPrompt(usize),
    Unknown(String),
    Message(String),
}

/// Runs the chat loop until `/quit` or end of input. If the session is still
/// being restored, the banner waits for the gateway to publish the result.
pub async fn start<R>(
    terminal: &mut dyn LineTerminal,
    conversation: &ConversationOrchestrator<R>,
    mut session: SessionHandle,
) -> Result<()>
where
    R: Responder,
{
    if session.is_loading() {
        terminal.print_line("Checking your session...")?;
        while session.is_loading() {
            if !session.changed().await {
                break;
            }
        }
    }

    tracing::info!(
        authenticated = session.is_authenticated(),
        "starting chat shell"
    );

    terminal.print_line(&session_banner(&session))?;
    terminal.print_line(&styles::hint_style().apply("Type /help for commands.").to_string())?;
    print_transcript(terminal, conversation)?;

    while let Some(line) = terminal.prompt_line("> ")? {
        match parse_command(&line) {
            ShellCommand::Quit => break,
            ShellCommand::Help => {
                for line in HELP_LINES {
                    terminal.print_line(line)?;
                }
            }
            ShellCommand::Prompts => print_quick_prompts(terminal)?,
            ShellCommand::Clear if conversation.is_in_flight() => {
                terminal.print_line("Still answering the previous question...")?;
            }
            ShellCommand::Clear => {
                if conversation.reset() {
                    print_transcript(terminal, conversation)?;
                }
            }
            ShellCommand::QuickPrompt(index) => match QUICK_PROMPTS.get(index) {
                Some(prompt) => {
                    terminal.print_line(&format!("> {prompt}"))?;
                    exchange(terminal, conversation, prompt).await?;
                }
                None => terminal.print_line("No such quick prompt. Use /prompts to list them.")?,
            },
            ShellCommand::Unknown(command) => {
                terminal.print_line(&format!("Unknown command {command}. Type /help."))?
            }
            ShellCommand::Message(text) => exchange(terminal, conversation, &text).await?,
        }
    }

    terminal.print_line("Good luck with your interviews!")?;
    Ok(())
}

async fn exchange<R>(
    terminal: &mut dyn LineTerminal,
    conversation: &ConversationOrchestrator<R>,
    text: &str,
) -> Result<()>
where
    R: Responder,
{
    match conversation.submit(text).await {
        SubmitOutcome::Completed => {
            if let Some(reply) = conversation.last_message() {
                for line in render_message(&reply) {
                    terminal.print_line(&line)?;
                }
            }
        }
        SubmitOutcome::Ignored(IgnoreReason::EmptyInput) => {}
        SubmitOutcome::Ignored(IgnoreReason::Busy) => {
            terminal.print_line("Still answering the previous question...")?;
        }
    }

    Ok(())
}

fn print_transcript<R>(
    terminal: &mut dyn LineTerminal,
    conversation: &ConversationOrchestrator<R>,
) -> Result<()>
where
    R: Responder,
{
    for message in conversation.messages() {
        for line in render_message(&message) {
            terminal.print_line(&line)?;
        }
    }

    if conversation.is_empty() {
        terminal.print_line("No messages yet. Ask a question to get started.")?;
    }

    if conversation.shows_quick_prompts() {
        print_quick_prompts(terminal)?;
    }

    Ok(())
}

fn print_quick_prompts(terminal: &mut dyn LineTerminal) -> Result<()> {
    terminal.print_line("Quick start prompts:")?;
    for (index, prompt) in QUICK_PROMPTS.iter().enumerate() {
        terminal.print_line(&format!("  /{} {prompt}", index + 1))?;
    }

    Ok(())
}

fn session_banner(session: &SessionHandle) -> String {
    match session.current_user() {
        Some(user) => format!(
            "AI Interview Preparation. Signed in as {}.",
            user.display_name().unwrap_or("your account")
        ),
        None => "AI Interview Preparation. Browsing as guest (run `prepdesk login` to sign in)."
            .to_owned(),
    }
}

fn parse_command(line: &str) -> ShellCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix('/') else {
        return ShellCommand::Message(trimmed.to_owned());
    };

    match command {
        "quit" | "exit" => ShellCommand::Quit,
        "help" => ShellCommand::Help,
        "prompts" => ShellCommand::Prompts,
        "clear" => ShellCommand::Clear,
        other => match other.parse::<usize>() {
            Ok(number) if number >= 1 => ShellCommand::QuickPrompt(number - 1),
            _ => ShellCommand::Unknown(trimmed.to_owned()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{responses, session::User},
        infra::stubs::InMemoryTokenStore,
        test_support::{FakeAuthApi, FakeTerminal},
        usecases::{conversation::KeywordResponder, session::SessionGateway},
    };
    use serde_json::json;

    fn guest_session() -> SessionHandle {
        SessionGateway::new(FakeAuthApi::default(), InMemoryTokenStore::default()).subscribe()
    }

    #[test]
    fn parses_shell_commands() {
        assert_eq!(parse_command("/quit"), ShellCommand::Quit);
        assert_eq!(parse_command(" /exit "), ShellCommand::Quit);
        assert_eq!(parse_command("/2"), ShellCommand::QuickPrompt(1));
        assert_eq!(parse_command("/0"), ShellCommand::Unknown("/0".to_owned()));
        assert_eq!(
            parse_command("  google tips "),
            ShellCommand::Message("google tips".to_owned())
        );
    }

    #[tokio::test]
    async fn eof_ends_the_shell() {
        let mut terminal = FakeTerminal::new(vec![None]);
        let conversation = ConversationOrchestrator::new(KeywordResponder);

        start(&mut terminal, &conversation, guest_session())
            .await
            .expect("shell should exit cleanly");

        assert!(terminal.joined().contains("Browsing as guest"));
        assert!(terminal.joined().contains("No messages yet"));
        assert!(conversation.is_empty());
    }

    #[tokio::test]
    async fn banner_waits_for_session_restore() {
        let api = FakeAuthApi::default().with_me(Ok(User::from_value(
            json!({"fullName": "Ada Lovelace"}),
        )));
        let mut gateway = SessionGateway::new(api, InMemoryTokenStore::with_token("tok"));
        let handle = gateway.subscribe();
        let mut terminal = FakeTerminal::new(vec![Some("/quit")]);
        let conversation = ConversationOrchestrator::with_greeting(KeywordResponder);

        let (shell, _) = tokio::join!(
            start(&mut terminal, &conversation, handle),
            gateway.restore_session()
        );

        shell.expect("shell should exit cleanly");
        let output = terminal.joined();
        assert!(output.contains("Checking your session..."));
        assert!(output.contains("Signed in as Ada Lovelace."));
        assert!(!output.contains("No messages yet"));
    }

    #[tokio::test]
    async fn message_is_answered_and_printed() {
        let mut terminal = FakeTerminal::new(vec![Some("top coding questions"), Some("/quit")]);
        let conversation = ConversationOrchestrator::new(KeywordResponder);

        start(&mut terminal, &conversation, guest_session())
            .await
            .expect("shell should exit cleanly");

        assert_eq!(conversation.len(), 2);
        assert_eq!(
            conversation.last_message().map(|m| m.text().to_owned()),
            Some(responses::CODING_QUESTIONS.to_owned())
        );
        assert!(terminal.joined().contains("Two Sum"));
    }

    #[tokio::test]
    async fn blank_lines_do_not_touch_the_log() {
        let mut terminal = FakeTerminal::new(vec![Some(""), Some("   "), Some("/quit")]);
        let conversation = ConversationOrchestrator::new(KeywordResponder);

        start(&mut terminal, &conversation, guest_session())
            .await
            .expect("shell should exit cleanly");

        assert!(conversation.is_empty());
    }

    #[tokio::test]
    async fn quick_prompt_shortcut_submits_prompt_text() {
        let mut terminal = FakeTerminal::new(vec![Some("/1"), Some("/quit")]);
        let conversation = ConversationOrchestrator::with_greeting(KeywordResponder);

        start(&mut terminal, &conversation, guest_session())
            .await
            .expect("shell should exit cleanly");

        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].text(), QUICK_PROMPTS[0]);
        assert_eq!(messages[2].text(), responses::GOOGLE);
        assert!(terminal.joined().contains("Quick start prompts:"));
    }

    #[tokio::test]
    async fn clear_resets_conversation() {
        let mut terminal = FakeTerminal::new(vec![Some("amazon"), Some("/clear"), Some("/quit")]);
        let conversation = ConversationOrchestrator::new(KeywordResponder);

        start(&mut terminal, &conversation, guest_session())
            .await
            .expect("shell should exit cleanly");

        assert!(conversation.is_empty());
    }
}
