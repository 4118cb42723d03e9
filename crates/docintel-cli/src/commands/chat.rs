use super::{Output, ago, short_id};
use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use docintel_application::AppServices;
use docintel_core::chat::{ChatMessage, Sender};

#[derive(Subcommand, Debug)]
pub enum ChatAction {
    /// Ask the assistant a question
    Ask {
        message: String,
        /// Start a new chat about this document
        #[arg(long)]
        document: Option<String>,
    },
    /// List chat sessions
    Sessions,
}

pub async fn handle(app: &AppServices, action: ChatAction, output: &Output) -> Result<()> {
    match action {
        ChatAction::Ask { message, document } => {
            if document.is_some() || app.chat.current_session().await?.is_none() {
                app.chat.create_session(document).await?;
            }
            app.chat.send_message(&message).await?;

            let exchange: Vec<ChatMessage> = app
                .chat
                .current_session()
                .await?
                .map(|session| {
                    let start = session.messages.len().saturating_sub(2);
                    session.messages[start..].to_vec()
                })
                .unwrap_or_default();

            output.emit(&exchange, |messages| {
                for message in messages {
                    print_message(message);
                }
            })
        }
        ChatAction::Sessions => {
            let view = app.chat.view().await?;
            output.emit(&view.sessions, |sessions| {
                let current = view.current_session.as_ref().map(|s| s.id.as_str());
                for session in sessions {
                    let marker = if Some(session.id.as_str()) == current { "*" } else { " " };
                    println!(
                        "{} {:<8} {} ({} messages, updated {})",
                        marker.green(),
                        short_id(&session.id).cyan(),
                        session.title.bold(),
                        session.messages.len(),
                        ago(session.updated_at).dimmed()
                    );
                }
            })
        }
    }
}

fn print_message(message: &ChatMessage) {
    let who = match message.sender {
        Sender::User => "you".blue().bold(),
        Sender::Ai => "assistant".magenta().bold(),
    };
    println!("{}: {}", who, message.content);

    if !message.references.is_empty() {
        let refs: Vec<String> = message
            .references
            .iter()
            .map(|r| format!("p.{} ({:.0}%)", r.page, r.confidence * 100.0))
            .collect();
        println!("  {}", format!("sources: {}", refs.join(", ")).dimmed());
    }
}
