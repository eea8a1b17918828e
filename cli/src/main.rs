use std::io::Write as _;
use std::time::Duration;

use assistant::catalog::{APP_TITLE, FOOTER_NOTE};
use assistant::clock::{format_clock, now_ms};
use assistant::{Conversation, Message, PendingReply, Sender};
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "travelbot", about = "Chat with the TravelBot travel assistant from a terminal")]
struct Cli {
    #[arg(long, env = "TRAVELBOT_BASE_URL", default_value = "http://127.0.0.1:3000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the server answers `/healthz`.
    Ping,
    /// Print the reply to a single prompt.
    Ask(AskArgs),
    /// Interactive conversation.
    Chat(ChatArgs),
}

#[derive(Args, Debug)]
struct AskArgs {
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    #[arg(long, default_value_t = false, help = "Ask the server instead of answering locally")]
    remote: bool,

    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ChatArgs {
    #[arg(long, default_value_t = false, help = "Ask the server instead of answering locally")]
    remote: bool,

    #[arg(long, env = "TRAVELBOT_TYPING_DELAY_MS", help = "Override the simulated typing delay")]
    typing_delay_ms: Option<u64>,
}

/// Reply as returned by `POST /api/chat/reply`.
#[derive(Debug, Deserialize)]
struct RemoteReply {
    topic: String,
    reply: String,
    suggestions: Vec<String>,
    typing_delay_ms: u64,
}

#[derive(Debug, Deserialize)]
struct RemoteGreeting {
    message: Message,
    typing_delay_ms: u64,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let base_url = cli.base_url.trim_end_matches('/').to_owned();

    let result = match cli.command {
        Command::Ping => run_ping(&base_url).await,
        Command::Ask(args) => run_ask(&base_url, args).await,
        Command::Chat(args) => run_chat(&base_url, args).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run_ping(base_url: &str) -> Result<(), CliError> {
    let response = reqwest::Client::new().get(format!("{base_url}/healthz")).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::ServerError { status: status.as_u16(), message: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

async fn run_ask(base_url: &str, args: AskArgs) -> Result<(), CliError> {
    let text = args.text.join(" ");
    let prompt = assistant::rules::normalize_prompt(&text).map_err(|_| CliError::EmptyPrompt)?;

    let (topic, reply, suggestions) = if args.remote {
        let remote = fetch_reply(base_url, prompt).await?;
        (remote.topic, remote.reply, remote.suggestions)
    } else {
        let local = assistant::rules::respond(prompt);
        (
            local.topic.to_string(),
            local.text.to_owned(),
            local.suggestions.iter().map(|s| (*s).to_owned()).collect(),
        )
    };

    if args.json {
        let value = serde_json::json!({ "topic": topic, "reply": reply, "suggestions": suggestions });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{reply}");
        print!("{}", render_suggestions(&suggestions));
    }
    Ok(())
}

async fn run_chat(base_url: &str, args: ChatArgs) -> Result<(), CliError> {
    let offset = local_offset_minutes();
    let mut conversation = Conversation::new(now_ms());

    let (greeting, server_delay) = if args.remote {
        let remote = fetch_greeting(base_url).await?;
        (remote.message, Some(Duration::from_millis(remote.typing_delay_ms)))
    } else {
        (conversation.messages()[0].clone(), None)
    };
    let mut delay = args
        .typing_delay_ms
        .map(Duration::from_millis)
        .or(server_delay)
        .unwrap_or(assistant::TYPING_DELAY);

    println!("{APP_TITLE}  (type /quit to leave, or a number to pick a suggestion)\n");
    print!("{}", render_message(&greeting, offset));
    let mut last_suggestions = greeting.suggestions.clone();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == "/quit" {
            break;
        }
        let Some(prompt) = resolve_input(&line, &last_suggestions) else {
            continue;
        };
        let Some(pending) = conversation.submit(&prompt, now_ms()) else {
            continue;
        };
        if let Some(user) = conversation.last() {
            print!("{}", render_message(user, offset));
        }

        show_typing(delay).await?;

        let reply = if args.remote {
            let remote = fetch_reply(base_url, pending.prompt()).await?;
            if args.typing_delay_ms.is_none() {
                delay = Duration::from_millis(remote.typing_delay_ms);
            }
            deliver_remote(&mut conversation, pending, &remote, now_ms())
        } else {
            conversation.deliver(pending, now_ms()).clone()
        };

        print!("{}", render_message(&reply, offset));
        last_suggestions = reply.suggestions;
    }

    println!("\n{FOOTER_NOTE}");
    Ok(())
}

/// Record a server reply in the local transcript so ids keep increasing.
fn deliver_remote(conversation: &mut Conversation, pending: PendingReply, remote: &RemoteReply, at_ms: i64) -> Message {
    let suggestions: Vec<&str> = remote.suggestions.iter().map(String::as_str).collect();
    conversation.deliver_with(pending, &remote.reply, &suggestions, at_ms).clone()
}

async fn fetch_reply(base_url: &str, text: &str) -> Result<RemoteReply, CliError> {
    let body = serde_json::json!({ "text": text });
    let response = reqwest::Client::new().post(format!("{base_url}/api/chat/reply")).json(&body).send().await?;
    decode_response(response).await
}

async fn fetch_greeting(base_url: &str) -> Result<RemoteGreeting, CliError> {
    let response = reqwest::Client::new().get(format!("{base_url}/api/chat/greeting")).send().await?;
    decode_response(response).await
}

async fn decode_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T, CliError> {
    let status = response.status();
    let value = response.json::<Value>().await.unwrap_or(Value::Null);
    if !status.is_success() {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| value.to_string(), str::to_owned);
        return Err(CliError::ServerError { status: status.as_u16(), message });
    }
    Ok(serde_json::from_value(value)?)
}

async fn show_typing(delay: Duration) -> Result<(), CliError> {
    if delay.is_zero() {
        return Ok(());
    }
    print!("  TravelBot is typing...");
    std::io::stdout().flush()?;
    tokio::time::sleep(delay).await;
    // Erase the indicator line.
    print!("\r\x1b[2K");
    std::io::stdout().flush()?;
    Ok(())
}

/// Turn a typed line into a prompt. A bare number picks that suggestion.
fn resolve_input(line: &str, suggestions: &[String]) -> Option<String> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        if let Some(chip) = n.checked_sub(1).and_then(|i| suggestions.get(i)) {
            return Some(chip.clone());
        }
    }
    Some(trimmed.to_owned())
}

fn render_message(msg: &Message, offset_minutes: i32) -> String {
    let who = match msg.sender {
        Sender::User => "You",
        Sender::Assistant => "TravelBot",
    };
    let time = format_clock(msg.timestamp_ms, offset_minutes);
    let mut out = format!("[{time}] {who}: {}\n", msg.text);
    out.push_str(&render_suggestions(&msg.suggestions));
    out
}

fn render_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        return String::new();
    }
    let chips: Vec<String> = suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| format!("[{}] {s}", i + 1))
        .collect();
    format!("  {}\n", chips.join("  "))
}

fn local_offset_minutes() -> i32 {
    time::UtcOffset::current_local_offset().map_or(0, |o| i32::from(o.whole_hours()) * 60 + i32::from(o.minutes_past_hour()))
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
