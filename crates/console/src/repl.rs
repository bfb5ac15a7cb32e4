//! The interactive chat loop.
//!
//! Stateless glue over the session controller: reads lines, routes slash
//! commands, renders transcript entries and the analytics view. Seeded
//! sample phrases show up as editable prefill on the next prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use sl_client::types::AnalyticsReport;
use sl_client::ChatService;
use sl_domain::locale::Locale;
use sl_domain::message::{Message, Origin};
use sl_session::{EscalationSink, SendOutcome, SessionController};

const PROMPT: &str = "> ";

/// Prints escalation alerts to the terminal.
pub struct ConsoleSink;

impl EscalationSink for ConsoleSink {
    fn raise(&self, summary: &str) {
        println!("\n🚨 Escalation: {summary}");
    }
}

pub async fn run(ctrl: &SessionController, service: &dyn ChatService) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Supportline — type a message, /help for commands.");
    println!("Language: {} (switch with /lang <name>)", ctrl.locale());

    loop {
        // A seeded sample phrase becomes editable prefill.
        let staged = ctrl.input();
        let line = if staged.is_empty() {
            rl.readline(PROMPT)
        } else {
            rl.readline_with_initial(PROMPT, (staged.as_str(), ""))
        };

        let line = match line {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        match trimmed {
            "/quit" | "/exit" => break,
            "/help" => print_help(),
            "/history" => {
                for entry in ctrl.transcript() {
                    render_entry(&entry);
                }
            }
            "/analytics" => match service.analytics(ctrl.user_id()).await {
                Ok(report) => render_analytics(&report),
                // Isolated failure domain: report it, chat state untouched.
                Err(e) => println!("Error fetching analytics: {e}"),
            },
            _ if trimmed.starts_with("/lang") => {
                change_language(ctrl, trimmed.trim_start_matches("/lang").trim());
            }
            _ if trimmed.starts_with('/') => {
                println!("Unknown command: {trimmed} (try /help)");
            }
            _ => {
                ctrl.set_input(trimmed);
                send(ctrl).await;
            }
        }
    }

    println!("Bye.");
    Ok(())
}

async fn send(ctrl: &SessionController) {
    match ctrl.send_message().await {
        SendOutcome::Delivered => {
            let entries = ctrl.transcript();
            for entry in entries.iter().rev().take(2).rev() {
                render_entry(entry);
            }
        }
        SendOutcome::Busy => println!("Still waiting on the previous reply."),
        SendOutcome::EmptyInput => {}
    }
}

fn change_language(ctrl: &SessionController, name: &str) {
    match name.parse::<Locale>() {
        Ok(locale) => {
            let had_history = !ctrl.transcript().is_empty();
            ctrl.change_locale(locale);
            println!("Language: {locale}");
            if !had_history && !ctrl.input().is_empty() {
                println!("Sample ready to send: {}", ctrl.input());
            }
        }
        Err(_) => {
            let names: Vec<&str> = Locale::ALL.iter().map(|l| l.name()).collect();
            println!("Unknown language {name:?}. Known: {}", names.join(", "));
        }
    }
}

// ── Rendering ──────────────────────────────────────────────────────

fn render_entry(msg: &Message) {
    let who = match msg.origin {
        Origin::User => "You",
        Origin::Assistant => "Bot",
    };
    let flag = if msg.escalate { " [escalated]" } else { "" };
    println!("{who}: {}{flag}", msg.text);

    // An absent score renders nothing, never a placeholder 0.0.
    if let Some(intent) = &msg.intent {
        match msg.sentiment_score {
            Some(score) => println!("     (Intent: {intent} | Sentiment: {score:.1})"),
            None => println!("     (Intent: {intent})"),
        }
    }
    if let Some(rt) = &msg.response_time {
        println!("     ({rt})");
    }
}

fn render_analytics(report: &AnalyticsReport) {
    println!("Performance Analytics");
    println!("  Avg Sentiment:       {}", report.avg_sentiment);
    println!("  Escalation Rate:     {}", report.escalation_rate);
    println!("  Total Conversations: {}", report.total_conversations);
    println!("  Avg Response Time:   {}", report.avg_response_time);
}

fn print_help() {
    println!("/lang <name>   switch language (seeds a sample before the chat starts)");
    println!("/analytics     fetch your interaction metrics");
    println!("/history       re-print the full transcript");
    println!("/quit          exit");
}
