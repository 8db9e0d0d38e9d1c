//! Interactive advisor session on stdin/stdout.
//!
//! `advisor [user-id]` (default user: `guest`). Type `quit` to leave.

use chrono::{Duration, Utc};
use finsavvy_advisor::{
    agent::Advisor, config::AdvisorConfig, market::build_market_source, state::build_store,
    TurnResponse,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_reply(reply: &TurnResponse) {
    println!("\n{}\n", reply.response_text);
    if !reply.suggested_replies.is_empty() {
        println!("  › {}", reply.suggested_replies.join("  |  "));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AdvisorConfig::from_env()?;

    // Logs go to stderr so they don't interleave with the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let user_id = std::env::args().nth(1).unwrap_or_else(|| "guest".to_string());
    info!(user_id = %user_id, "FinSavvy Advisor starting");

    let advisor = Advisor::new(build_store(&config), build_market_source(&config)?)
        .with_session_ttl(Duration::minutes(config.session_ttl_minutes.into()));
    let advisor = Arc::new(advisor);

    let welcome = advisor.start_session(&user_id, Utc::now()).await?;
    print_reply(&welcome);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.is_empty() {
            continue;
        }

        match advisor.process_turn(&user_id, line, Utc::now()).await {
            Ok(reply) => print_reply(&reply),
            Err(e) if e.is_persistence_failure() => {
                eprintln!("⚠️  Could not save your details ({}). Please send that answer again.", e);
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    println!("🙏 Goodbye!");
    Ok(())
}
