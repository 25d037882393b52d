use std::io;

use emberlink::{AuthToken, EmberClient, MatchId, MessageText};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("EMBER_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_AUTH_TOKEN environment variable is required",
        )
    })?;
    let match_id = std::env::var("EMBER_MATCH_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_MATCH_ID environment variable is required",
        )
    })?;
    let message = std::env::var("EMBER_MESSAGE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_MESSAGE environment variable is required",
        )
    })?;

    let client = EmberClient::new(AuthToken::new(token)?);
    let match_id = MatchId::new(match_id)?;

    let response = client
        .send_message(&match_id, &MessageText::new(message)?)
        .await?;
    println!("response: {response}");

    let history = client.list_messages(&match_id, None).await?;
    for entry in &history.messages {
        println!("[{}] {}: {}", entry.sent_date, entry.from_id.as_str(), entry.message);
    }

    Ok(())
}
