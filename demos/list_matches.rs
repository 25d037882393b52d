use std::io;

use emberlink::{AuthToken, EmberClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("EMBER_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_AUTH_TOKEN environment variable is required",
        )
    })?;

    let client = EmberClient::new(AuthToken::new(token)?);

    let mut page_token = None;
    let mut total = 0usize;
    loop {
        let page = client.list_matches(page_token.as_ref()).await?;
        for entry in &page.matches {
            println!(
                "match: {:?}, person: {:?}",
                entry.match_id.as_str(),
                entry.profile_id.as_str()
            );
        }
        total += page.matches.len();
        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }
    println!("total matches: {total}");

    Ok(())
}
