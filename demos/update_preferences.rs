use std::io;

use emberlink::{AuthToken, EmberClient, GenderFilter, PreferenceUpdate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("EMBER_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_AUTH_TOKEN environment variable is required",
        )
    })?;

    let client = EmberClient::new(AuthToken::new(token)?);

    let update = PreferenceUpdate::new()
        .with_age_filter(24, 32)?
        .with_distance_filter(25)?
        .with_gender_filter(GenderFilter::Women);
    let response = client.update_preferences(&update).await?;
    println!("response: {response}");

    Ok(())
}
