use std::io;

use emberlink::{AuthToken, EmberClient, ProfileId};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token = std::env::var("EMBER_AUTH_TOKEN").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_AUTH_TOKEN environment variable is required",
        )
    })?;
    let person = std::env::var("EMBER_PROFILE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_PROFILE_ID environment variable is required",
        )
    })?;

    let client = EmberClient::new(AuthToken::new(token)?);
    let profile = client.get_profile(&ProfileId::new(person)?).await?;

    println!(
        "name: {:?}, birth_date: {}, distance_mi: {}, photos: {}",
        profile.name,
        profile.birth_date,
        profile.distance_mi,
        profile.photos.len()
    );
    println!("bio: {}", profile.bio);
    println!("additional: {:#?}", profile.additional);

    Ok(())
}
