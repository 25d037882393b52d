use std::io::{self, BufRead, Write};

use emberlink::{OtpCode, PhoneNumber, SmsAuth};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phone_raw = std::env::var("EMBER_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EMBER_PHONE environment variable is required (E.164, e.g. +491701234567)",
        )
    })?;

    let auth = SmsAuth::new();
    let phone = PhoneNumber::parse(None, phone_raw)?;

    let sms_sent = auth.request_otp(&phone).await?;
    println!("sms_sent: {sms_sent}");

    print!("enter the code you received: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let code = OtpCode::new(line)?;

    let Some(refresh) = auth.validate_otp(&phone, &code).await? else {
        println!("code rejected");
        return Ok(());
    };

    let token = auth.exchange_refresh_token(&refresh).await?;
    println!("auth token: {}", token.as_str());

    Ok(())
}
