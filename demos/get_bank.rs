//! Example: Fetching a bank record from the bankcode-jp.com API.
//!
//! Run with: BANKCODE_API_KEY=... cargo run --example get_bank

use bankcode_api_client::{BankcodeClient, GetParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("BANKCODE_API_KEY").unwrap_or_else(|_| "API_KEY".to_string());
    let client = BankcodeClient::builder().api_key(api_key).build()?;

    // Fetch Mizuho Bank (code 0001) with all fields.
    match client.get_bank("0001", &GetParams::default()).await {
        Ok(bank) => {
            println!("Code: {}", bank.code);
            println!("Name: {}", bank.name);
            println!("Half-width kana: {}", bank.half_width_kana);
            println!("Full-width kana: {}", bank.full_width_kana);
            println!("Hiragana: {}", bank.hiragana);
        }
        Err(e) => println!("{e}"),
    }

    // Narrow the response to a field selection.
    let params = GetParams::with_fields(["code", "name"]);
    match client.get_bank("0001", &params).await {
        Ok(bank) => println!("Selected fields: {} {}", bank.code, bank.name),
        Err(e) => println!("{e}"),
    }

    Ok(())
}
