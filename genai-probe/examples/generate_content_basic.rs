use genai_probe::types::content::Content;
use genai_probe::Client;

#[tokio::main]
async fn main() -> genai_probe::Result<()> {
    let client = Client::from_env()?;
    let response = client
        .models()
        .generate_content("gemini-2.0-flash", vec![Content::text("给我一句问候")])
        .await?;
    println!("{:?}", response.text());
    println!("{:?}", response.usage_metadata);
    Ok(())
}
