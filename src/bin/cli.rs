use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    lawncare::cli::run().await
}
