use storefront_api::{
    config::BackendConfig,
    db::{connect_backend, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let backend = BackendConfig::from_env();
    let conn = connect_backend(&backend).await?;
    run_migrations(&conn).await?;
    println!("Migrations applied");
    Ok(())
}
