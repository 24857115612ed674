use storefront_api::{
    config::BackendConfig,
    db::{connect_backend, run_migrations},
    repository::OrmCatalog,
    services::seed_service::seed_catalog,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .init();

    let backend = BackendConfig::from_env();
    let conn = connect_backend(&backend).await?;
    // Ensure migrations are applied.
    run_migrations(&conn).await?;

    let catalog = OrmCatalog::new(conn);
    let report = seed_catalog(&catalog).await?;

    println!(
        "Seed completed: {} categories, {} products",
        report.categories, report.products
    );
    Ok(())
}
