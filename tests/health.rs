use axum::extract::State;
use nexus_orders_api::{
    db::{create_orm_conn, create_pool},
    routes::health::health_check,
    state::AppState,
};

#[tokio::test]
async fn health_check_pings_database() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            return Ok(());
        }
    };

    let pool = create_pool(&database_url).await?;
    let orm = create_orm_conn(&database_url).await?;

    let response = health_check(State(AppState { pool, orm })).await?;
    assert_eq!(response.0.status, "ok");

    Ok(())
}
