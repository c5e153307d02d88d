use chrono::NaiveDate;
use rust_decimal::dec;
use nexus_orders_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
};
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    run_migrations(&pool).await?;

    let supplier_id = ensure_supplier(&pool).await?;
    let product_id = ensure_product(&pool, supplier_id).await?;
    let customer_id = ensure_customer(&pool).await?;
    let employee_id = ensure_employee(&pool).await?;

    println!(
        "Seed completed. Supplier: {supplier_id}, Product: {product_id}, \
         Customer: {customer_id}, Employee: {employee_id}"
    );
    Ok(())
}

async fn ensure_supplier(pool: &sqlx::PgPool) -> anyhow::Result<Uuid> {
    upsert_by_email(
        pool,
        r#"
        INSERT INTO suppliers (id, name, contact_person, email, phone)
        VALUES ($1, 'Big TV Store', 'Spence', $2, '222')
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
        "SELECT id FROM suppliers WHERE email = $1",
        "spence@tv.com",
    )
    .await
}

async fn ensure_product(pool: &sqlx::PgPool, supplier_id: Uuid) -> anyhow::Result<Uuid> {
    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO products (id, name, description, price, sku, supplier_id)
        VALUES ($1, 'Big Screen TV', 'A very large TV', $2, 'TV-BIG-01', $3)
        ON CONFLICT (sku) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(dec!(1200.00))
    .bind(supplier_id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some((id,)) => Ok(id),
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM products WHERE sku = $1")
                .bind("TV-BIG-01")
                .fetch_one(pool)
                .await?;
            Ok(existing.0)
        }
    }
}

async fn ensure_customer(pool: &sqlx::PgPool) -> anyhow::Result<Uuid> {
    upsert_by_email(
        pool,
        r#"
        INSERT INTO customers (id, first_name, last_name, email, phone, address)
        VALUES ($1, 'Carrie', 'Heffernan', $2, '111', 'Queens, NY')
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
        "SELECT id FROM customers WHERE email = $1",
        "carrie@example.com",
    )
    .await
}

async fn ensure_employee(pool: &sqlx::PgPool) -> anyhow::Result<Uuid> {
    let row: Option<(Uuid,)> = sqlx::query_as(
        r#"
        INSERT INTO employees (id, first_name, last_name, role, email, hire_date)
        VALUES ($1, 'Doug', 'Heffernan', 'IPS Driver', $2, $3)
        ON CONFLICT (email) DO NOTHING
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind("doug@ips.com")
    .bind(NaiveDate::from_ymd_opt(1995, 5, 1).unwrap())
    .fetch_optional(pool)
    .await?;

    match row {
        Some((id,)) => Ok(id),
        None => {
            let existing: (Uuid,) = sqlx::query_as("SELECT id FROM employees WHERE email = $1")
                .bind("doug@ips.com")
                .fetch_one(pool)
                .await?;
            Ok(existing.0)
        }
    }
}

async fn upsert_by_email(
    pool: &sqlx::PgPool,
    insert_sql: &str,
    select_sql: &str,
    email: &str,
) -> anyhow::Result<Uuid> {
    let row: Option<(Uuid,)> = sqlx::query_as(insert_sql)
        .bind(Uuid::new_v4())
        .bind(email)
        .fetch_optional(pool)
        .await?;

    match row {
        Some((id,)) => Ok(id),
        None => {
            let existing: (Uuid,) = sqlx::query_as(select_sql).bind(email).fetch_one(pool).await?;
            Ok(existing.0)
        }
    }
}
