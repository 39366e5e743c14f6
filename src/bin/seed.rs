use medicare_portal::{
    config::Config,
    error::AppError,
    infra::{factory::bootstrap_state, seed::{seed_demo_data, SeedReport}},
    init_logging,
};
use tracing::error;

async fn seed(config: &Config) -> Result<SeedReport, AppError> {
    let state = bootstrap_state(config).await?;
    seed_demo_data(&state).await
}

#[tokio::main]
async fn main() {
    let _guard = init_logging();
    let config = Config::from_env();

    match seed(&config).await {
        Ok(report) => println!(
            "Seed complete. user_created={} doctors={} services={} sample_data={}",
            report.user_created, report.doctors_created, report.services_created, report.sample_data_created
        ),
        Err(e) => {
            error!("Seeding failed: {}", e);
            std::process::exit(1);
        }
    }
}
