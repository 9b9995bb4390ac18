use clap::Parser;
use collection_seeder::utils::{logger, validation::Validate};
use collection_seeder::{CliConfig, CollectionPipeline, LocalStorage, UpdateEngine};

const STATUS_LINES: [&str; 4] = [
    "✅ Postman collection updated successfully!",
    "✅ Added 'Seeded Data Tests' folder with 8 pre-configured tests",
    "✅ Updated login credentials to match seeded passwords",
    "✅ Register User now uses test.user instead of john.doe",
];

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(e.exit_code());
    }

    let dry_run = config.dry_run;
    let pipeline = CollectionPipeline::new(LocalStorage::default(), config);
    let engine = UpdateEngine::new(pipeline).with_dry_run(dry_run);

    match engine.run().await {
        Ok(summary) if summary.written() => {
            for line in STATUS_LINES {
                println!("{}", line);
            }
        }
        Ok(summary) => {
            println!(
                "Dry run: would patch {} request(s) ({}) and add {} seeded tests",
                summary.report.patched.len(),
                summary.report.patched.join(", "),
                summary.inserted_requests
            );
        }
        Err(e) => {
            tracing::error!("Collection update failed: {}", e);
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
