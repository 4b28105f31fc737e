use std::sync::Arc;

use contracts::domain::a003_purchase::aggregate::PurchaseStatus;
use contracts::system::auth::LoginRequest;
use visulab_core::reports::ReportError;
use visulab_core::shared::clock::SystemClock;
use visulab_core::shared::config::{get_export_dir, load_config};
use visulab_core::shared::data::{seed, Store};
use visulab_core::shared::export::DirectorySink;
use visulab_core::system;
use visulab_core::usecases::u501_export_reports::ExportExecutor;

const DEMO_EMAIL: &str = "admin@visulab.com";
const DEMO_PASSWORD: &str = "demo";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;
    let sink = DirectorySink::new(get_export_dir(&config)?);
    tracing::info!("Exports go to {}", sink.dir().display());

    let store = Arc::new(seed::seeded_store(Store::latency_from(&config.mock)));

    let session = system::auth::login(&LoginRequest {
        email: DEMO_EMAIL.into(),
        password: DEMO_PASSWORD.into(),
    })?;
    tracing::info!("Session: {}", serde_json::to_string(&session)?);

    let executor = ExportExecutor::new(
        store,
        Arc::new(SystemClock),
        Arc::new(sink),
        config.report.clone(),
    );

    let results = vec![
        ("purchases CSV", executor.export_purchases_csv(None).await),
        ("purchases TXT", executor.export_purchases_txt(None).await),
        (
            "received purchases CSV",
            executor
                .export_purchases_csv(Some(PurchaseStatus::Received))
                .await,
        ),
        ("shortages CSV", executor.export_shortages_csv().await),
        (
            "dashboard TXT",
            executor.export_dashboard_txt(Default::default()).await,
        ),
        ("dashboard PDF", executor.export_dashboard_pdf().await),
    ];

    let mut failed = 0;
    for (name, result) in results {
        match result {
            Ok(file) => tracing::info!("{}: {}", name, file.file_name),
            Err(e) => {
                failed += 1;
                let notice = e
                    .downcast_ref::<ReportError>()
                    .map(ReportError::user_message)
                    .unwrap_or("Error generating the report.");
                tracing::error!("{}: {} ({})", name, notice, e);
            }
        }
    }

    tracing::info!("Demo finished, {} export(s) failed", failed);
    Ok(())
}
