//! CarMart database seeder
//!
//! Imports the vehicle taxonomy from `taxonomy.csv` and then generates
//! randomized classified listings against the persisted taxonomy.

use std::sync::Arc;

use carmart_seed::log_error;
use carmart_seed::log_info;
use carmart_seed::modules::classifieds::{
    ClassifiedRepository, ClassifiedRepositoryImpl, ClassifiedSeedService,
};
use carmart_seed::modules::taxonomy::{
    read_taxonomy_csv, TaxonomyImportService, TaxonomyRepository, TaxonomyRepositoryImpl,
    TaxonomyTree,
};
use carmart_seed::shared::errors::SeedResult;
use carmart_seed::shared::utils::init_logger;
use carmart_seed::shared::Database;

const TAXONOMY_CSV: &str = "taxonomy.csv";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_logger();

    if let Err(e) = run().await {
        log_error!("Seeding failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> SeedResult<()> {
    // The pool lives for the whole run and is released when `database` drops,
    // on the error path included.
    let database = Database::new()?;

    let records = read_taxonomy_csv(TAXONOMY_CSV)?;
    log_info!("Read {} taxonomy rows from {}", records.len(), TAXONOMY_CSV);

    let tree = TaxonomyTree::from_records(records);
    log_info!(
        "Aggregated {} makes, {} models, {} variants",
        tree.make_count(),
        tree.model_count(),
        tree.variant_count()
    );

    let taxonomy_repo: Arc<dyn TaxonomyRepository> =
        Arc::new(TaxonomyRepositoryImpl::new(database.pool().clone()));
    let summary = TaxonomyImportService::new(taxonomy_repo).run(&tree).await?;
    log_info!(
        "Taxonomy import complete: {} makes, {} models, {} variants",
        summary.makes,
        summary.models,
        summary.variants
    );

    let classified_repo: Arc<dyn ClassifiedRepository> =
        Arc::new(ClassifiedRepositoryImpl::new(database.pool().clone()));
    let created = ClassifiedSeedService::new(classified_repo).run().await?;
    log_info!("Classified seeding complete: {} listings", created);

    Ok(())
}
