/// Classified seeding tests - taxonomy readback to bulk insert
mod utils;

use std::io::Write;
use std::sync::Arc;

use carmart_seed::modules::classifieds::ClassifiedSeedService;
use carmart_seed::modules::taxonomy::{read_taxonomy_csv, TaxonomyImportService, TaxonomyTree};
use tempfile::NamedTempFile;
use utils::memory::{InMemoryClassifiedRepository, InMemoryTaxonomyRepository};

async fn seeded_taxonomy(contents: &str) -> Arc<InMemoryTaxonomyRepository> {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();

    let records = read_taxonomy_csv(file.path()).unwrap();
    let repo = Arc::new(InMemoryTaxonomyRepository::new());
    TaxonomyImportService::new(repo.clone())
        .run(&TaxonomyTree::from_records(records))
        .await
        .unwrap();
    repo
}

#[tokio::test]
async fn creates_listings_against_persisted_taxonomy() {
    let taxonomy = seeded_taxonomy(
        "Make,Model,Model_Variant,Year_Start,Year_End,New_Gens\n\
         Toyota,Corolla,GR,2020,2023,\n\
         Ford,Focus,,2015,2018,\n",
    )
    .await;

    let repo = Arc::new(InMemoryClassifiedRepository::new(taxonomy.snapshot()));
    let created = ClassifiedSeedService::new(repo.clone()).run().await.unwrap();

    // One slot per make; random collisions aside, every listing must point
    // at a make/model pair that really exists.
    assert!(created >= 1 && created <= 2);

    let make_ids: Vec<i32> = taxonomy.makes().iter().map(|m| m.id).collect();
    let model_ids: Vec<i32> = taxonomy.models().iter().map(|m| m.id).collect();
    for listing in repo.listings() {
        assert!(make_ids.contains(&listing.make_id));
        assert!(model_ids.contains(&listing.model_id));
        assert!(!listing.slug.is_empty());
        assert_eq!(listing.vrm.len(), 8);
    }
}

#[tokio::test]
async fn second_insert_of_same_slug_is_skipped() {
    let taxonomy = seeded_taxonomy(
        "Make,Model,Model_Variant,Year_Start,Year_End,New_Gens\n\
         Toyota,Corolla,,2010,2015,\n",
    )
    .await;

    let repo = Arc::new(InMemoryClassifiedRepository::new(taxonomy.snapshot()));
    let service = ClassifiedSeedService::new(repo.clone());
    service.run().await.unwrap();

    let first_batch = repo.listings();
    use carmart_seed::modules::classifieds::ClassifiedRepository;
    let inserted = repo.create_many(first_batch.clone()).await.unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(repo.listings().len(), first_batch.len());
}

#[tokio::test]
async fn makes_without_models_produce_no_listings() {
    let taxonomy = Arc::new(InMemoryTaxonomyRepository::new());
    taxonomy.insert_make("Lonely Motors", "https://vl.imgix.net/img/lonely-motors-logo.png");

    let repo = Arc::new(InMemoryClassifiedRepository::new(taxonomy.snapshot()));
    let created = ClassifiedSeedService::new(repo.clone()).run().await.unwrap();

    assert_eq!(created, 0);
    assert!(repo.listings().is_empty());
}
