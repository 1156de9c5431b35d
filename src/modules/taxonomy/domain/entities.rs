use std::collections::HashMap;

/// One parsed row of `taxonomy.csv`. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRecord {
    pub make: String,
    pub model: String,
    /// `None` when the row contributes a model but no variant
    pub variant: Option<String>,
    pub year_start: i32,
    pub year_end: i32,
    /// Carried through from the source file, currently unused downstream
    pub new_gens: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

#[derive(Debug, Default, Clone)]
pub struct ModelEntry {
    pub variants: HashMap<String, YearRange>,
}

/// Aggregated make -> model -> variant mapping, built once per import run and
/// discarded after orchestration. Key order is irrelevant.
#[derive(Debug, Default, Clone)]
pub struct TaxonomyTree {
    pub makes: HashMap<String, HashMap<String, ModelEntry>>,
}

impl TaxonomyTree {
    /// Fold records into the tree. For a repeated `(make, model, variant)`
    /// triple the last occurrence wins outright; year ranges are not merged.
    pub fn from_records(records: impl IntoIterator<Item = TaxonomyRecord>) -> Self {
        let mut tree = Self::default();
        for record in records {
            tree.insert(record);
        }
        tree
    }

    pub fn insert(&mut self, record: TaxonomyRecord) {
        let models = self.makes.entry(record.make).or_default();
        let entry = models.entry(record.model).or_default();

        if let Some(variant) = record.variant {
            entry.variants.insert(
                variant,
                YearRange {
                    start: record.year_start,
                    end: record.year_end,
                },
            );
        }
    }

    pub fn make_count(&self) -> usize {
        self.makes.len()
    }

    pub fn model_count(&self) -> usize {
        self.makes.values().map(HashMap::len).sum()
    }

    pub fn variant_count(&self) -> usize {
        self.makes
            .values()
            .flat_map(HashMap::values)
            .map(|entry| entry.variants.len())
            .sum()
    }
}

/// Persisted make as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Make {
    pub id: i32,
    pub name: String,
    pub image: String,
}

/// Persisted model, unique per `(make_id, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub id: i32,
    pub make_id: i32,
    pub name: String,
}

/// Persisted model variant, unique per `(model_id, name)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVariant {
    pub id: i32,
    pub model_id: i32,
    pub name: String,
    pub year_start: i32,
    pub year_end: i32,
}

/// Deterministic logo URL for a make: lowercased name with whitespace runs
/// replaced by hyphens, served through imgix.
pub fn make_image_url(name: &str) -> String {
    let slug = name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    format!("https://vl.imgix.net/img/{slug}-logo.png?auto=format,compress")
}
