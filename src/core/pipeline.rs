pub use crate::app::pipelines::wikidata_pipeline::WikidataPipeline;
