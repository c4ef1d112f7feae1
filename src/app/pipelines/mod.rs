pub mod wikidata_pipeline;
