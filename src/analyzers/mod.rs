pub mod supply_resolver;
pub mod whale_analyzer;

pub use supply_resolver::TokenSupplyResolver;
pub use whale_analyzer::WhaleClassifier;
