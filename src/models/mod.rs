pub mod matcher_definition;
pub mod validation_result;
