pub mod decimal_matcher;
pub mod decimal_parser;
