#[allow(non_snake_case)]
pub mod growth_examples;
