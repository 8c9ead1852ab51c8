#[allow(non_snake_case)]
pub mod BatchReactor;
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod GrowthKinetics;
#[allow(non_snake_case)]
pub mod Utils;
