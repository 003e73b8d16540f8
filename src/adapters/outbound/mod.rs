pub mod imagegen;
pub mod mux;
pub mod shopify;
