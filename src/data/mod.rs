//! Static registries: species and forms, the type chart, and generation-scoped
//! views. Everything here is built once by the corpus loader and read-only
//! afterwards.

pub mod corpus;
pub mod dex;
pub mod species;
pub mod types;

#[cfg(test)]
mod tests;
