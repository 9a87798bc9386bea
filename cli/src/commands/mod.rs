pub(crate) mod configuration;
pub(crate) mod products;
