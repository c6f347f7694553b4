pub(crate) mod random_adapters;
