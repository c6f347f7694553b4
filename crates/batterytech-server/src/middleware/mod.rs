pub(crate) mod cors;
pub(crate) mod rate_limit;
pub(crate) mod request_tracing;
