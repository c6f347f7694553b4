pub(crate) mod rate_limiter;
