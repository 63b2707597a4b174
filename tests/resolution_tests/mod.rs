pub mod auths_provider;
pub mod provider_chain;
pub mod test_utils;
