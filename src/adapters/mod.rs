// Adapters layer: concrete implementations of the domain ports that do not
// depend on a deployment target. File and DynamoDB tables live under config.

pub mod id;
pub mod memory;
