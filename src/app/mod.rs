// Application layer: concrete tracing strategies plugged into the resolver.

pub mod strategies;
