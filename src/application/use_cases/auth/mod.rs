//! Authentication Use Cases

mod authenticate;

pub use authenticate::AuthenticateUseCase;
