//! AnySite core
//!
//! Every tool the server exposes is one [`OperationSpec`] entry in a static
//! table. A single generic pipeline drives all of them:
//! validate the arguments against the declared parameters, normalize them into
//! the upstream payload, then hand the payload to an [`Upstream`] dispatcher.
//! Nothing in this crate performs I/O.

pub mod credentials;
pub mod error;
pub mod executor;
pub mod normalize;
pub mod operations;
pub mod reference;
pub mod schema;
pub mod upstream;
pub mod validate;

pub use credentials::Credentials;
pub use error::{DispatchError, InvocationError, ValidationError, ValidationResult};
pub use executor::{execute, prepare};
pub use operations::{find_operation, operations};
pub use schema::{
    Bound, HttpMethod, Inclusion, Literal, NumberRange, OperationSpec, ParamKind, ParamSpec,
    Reshape,
};
pub use upstream::{Upstream, UpstreamRequest};
