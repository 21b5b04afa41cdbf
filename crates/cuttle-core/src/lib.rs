//! # cuttle-core
//!
//! Derives the identities of a Fabric-style network from a declarative
//! topology and turns them into a registration/enrollment batch for a
//! certificate authority.
//!
//! ## Pipeline
//!
//! ```text
//! Topology ──resolve()──> Vec<Identity> ──project()──> EnrollmentBatch
//! ```
//!
//! - **Resolver**: naming conventions, default admin/user injection and the
//!   output path layout. See [`resolver`].
//! - **Projector**: one request per identity with flattened subjects and
//!   fixed registration attributes. See [`projector`].
//!
//! Both stages are pure and cannot fail. Loading a topology file
//! ([`Topology::load`]) and strict checks ([`validate`]) are the only
//! fallible operations.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cuttle_core::{project, resolve, ProjectorConfig, Topology};
//!
//! let topology = Topology::load("crypto-config.yaml")?;
//! let identities = resolve(&topology);
//! let batch = project(&identities, &ProjectorConfig::default());
//! println!("{}", batch.to_yaml()?);
//! ```

mod error;
pub mod loader;
pub mod projector;
pub mod resolver;
pub mod types;
pub mod validate;

pub use error::{CuttleError, Result};
pub use loader::resolve_file;
pub use projector::{project, project_with, ProjectorConfig, SecretSource, DEFAULT_SECRET};
pub use resolver::{resolve, resolve_ordering_org, resolve_peer_org};
pub use types::*;
pub use validate::ValidationIssue;
