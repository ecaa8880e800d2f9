//! Solidus - typed route-path accessors generated from route-tree artifacts.
//!
//! Scans a generated route tree (a TanStack-style `routeTree.gen.ts`) for
//! path templates like `/users/$userId` and writes a TypeScript module with
//! one strongly-named accessor per route:
//!
//! ```ts
//! RoutePaths.usersByUserId(42)  // "/users/42"
//! ```
//!
//! The pipeline is four pure stages plus one side-effecting driver:
//! [`segment::parse_segments`] splits a template, [`name::derive_name`]
//! turns segments into a camelCase identifier and parameter list,
//! [`extract::extract_routes`] scans and de-duplicates the whole artifact,
//! [`emit::emit_module`] renders the module text, and
//! [`generate::Generator`] wires them to the filesystem with atomic writes.

pub mod config;
pub mod emit;
pub mod error;
pub mod extract;
pub mod generate;
pub mod name;
pub mod segment;

pub use config::{GeneratorConfig, ProjectConfig};
pub use emit::emit_module;
pub use error::GenerateError;
pub use extract::{extract_routes, Extraction, RejectedRoute, Route};
pub use generate::{Generator, PassReport};
pub use name::{derive_name, DerivedName};
pub use segment::{parse_segments, Segment};
