//! Route tables and the pattern matcher they are compiled with.
//!
//! ```text
//! route/
//! ├── pattern    # one-parameter template -> matcher + generator
//! ├── template   # Static | Dynamic classification
//! ├── table      # static and dynamic translation tables
//! ├── validate   # table invariants as diagnostics
//! └── builtin    # the site's declared routes
//! ```

mod builtin;
pub mod pattern;
mod table;
mod template;
pub mod validate;

pub use builtin::builtin_routes;
pub use pattern::{PathPattern, PatternError};
pub use table::{
    DynamicEntry, DynamicTable, RouteDecl, RouteTables, StaticEntry, StaticTable, TableError,
};
pub use template::RouteTemplate;
pub use validate::{RouteDiagnostic, RouteDiagnostics};
