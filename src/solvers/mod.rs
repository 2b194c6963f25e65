//! Solvers dedicated to the preferred and stable semantics, and the predicates they rely on.

mod extensions;
pub use extensions::admissible_extensions;
pub use extensions::defends;
pub use extensions::is_admissible;
pub use extensions::is_conflict_free;
pub use extensions::is_stable;
pub use extensions::preferred_extensions;
pub use extensions::stable_extensions;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod query_resolver;
pub use query_resolver::QueryArgument;
pub use query_resolver::QueryResolver;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionChecker;
pub use specs::ExtensionEnumerator;
pub use specs::SemanticsSolver;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

mod utils;
