//! Checkers comparing the answers of solvers to the expected ones, and the sessions running them.

mod argumentation;
pub use argumentation::ArgumentationChecker;
pub use argumentation::IccmaExecutor;
pub use argumentation::Query;

mod cnf;
pub use cnf::DimacsExecutor;
pub use cnf::ModelCountingChecker;
pub use cnf::SatChecker;
pub use cnf::WeightedModelCountingChecker;
pub use cnf::WEIGHTED_COUNT_TOLERANCE;

mod external_solver;
pub use external_solver::ExternalSolver;

mod registry;
pub use registry::checker_by_name;
pub use registry::iter_checkers;
pub use registry::CheckerRunner;

mod session;
pub use session::run_checks;
pub use session::CheckCounters;
pub use session::CheckSettings;
pub use session::EXPLANATION_FILE_NAME;
pub use session::SOLVER_OUTPUT_FILE_NAME;

mod specs;
pub use specs::CheckResult;
pub use specs::Checker;
pub use specs::SolverExecutor;
