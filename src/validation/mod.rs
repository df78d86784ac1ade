mod error;
mod path;
mod references;
mod schema_check;
mod schemas;
mod suite;
mod validator;


pub use error::{SourceLocator, ValidationError, ValidationWarning};
pub use path::{InstancePath, PathToken};
pub use references::{IdentifierSets, extract_referenced_rule_ids, extract_rule_ids};
pub use schema_check::SchemaChecker;
pub use schemas::{SchemaRetriever, load_schema};
pub use suite::{check_suite_file, check_suite_value, locate_suite};
pub use validator::Validator;
