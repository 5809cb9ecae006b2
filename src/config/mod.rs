mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{
    DeclarationOrderConfig, HeaderConfig, IncludeGuardConfig, IndentConfig,
    InternalVariablesConfig, LineLengthConfig, RuleSwitch, SemicolonSpaceConfig, StyleConfig,
};
pub use validation::validate_config_semantics;
