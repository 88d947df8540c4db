//! Constants used in the deploy scripts

/// The name of the contract deployed by the `deploy` command
pub const TURING_SUBSCRIPTION_MANAGER_CONTRACT: &str = "TuringSubscriptionManager";

/// The default directory in which deployment records are kept
pub const DEFAULT_DEPLOYMENTS_PATH: &str = "deployments";

/// The default directory in which compiled contract artifacts are kept
pub const DEFAULT_ARTIFACTS_PATH: &str = "artifacts";

/// The default directory to which contract ABIs are exported
pub const DEFAULT_ABI_PATH: &str = "abi";

/// The extension of artifact, ABI, and deployment record files
pub const JSON_EXTENSION: &str = "json";

/// The extension of the directories hardhat nests artifacts under
pub const SOLIDITY_EXTENSION: &str = "sol";

/// The environment variable holding the mainnet deployer key
pub const DEPLOYER_KEY_ENV_VAR: &str = "DEPLOYER_KEY";

/// The environment variable holding the testnet deployer key
pub const TEST_DEPLOYER_KEY_ENV_VAR: &str = "TEST_DEPLOYER_KEY";

/// The log filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

/// The Solidity compiler version the artifacts are built with
pub const SOLC_VERSION: &str = "0.8.9";

/// The number of optimizer runs the artifacts are built with
pub const SOLC_OPTIMIZER_RUNS: u32 = 200;
