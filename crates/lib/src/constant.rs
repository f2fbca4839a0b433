pub const JSONRPC_VERSION: &str = "2.0";

// JSON-RPC error codes
pub const INVALID_PARAMS_CODE: i64 = -32602;

// Account methods
pub const METHOD_V1_GET_BALANCE: &str = "hmy_getBalance";
pub const METHOD_V2_GET_BALANCE: &str = "hmyv2_getBalance";
pub const METHOD_V1_GET_BALANCE_BY_BLOCK_NUMBER: &str = "hmy_getBalanceByBlockNumber";
pub const METHOD_V2_GET_BALANCE_BY_BLOCK_NUMBER: &str = "hmyv2_getBalanceByBlockNumber";
pub const METHOD_V1_GET_TRANSACTION_COUNT: &str = "hmy_getTransactionCount";
pub const METHOD_V2_GET_TRANSACTION_COUNT: &str = "hmyv2_getTransactionCount";

// Protocol methods
pub const METHOD_V1_BLOCK_NUMBER: &str = "hmy_blockNumber";
pub const METHOD_V2_BLOCK_NUMBER: &str = "hmyv2_blockNumber";
pub const METHOD_V1_GAS_PRICE: &str = "hmy_gasPrice";
pub const METHOD_V2_GAS_PRICE: &str = "hmyv2_gasPrice";
pub const METHOD_V1_GET_EPOCH: &str = "hmy_getEpoch";
pub const METHOD_V2_GET_EPOCH: &str = "hmyv2_getEpoch";

pub const LEGACY_METHOD_PREFIX: &str = "hmy_";
pub const V2_METHOD_PREFIX: &str = "hmyv2_";

// Block references
pub const BLOCK_TAG_LATEST: &str = "latest";
pub const BLOCK_TAG_FIRST: &str = "0x1";

// Harness defaults
pub const DEFAULT_NET_URL: &str = "http://localhost:9500";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_REPORT_PATH: &str = "results.json";
pub const DEFAULT_STRESS_REPORT_PATH: &str = "stress-result.json";
pub const DEFAULT_BENCH_REQUESTS: usize = 100;
pub const DEFAULT_BENCH_MAX_CONCURRENT: usize = 10;

// Environment variables
pub const NET_URL_ENV: &str = "NET_URL";
pub const ADDRESS_ENV: &str = "ADDRESS";
pub const ENVIRONMENT_ENV: &str = "RPCTESTER_ENVIRONMENT";
pub const GAS_LIMIT_ENV: &str = "GAS_LIMIT";
pub const GAS_PRICE_ENV: &str = "GAS_PRICE";

// Per-network variable suffixes, appended to the network prefix
pub const MNEMONIC_SUFFIX: &str = "MNEMONIC";
pub const PRIVATE_KEY_SUFFIX: &str = "PRIVATE_KEY";
pub const SHARD_0_URL_SUFFIX: &str = "0_URL";

pub const PRIVATE_KEY_BYTES: usize = 32;
