// ============================================================================
// Network URLs
// ============================================================================

/// Fake node bind address; port 0 picks a free port per test
pub const FAKE_NODE_ADDR: &str = "127.0.0.1:0";

// ============================================================================
// Test Accounts
// ============================================================================

/// Account queried by the account-method suites
pub const TEST_ADDRESS: &str = "one1pdv9lrdwl0rg5vglh4xtyrv3wjk3wsqket7zxy";

/// Well-formed 32-byte private key (test only, holds no funds)
pub const TEST_PRIVATE_KEY: &str =
    "0x1f84c95ac16e6a50f08d44c7bde7aff8742212fda6e4321fde48bf83bef266dc";

pub const TEST_MNEMONIC: &str =
    "urge clog right example dish drill card maximum mix bachelor section select";

// ============================================================================
// Test Configuration
// ============================================================================

pub const TEST_REQUEST_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// Test Environment Variables
// ============================================================================

/// Point the suites at a live node instead of the in-process fake
pub const TEST_SERVER_URL_ENV: &str = "TEST_SERVER_URL";

/// Account to query when running against a live node
pub const TEST_ADDRESS_ENV: &str = "ADDRESS";
