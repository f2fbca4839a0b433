// Network Profile Integration Tests
//
// ENV: Sets LOCAL_*, DEVNET_*, MAINNET_* and GAS_* in the process environment
//      (serialized, restored after each test)
// TESTS: Profile resolution from the real environment and provider hand-off
//        - Upfront validation reports every missing variable
//        - A provider built from a profile reaches the fake node

mod provider_handoff;

// Make common utilities available
#[path = "../src/common/mod.rs"]
mod common;
