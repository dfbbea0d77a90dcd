//! Shared test utilities for `spantree-core`.

use proptest::test_runner::Config as ProptestConfig;
use spantree_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a proptest configuration from the shared CI profile.
///
/// Every property suite in the crate reads `PROGTEST_CASES` and
/// `SPANTREE_PBT_FORK` the same way.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}
