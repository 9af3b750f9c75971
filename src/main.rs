// Verman - version record smoke check
// Prints the embedded version record for build verification

use verman::models::version::{ReleaseStage, Version};
use verman::services::report;

/// The version record embedded in this build, from tag `1.2.1-rc.3`
fn embedded_version() -> Version {
    match Version::new(1, 2, 1, ReleaseStage::ReleaseCandidate, 3) {
        Ok(version) => version,
        Err(_) => unreachable!("release candidate is a named stage"),
    }
}

fn main() {
    println!("Start of tests!");
    report::print_report(&embedded_version());
    println!("End of tests!");
}
