// Version report rendering for build verification

use std::io::{self, Write};

use crate::models::version::Version;

/// Render the field-by-field report block for a version record.
///
/// Fields appear one per line in declaration order, with the release stage
/// shown as its integer code:
///
/// ```text
/// Version:{
/// 	Major: 1,
/// 	Minor: 2,
/// 	Bug: 1,
/// 	Stage: 2,
/// 	StageRev: 3,
/// }
/// ```
///
/// The same version always renders to identical bytes.
pub fn render_report(version: &Version) -> String {
    format!(
        "Version:{{\n\tMajor: {},\n\tMinor: {},\n\tBug: {},\n\tStage: {},\n\tStageRev: {},\n}}\n",
        version.major(),
        version.minor(),
        version.bug(),
        version.stage().code(),
        version.stage_rev(),
    )
}

/// Write the report block for a version record to a writer
pub fn write_report<W: Write>(writer: &mut W, version: &Version) -> io::Result<()> {
    writer.write_all(render_report(version).as_bytes())
}

/// Print the report block for a version record to stdout
pub fn print_report(version: &Version) {
    print!("{}", render_report(version));
}
