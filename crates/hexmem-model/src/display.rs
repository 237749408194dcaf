//! Display implementations and the layout table text dump.

use std::fmt;
use std::fmt::Write as _;

use crate::{LayoutTable, Region};

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_sentinel() {
            write!(f, "{}: offset {}, end of table", self.name, self.offset)
        } else if self.is_data_bearing() {
            write!(
                f,
                "{}: offset {}, length {}, stride {}",
                self.name, self.offset, self.length, self.group_stride
            )
        } else {
            write!(
                f,
                "{}: offset {}, length {}, address map",
                self.name, self.offset, self.length
            )
        }
    }
}

/// Renders a layout table as text, one region per line.
///
/// Used by the CLI's `--dump-layout` flag.
pub fn dump_table(table: &LayoutTable) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Memory layout: {} regions, {} parameters, address space end {}",
        table.regions().len(),
        table.expected_parameters(),
        table.address_space_end()
    );
    for (i, region) in table.regions().iter().enumerate() {
        let _ = writeln!(out, "  [{i:2}] {region}");
    }
    out
}
