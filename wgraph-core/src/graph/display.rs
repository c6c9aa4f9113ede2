//! Human-readable diagnostic dump.
//!
//! The layout is meant for debugging only and is not parsed anywhere:
//!
//! ```text
//! vertices: 3
//! edges: 1
//!
//! weights:
//! 0 2 inf
//! 2 0 inf
//! inf inf 0
//!
//! degrees:
//! 1 1 0
//!
//! visited:
//! 0 0 0
//! ```

use std::fmt::{self, Display, Write as _};

use super::WeightedGraph;

impl Display for WeightedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "vertices: {}", self.vertex_count())?;
        writeln!(f, "edges: {}", self.edge_count())?;

        f.write_str("\nweights:\n")?;
        for row in self.weights.rows() {
            write_row(f, row.iter())?;
        }

        f.write_str("\ndegrees:\n")?;
        write_row(f, self.degrees.iter())?;

        f.write_str("\nvisited:\n")?;
        write_row(f, self.visited().iter().map(|&seen| u8::from(seen)))
    }
}

fn write_row<T: Display>(
    f: &mut fmt::Formatter<'_>,
    mut values: impl Iterator<Item = T>,
) -> fmt::Result {
    if let Some(first) = values.next() {
        write!(f, "{first}")?;
        for value in values {
            f.write_char(' ')?;
            write!(f, "{value}")?;
        }
    }
    f.write_char('\n')
}
