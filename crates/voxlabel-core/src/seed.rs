//! Seed points
//!
//! Seeds are voxel coordinates supplied alongside a label volume. Their order
//! is significant: earlier seeds take precedence when several land on the
//! same region.
//!
//! # Text format
//!
//! One seed per line as three whitespace-separated non-negative integers
//! `x y z`. Blank lines and lines starting with `#` are skipped.

use crate::error::{Error, Result};
use crate::volume::Volume;
use std::fmt;
use std::io::BufRead;
use std::str::FromStr;

/// A seed voxel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seed {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Seed {
    /// Create a seed at (x, y, z).
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Value of `volume` at this seed, or `None` if the seed lies outside.
    pub fn value_in(&self, volume: &Volume) -> Option<u32> {
        volume.get_voxel(self.x, self.y, self.z)
    }
}

impl From<(u32, u32, u32)> for Seed {
    fn from((x, y, z): (u32, u32, u32)) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let mut next = |axis: &str| -> std::result::Result<u32, String> {
            let field = fields
                .next()
                .ok_or_else(|| format!("missing {axis} coordinate"))?;
            field
                .parse::<u32>()
                .map_err(|e| format!("bad {axis} coordinate '{field}': {e}"))
        };
        let x = next("x")?;
        let y = next("y")?;
        let z = next("z")?;
        if let Some(extra) = fields.next() {
            return Err(format!("unexpected trailing field '{extra}'"));
        }
        Ok(Seed { x, y, z })
    }
}

/// Parse seeds from text, preserving line order.
///
/// # Errors
///
/// Returns [`Error::SeedParse`] with the 1-based line number of the first
/// malformed line.
pub fn parse_seeds(text: &str) -> Result<Vec<Seed>> {
    let mut seeds = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(seed) = parse_line(i + 1, line)? {
            seeds.push(seed);
        }
    }
    Ok(seeds)
}

/// Read seeds from a buffered reader, preserving line order.
pub fn read_seeds<R: BufRead>(reader: R) -> Result<Vec<Seed>> {
    let mut seeds = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(seed) = parse_line(i + 1, &line)? {
            seeds.push(seed);
        }
    }
    Ok(seeds)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<Seed>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    trimmed
        .parse::<Seed>()
        .map(Some)
        .map_err(|message| Error::SeedParse {
            line: line_no,
            message,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VoxelDepth;

    #[test]
    fn test_parse_seeds_keeps_order() {
        let text = "# x y z\n3 4 5\n\n  0 0 1  \n10\t2\t7\n";
        let seeds = parse_seeds(text).unwrap();
        assert_eq!(
            seeds,
            vec![Seed::new(3, 4, 5), Seed::new(0, 0, 1), Seed::new(10, 2, 7)]
        );
    }

    #[test]
    fn test_parse_seeds_reports_line() {
        let err = parse_seeds("1 2 3\n4 -5 6\n").unwrap_err();
        match err {
            Error::SeedParse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("y coordinate"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(parse_seeds("1 2\n").is_err());
        assert!(parse_seeds("1 2 3 4\n").is_err());
    }

    #[test]
    fn test_read_seeds_from_reader() {
        let reader = std::io::Cursor::new("1 1 1\n2 2 2\n");
        let seeds = read_seeds(reader).unwrap();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[1].to_string(), "(2, 2, 2)");
    }

    #[test]
    fn test_value_in() {
        let vol = Volume::from_data(2, 1, 1, VoxelDepth::Bit8, vec![0, 9]).unwrap();
        assert_eq!(Seed::new(1, 0, 0).value_in(&vol), Some(9));
        assert_eq!(Seed::new(2, 0, 0).value_in(&vol), None);
    }
}
