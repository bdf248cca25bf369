//! Reading points from and writing clusters to the flat text format.
//!
//! Input:
//!
//! ```text
//! count=3
//! 1 0 0
//! 2 1 0
//! 3 100 100
//! ```
//!
//! Output, one line per cluster:
//!
//! ```text
//! cluster 0: 1[0,0] 2[1,0]
//! cluster 1: 3[100,100]
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::cluster::{singletons, Cluster, Point};
use crate::error::{Error, Result};

/// Largest accepted coordinate value (inclusive). The smallest is 0.
pub const COORD_MAX: f64 = 10000.0;

const HEADER_PREFIX: &str = "count=";

// 2^53: above this, `f64` cannot tell neighbouring integers apart.
const MAX_EXACT_F64_INT: f64 = 9_007_199_254_740_992.0;

// Guards against huge preallocations from a bogus header.
const MAX_PREALLOC: usize = 4096;

/// Parse the `count=` header and exactly `count` records.
///
/// Lines after the last record are ignored. Blank lines between records are skipped.
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (header_line, header) = match lines.next() {
        Some((n, line)) => (n, line?),
        None => {
            return Err(Error::Malformed {
                line: 1,
                message: "missing `count=` header".to_string(),
            })
        }
    };
    let count = parse_header(header_line, &header)?;

    let mut points = Vec::with_capacity(count.min(MAX_PREALLOC));
    let mut last_line = header_line;
    while points.len() < count {
        let Some((n, line)) = lines.next() else {
            return Err(Error::Malformed {
                line: last_line + 1,
                message: format!("expected {count} records, found {}", points.len()),
            });
        };
        let line = line?;
        last_line = n;

        if line.trim().is_empty() {
            continue;
        }
        points.push(parse_record(n, &line)?);
    }

    debug!(points = points.len(), "read points");
    Ok(points)
}

fn parse_header(line: usize, text: &str) -> Result<usize> {
    let rest = text
        .trim_end()
        .strip_prefix(HEADER_PREFIX)
        .ok_or_else(|| Error::Malformed {
            line,
            message: format!("expected `{HEADER_PREFIX}<n>`, found {text:?}"),
        })?;

    rest.trim().parse::<usize>().map_err(|_| Error::Malformed {
        line,
        message: format!("invalid record count {rest:?}"),
    })
}

fn parse_record(line: usize, text: &str) -> Result<Point> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(Error::Malformed {
            line,
            message: format!("expected `<id> <x> <y>`, found {} fields", fields.len()),
        });
    }

    let id = parse_id(line, fields[0])?;
    let x = parse_integral(line, "x", fields[1])?;
    let y = parse_integral(line, "y", fields[2])?;

    for (name, v) in [("x", x), ("y", y)] {
        if !(0.0..=COORD_MAX).contains(&v) {
            return Err(Error::InvalidData {
                line,
                message: format!("{name} = {v} outside [0, {COORD_MAX}]"),
            });
        }
    }

    Ok(Point::new(id, x as f32, y as f32))
}

/// Ids in plain integer form are taken exactly. Decimal or exponent forms go through
/// `f64` and are only accepted while every integer of that magnitude is representable.
fn parse_id(line: usize, token: &str) -> Result<i64> {
    if let Ok(id) = token.parse::<i64>() {
        return Ok(id);
    }

    let v = parse_integral(line, "id", token)?;
    if v.abs() > MAX_EXACT_F64_INT {
        return Err(Error::InvalidData {
            line,
            message: format!("id {token} out of range"),
        });
    }
    Ok(v as i64)
}

fn parse_integral(line: usize, name: &str, token: &str) -> Result<f64> {
    let v: f64 = token.parse().map_err(|_| Error::Malformed {
        line,
        message: format!("{name} is not a number: {token:?}"),
    })?;

    if !v.is_finite() || v.fract() != 0.0 {
        return Err(Error::InvalidData {
            line,
            message: format!("{name} must be an integer, found {token}"),
        });
    }
    Ok(v)
}

/// Read points from a file.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let file = File::open(path.as_ref())?;
    read_points(BufReader::new(file))
}

/// Read points from a file and wrap each one in a singleton cluster.
pub fn load_clusters(path: impl AsRef<Path>) -> Result<Vec<Cluster>> {
    let points = load_points(path)?;
    singletons(&points)
}

/// Write one `cluster <i>: <points>` line per cluster.
pub fn write_clusters<W: Write>(mut writer: W, clusters: &[Cluster]) -> Result<()> {
    for (i, cluster) in clusters.iter().enumerate() {
        writeln!(writer, "cluster {i}: {cluster}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Render clusters the way [`write_clusters`] writes them.
pub fn format_clusters(clusters: &[Cluster]) -> String {
    let mut out = String::new();
    for (i, cluster) in clusters.iter().enumerate() {
        out.push_str(&format!("cluster {i}: {cluster}\n"));
    }
    out
}

/// Write clusters to a file, replacing any existing content.
pub fn save_clusters(path: impl AsRef<Path>, clusters: &[Cluster]) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_clusters(BufWriter::new(file), clusters)?;
    debug!(path = %path.display(), clusters = clusters.len(), "wrote clusters");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Vec<Point>> {
        read_points(text.as_bytes())
    }

    #[test]
    fn reads_records() {
        let points = read("count=3\n1 0 0\n2 1 0\n3 100 100\n").unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(1, 0.0, 0.0),
                Point::new(2, 1.0, 0.0),
                Point::new(3, 100.0, 100.0),
            ]
        );
    }

    #[test]
    fn ignores_lines_after_count() {
        let points = read("count=1\n5 2 3\n6 4 4\n").unwrap();
        assert_eq!(points, vec![Point::new(5, 2.0, 3.0)]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(read("count=0\n").unwrap().is_empty());
    }

    #[test]
    fn accepts_integral_decimal_notation() {
        let points = read("count=1\n4 10.0 2e1\n").unwrap();
        assert_eq!(points, vec![Point::new(4, 10.0, 20.0)]);
    }

    #[test]
    fn missing_header() {
        assert!(matches!(read(""), Err(Error::Malformed { line: 1, .. })));
        assert!(matches!(read("1 0 0\n"), Err(Error::Malformed { line: 1, .. })));
        assert!(matches!(read("count=-2\n"), Err(Error::Malformed { .. })));
    }

    #[test]
    fn too_few_records() {
        let err = read("count=3\n1 0 0\n2 1 1\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 4, .. }), "{err}");
    }

    #[test]
    fn non_numeric_field() {
        let err = read("count=1\n1 abc 0\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn wrong_field_count() {
        let err = read("count=1\n1 0\n").unwrap_err();
        assert!(matches!(err, Error::Malformed { line: 2, .. }));
    }

    #[test]
    fn fractional_values_rejected() {
        for text in ["count=1\n1 0.5 0\n", "count=1\n1 0 7.25\n", "count=1\n1.5 0 0\n"] {
            let err = read(text).unwrap_err();
            assert!(matches!(err, Error::InvalidData { line: 2, .. }), "{text:?}: {err}");
        }
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let err = read("count=2\n1 0 0\n2 10001 5\n").unwrap_err();
        assert!(matches!(err, Error::InvalidData { line: 3, .. }));

        let err = read("count=1\n1 5 -1\n").unwrap_err();
        assert!(matches!(err, Error::InvalidData { .. }));

        let points = read("count=1\n1 10000 10000\n").unwrap();
        assert_eq!(points[0], Point::new(1, 10000.0, 10000.0));
    }

    #[test]
    fn large_ids_are_exact() {
        let points = read("count=2\n9007199254740993 0 0\n-9223372036854775808 1 1\n").unwrap();
        assert_eq!(points[0].id, 9_007_199_254_740_993);
        assert_eq!(points[1].id, i64::MIN);
    }

    #[test]
    fn ids_beyond_i64_rejected() {
        let err = read("count=1\n9223372036854775808 0 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidData { line: 2, .. }), "{err}");

        // Exponent form is only exact up to 2^53.
        let err = read("count=1\n1e17 0 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidData { line: 2, .. }), "{err}");

        let points = read("count=1\n1e3 0 0\n").unwrap();
        assert_eq!(points[0].id, 1000);
    }

    #[test]
    fn nan_rejected() {
        let err = read("count=1\n1 NaN 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidData { .. }));
    }

    #[test]
    fn formats_one_line_per_cluster() {
        let clusters = vec![
            Cluster::from_points([Point::new(1, 0.0, 0.0), Point::new(2, 1.0, 0.0)]).unwrap(),
            Cluster::singleton(Point::new(3, 100.0, 100.0)).unwrap(),
        ];
        let expected = "cluster 0: 1[0,0] 2[1,0]\ncluster 1: 3[100,100]\n";
        assert_eq!(format_clusters(&clusters), expected);

        let mut buf = Vec::new();
        write_clusters(&mut buf, &clusters).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), expected);
    }
}
