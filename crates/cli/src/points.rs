//! JSON point files: a bare array of `[x, y]` pairs in, a hull document out.

use anyhow::{Context, Result};
use mergehull::{Hull, Pt2};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Hull written by `hull`: vertices CCW from the lowest (x, y) vertex.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HullDoc {
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub perimeter: f64,
}

impl From<&Hull> for HullDoc {
    fn from(h: &Hull) -> Self {
        Self {
            vertices: to_pairs(h.points()),
            area: h.area(),
            perimeter: h.perimeter(),
        }
    }
}

pub fn to_pairs(points: &[Pt2]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Pt2>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(pairs.into_iter().map(|[x, y]| Pt2::new(x, y)).collect())
}

/// Write `value` as pretty JSON, creating parent directories.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
