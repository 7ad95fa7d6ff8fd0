//! Directory-backed barrel storage
//!
//! Each barrel lives in its own file, `barrel_<id>.bin`, under the
//! barrels directory. Files are written atomically so readers never
//! observe a partially written barrel.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use roaring::RoaringBitmap;

use crate::barrel::codec::{decode_barrel, encode_barrel};
use crate::persistence::{read_bytes, write_bytes_atomic, ReadOutcome};
use crate::types::{BarrelId, WordId};

#[derive(Debug)]
pub struct BarrelStore {
    dir: PathBuf,
}

impl BarrelStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> io::Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn barrel_path(&self, barrel_id: BarrelId) -> PathBuf {
        self.dir.join(format!("{}.bin", barrel_id))
    }

    /// Read one barrel's posting map from disk
    pub fn read(&self, barrel_id: BarrelId) -> ReadOutcome<BTreeMap<WordId, RoaringBitmap>> {
        match read_bytes(&self.barrel_path(barrel_id)) {
            ReadOutcome::Found(bytes) => match decode_barrel(&bytes) {
                Ok(postings) => ReadOutcome::Found(postings),
                Err(e) => ReadOutcome::Corrupt(e),
            },
            ReadOutcome::Missing => ReadOutcome::Missing,
            ReadOutcome::Corrupt(e) => ReadOutcome::Corrupt(e),
        }
    }

    /// Atomically replace one barrel's file
    pub fn write(
        &self,
        barrel_id: BarrelId,
        postings: &BTreeMap<WordId, RoaringBitmap>,
    ) -> io::Result<()> {
        let encoded = encode_barrel(postings);
        write_bytes_atomic(&self.barrel_path(barrel_id), &encoded)
    }

    /// Barrel ids present on disk, in ascending order.
    ///
    /// Only sparse barrels exist as files, so the ids need not be
    /// contiguous. Files that do not match the barrel naming scheme
    /// are ignored.
    pub fn barrel_ids(&self) -> io::Result<Vec<BarrelId>> {
        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            if let Some(id) = parse_barrel_file_name(&entry.path()) {
                ids.push(id);
            }
        }
        ids.sort();
        Ok(ids)
    }
}

fn parse_barrel_file_name(path: &Path) -> Option<BarrelId> {
    let name = path.file_name()?.to_str()?;
    let id = name
        .strip_prefix("barrel_")?
        .strip_suffix(".bin")?
        .parse()
        .ok()?;
    Some(BarrelId(id))
}
