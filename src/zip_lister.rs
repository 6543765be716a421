use std::fs::OpenOptions;
use std::io;
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

pub use zip::result::ZipError;

/// Lists the files of a world stored inside a zip archive.
///
/// Entry paths are reported relative to the archive root, so indexing a
/// zipped world works with the lightweight metadata probe, which never opens
/// the files it is given.
#[derive(Debug)]
pub struct ZipWorldLister {
    paths: std::vec::IntoIter<PathBuf>,
}

#[derive(Debug)]
pub enum ZipListerError {
    Io(io::Error),
    Zip(ZipError),
}

impl From<io::Error> for ZipListerError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ZipError> for ZipListerError {
    fn from(e: ZipError) -> Self {
        Self::Zip(e)
    }
}

impl ZipWorldLister {
    pub fn new<R: Read + Seek>(reader: R) -> Result<ZipWorldLister, ZipListerError> {
        let mut zip_archive = ZipArchive::new(reader)?;
        let mut paths = Vec::with_capacity(zip_archive.len());

        for i in 0..zip_archive.len() {
            // This unwrap is safe because we are iterating from 0 to len
            let file = zip_archive.by_index(i).unwrap();

            if file.name().ends_with('/') {
                continue;
            }

            paths.push(file.sanitized_name());
        }

        Ok(ZipWorldLister {
            paths: paths.into_iter(),
        })
    }

    pub fn file<P: AsRef<Path>>(path: P) -> Result<ZipWorldLister, ZipListerError> {
        let file = OpenOptions::new()
            .write(false)
            .read(true)
            .create(false)
            .open(path)?;

        Self::new(file)
    }
}

impl Iterator for ZipWorldLister {
    type Item = Result<PathBuf, io::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.paths.next().map(Ok)
    }
}
