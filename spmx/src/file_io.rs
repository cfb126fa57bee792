//! File I/O for coordinate-list matrix files
//!
//! Reading checks that the file exists before anything else is attempted,
//! then parses the whole file in one pass. Writing renders the complete
//! text before the output file is created.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use spmx_core::SparseMatrix;

/// Load a matrix from a coordinate-list text file
///
/// Fails with [`Error::NotFound`] if `path` does not exist, and with
/// [`Error::Parse`] naming the file if its header lines are unusable.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> Result<SparseMatrix> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    log::debug!("loading matrix from {}", path.display());
    let matrix = with_file_text(path, SparseMatrix::parse)?.map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!(
        "loaded {}x{} matrix with {} entries from {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(matrix)
}

/// Write a matrix to `path` in coordinate-list text form
///
/// Any existing file at `path` is replaced.
pub fn write_matrix<P: AsRef<Path>>(path: P, matrix: &SparseMatrix) -> Result<()> {
    let path = path.as_ref();
    let text = matrix.serialize();

    let file = File::create(path).map_err(|e| Error::io("create", path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io("write", path, e))?;
    writer.flush().map_err(|e| Error::io("flush", path, e))?;

    log::info!(
        "written {}x{} matrix with {} entries to {}",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz(),
        path.display()
    );
    Ok(())
}

/// Run `f` over the UTF-8 contents of `path` using a read-only memory map
#[cfg(feature = "mmap")]
fn with_file_text<T>(path: &Path, f: impl FnOnce(&str) -> T) -> Result<T> {
    use memmap2::Mmap;

    let file = File::open(path).map_err(|e| Error::io("open", path, e))?;
    let len = file
        .metadata()
        .map_err(|e| Error::io("stat", path, e))?
        .len();
    if len == 0 {
        return Ok(f(""));
    }

    // SAFETY: Read-only mapping that does not outlive this call. The file must
    // not be truncated by another process while it is being parsed.
    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::io("memory map", path, e))?;
    Ok(f(decode(path, &mmap)?))
}

/// Run `f` over the UTF-8 contents of `path`
#[cfg(not(feature = "mmap"))]
fn with_file_text<T>(path: &Path, f: impl FnOnce(&str) -> T) -> Result<T> {
    let bytes = std::fs::read(path).map_err(|e| Error::io("read", path, e))?;
    Ok(f(decode(path, &bytes)?))
}

fn decode<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|source| Error::Encoding {
        path: path.to_path_buf(),
        source,
    })
}
