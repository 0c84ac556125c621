use std::fs;
use std::path::Path;

use quill_protocol::ProfileCatalog;
use rkyv::AlignedVec;
use tracing::debug;

use crate::error::CatalogError;

/// Serializes `catalog` into an rkyv archive.
pub fn encode_catalog(catalog: &ProfileCatalog) -> Result<AlignedVec, CatalogError> {
    rkyv::to_bytes::<_, 1024>(catalog).map_err(|e| CatalogError::Encode(format!("{:?}", e)))
}

/// Validates and deserializes an archive produced by [`encode_catalog`].
///
/// `bytes` need not be aligned; they are copied into an aligned buffer
/// before validation.
pub fn decode_catalog(bytes: &[u8]) -> Result<ProfileCatalog, CatalogError> {
    let mut aligned = AlignedVec::with_capacity(bytes.len());
    aligned.extend_from_slice(bytes);
    rkyv::from_bytes::<ProfileCatalog>(&aligned).map_err(|e| CatalogError::Corrupt(format!("{:?}", e)))
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<ProfileCatalog, CatalogError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = decode_catalog(&bytes)?;
    debug!(path = %path.display(), profiles = catalog.len(), "loaded catalog");
    Ok(catalog)
}

pub fn store_catalog(path: impl AsRef<Path>, catalog: &ProfileCatalog) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let bytes = encode_catalog(catalog)?;
    fs::write(path, bytes.as_slice()).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), profiles = catalog.len(), bytes = bytes.len(), "stored catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_protocol::{AuthorProfile, StyleMetrics};

    fn catalog() -> ProfileCatalog {
        ProfileCatalog::new(vec![
            AuthorProfile::new("Agatha Christie", StyleMetrics::from_array([4.1, 0.09, 0.05, 14.2, 2.2])),
            AuthorProfile::new("Douglas Adams", StyleMetrics::from_array([4.3, 0.12, 0.07, 16.9, 2.4])),
        ])
    }

    #[test]
    fn test_store_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("authors.catalog");

        store_catalog(&path, &catalog()).unwrap();
        assert_eq!(load_catalog(&path).unwrap(), catalog());
    }

    #[test]
    fn test_unaligned_input() {
        let bytes = encode_catalog(&catalog()).unwrap();
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(&bytes);

        assert_eq!(decode_catalog(&shifted[1..]).unwrap(), catalog());
    }

    #[test]
    fn test_corrupt_input() {
        let garbage = [0xFFu8; 64];
        assert!(matches!(decode_catalog(&garbage), Err(CatalogError::Corrupt(_))));
        assert!(matches!(decode_catalog(&[]), Err(CatalogError::Corrupt(_))));
    }

    #[test]
    fn test_missing_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("none.catalog")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
