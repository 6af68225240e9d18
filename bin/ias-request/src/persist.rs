// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Writing the returned artifacts to disk

use crate::error::{Error, Result};
use intel_ias_api::{Artifact, VerificationReport};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Writes `bytes` to `path`, creating or truncating the file.
pub fn write_artifact(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), size = bytes.len(), "wrote file");
    Ok(())
}

/// Destinations requested for the artifacts of a verification report
#[derive(Debug, Clone, Default)]
pub struct ArtifactPaths(BTreeMap<Artifact, PathBuf>);

impl ArtifactPaths {
    /// Requests `artifact` to be written to `path`, if a path is given.
    pub fn with(mut self, artifact: Artifact, path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => self.0.insert(artifact, path),
            None => self.0.remove(&artifact),
        };
        self
    }

    /// Writes every artifact that was requested and is contained in `report`.
    ///
    /// Files are written one after the other, a failure leaves the files
    /// already written in place.
    pub fn persist(&self, report: &VerificationReport) -> Result<()> {
        for (artifact, path) in &self.0 {
            match report.artifact(*artifact) {
                Some(bytes) => {
                    write_artifact(path, bytes)?;
                    info!("Saved {artifact} to '{}'", path.display());
                }
                None => debug!(
                    "IAS response contains no {artifact}, not writing '{}'",
                    path.display()
                ),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("artifact.bin");
        let bytes: Vec<u8> = (0..=255).collect();

        write_artifact(&path, &bytes).unwrap();
        assert_eq!(fs::read(&path).unwrap(), bytes);

        // truncates existing content
        write_artifact(&path, b"x").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"x");
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("artifact.bin");

        match write_artifact(&path, b"data") {
            Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
            r => panic!("unexpected result: {r:?}"),
        }
    }

    #[test]
    fn persist_only_requested_and_present() {
        let dir = TempDir::new().unwrap();
        let report_path = dir.path().join("report.json");
        let sig_path = dir.path().join("report.sig");
        let cert_path = dir.path().join("report.pem");
        let advisory_path = dir.path().join("advisories.txt");

        let report = VerificationReport {
            report: b"{}".to_vec(),
            signature: Some(b"sig".to_vec()),
            certificate: None,
            advisories: Some(b"INTEL-SA-00161".to_vec()),
        };

        ArtifactPaths::default()
            .with(Artifact::Report, Some(report_path.clone()))
            .with(Artifact::Signature, Some(sig_path.clone()))
            .with(Artifact::Certificate, Some(cert_path.clone()))
            .with(Artifact::Advisories, None)
            .persist(&report)
            .unwrap();

        assert_eq!(fs::read(&report_path).unwrap(), b"{}");
        assert_eq!(fs::read(&sig_path).unwrap(), b"sig");
        assert!(!cert_path.exists());
        assert!(!advisory_path.exists());
    }

    #[test]
    fn persist_keeps_earlier_files_on_failure() {
        let dir = TempDir::new().unwrap();
        let report_path = dir.path().join("report.json");
        let sig_path = dir.path().join("missing").join("report.sig");

        let report = VerificationReport {
            report: b"{}".to_vec(),
            signature: Some(b"sig".to_vec()),
            ..Default::default()
        };

        let result = ArtifactPaths::default()
            .with(Artifact::Report, Some(report_path.clone()))
            .with(Artifact::Signature, Some(sig_path))
            .persist(&report);

        assert!(matches!(result, Err(Error::Io { .. })));
        assert_eq!(fs::read(&report_path).unwrap(), b"{}");
    }
}
