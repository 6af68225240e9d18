// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Matter Labs

//! Retrieve SigRL workflow

use crate::{
    error::{Error, Result},
    persist::write_artifact,
};
use clap::Args;
use intel_ias_api::{GroupId, IasClient};
use std::path::PathBuf;
use tracing::info;

/// Options of the `sigrl` request
#[derive(Args, Debug, Clone, Default)]
pub struct SigrlArgs {
    /// EPID group ID (hex string)
    #[arg(short = 'g', long)]
    pub gid: Option<String>,
    /// Path to save SigRL to
    #[arg(short = 'i', long)]
    pub sigrl_path: Option<PathBuf>,
}

/// Retrieves the SigRL of an EPID group and saves it, if there is one.
pub async fn run_sigrl(client: &IasClient, args: SigrlArgs) -> Result<()> {
    let sigrl_path = args
        .sigrl_path
        .ok_or_else(|| Error::invalid_input("SigRL path not specified"))?;
    let gid: GroupId = args
        .gid
        .ok_or_else(|| Error::invalid_input("EPID group ID not specified"))?
        .parse()?;

    let sigrl = client.get_sigrl(&gid).await?;

    if sigrl.is_empty() {
        info!(%gid, "IAS returned no revocation list");
        println!("No SigRL for given EPID group ID {gid}");
        return Ok(());
    }

    println!("SigRL size: {}", sigrl.len());
    write_artifact(&sigrl_path, &sigrl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Server, ServerGuard};
    use std::fs;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    fn test_client(server: &ServerGuard) -> IasClient {
        IasClient::new(
            "test-api-key",
            format!("{}/attestation/v3/report", server.url()),
            format!("{}/attestation/v3/sigrl", server.url()),
        )
        .unwrap()
    }

    #[tokio::test]
    #[traced_test]
    async fn empty_sigrl_writes_no_file() {
        let mut server = Server::new_async().await;

        let m = server
            .mock("GET", "/attestation/v3/sigrl/00000b5d")
            .with_status(200)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let sigrl_path = dir.path().join("sigrl.bin");
        let args = SigrlArgs {
            gid: Some("00000B5D".into()),
            sigrl_path: Some(sigrl_path.clone()),
        };
        run_sigrl(&test_client(&server), args).await.unwrap();

        m.assert_async().await;
        assert!(!sigrl_path.exists());
        assert!(logs_contain("IAS returned no revocation list"));
    }

    #[tokio::test]
    async fn sigrl_is_saved_decoded() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/attestation/v3/sigrl/deadbeef")
            .match_header("Ocp-Apim-Subscription-Key", "test-api-key")
            .with_status(200)
            .with_body("AAIADgAAAAEAAAAB")
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let sigrl_path = dir.path().join("sigrl.bin");
        let args = SigrlArgs {
            gid: Some("deadbeef".into()),
            sigrl_path: Some(sigrl_path.clone()),
        };
        run_sigrl(&test_client(&server), args).await.unwrap();

        assert_eq!(
            fs::read(&sigrl_path).unwrap(),
            [0x00, 0x02, 0x00, 0x0e, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01]
        );
    }

    #[tokio::test]
    async fn invalid_gid_fails_before_request() {
        let mut server = Server::new_async().await;

        let m = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        for gid in ["deadbee", "deadbeef00", "xyz12345", ""] {
            let args = SigrlArgs {
                gid: Some(gid.into()),
                sigrl_path: Some(dir.path().join("sigrl.bin")),
            };
            let result = run_sigrl(&test_client(&server), args).await;
            assert!(matches!(result, Err(Error::InvalidInput(_))), "{gid:?}");
        }

        let args = SigrlArgs {
            gid: Some("deadbeef".into()),
            sigrl_path: None,
        };
        let result = run_sigrl(&test_client(&server), args).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        let args = SigrlArgs {
            gid: None,
            sigrl_path: Some(dir.path().join("sigrl.bin")),
        };
        let result = run_sigrl(&test_client(&server), args).await;
        assert!(matches!(result, Err(Error::InvalidInput(_))));

        m.assert_async().await;
    }

    #[tokio::test]
    async fn request_failure() {
        let mut server = Server::new_async().await;

        let _m = server
            .mock("GET", "/attestation/v3/sigrl/deadbeef")
            .with_status(404)
            .with_header("Request-ID", "gid-unknown")
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let sigrl_path = dir.path().join("sigrl.bin");
        let args = SigrlArgs {
            gid: Some("deadbeef".into()),
            sigrl_path: Some(sigrl_path.clone()),
        };
        let result = run_sigrl(&test_client(&server), args).await;

        assert!(matches!(result, Err(Error::RequestFailed(_))));
        assert!(!sigrl_path.exists());
    }
}
