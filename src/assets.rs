/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Static asset manifest for the screenshot grid.
//!
//! Each screenshot is addressed by its URL path on the site. The same path,
//! with the leading slash removed, is where the file must live under the
//! site root (`public/` in the repository, `target/site` once built).

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screenshot {
    pub path: &'static str,
    pub alt: &'static str,
}

impl Screenshot {
    /// File location of this screenshot under `root`.
    pub fn resolve(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref().join(self.path.trim_start_matches('/'))
    }
}

/// Grid order: left to right, top to bottom.
pub const SCREENSHOTS: [Screenshot; 4] = [
    Screenshot {
        path: "/omp_snippet.png",
        alt: "OpenMP Snippet",
    },
    Screenshot {
        path: "/parallel_output2.png",
        alt: "Parallel Output",
    },
    Screenshot {
        path: "/serial_output2.png",
        alt: "Serial Output",
    },
    Screenshot {
        path: "/github_push.png",
        alt: "GitHub Push",
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("screenshot {name:?} is missing at {}", path.display())]
    Missing { name: &'static str, path: PathBuf },
}

/// Checks that every screenshot resolves to a file under `root`.
pub fn verify_manifest(root: impl AsRef<Path>) -> Result<(), Vec<AssetError>> {
    let missing: Vec<AssetError> = SCREENSHOTS
        .iter()
        .filter_map(|shot| {
            let path = shot.resolve(root.as_ref());
            (!path.is_file()).then_some(AssetError::Missing {
                name: shot.alt,
                path,
            })
        })
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}
