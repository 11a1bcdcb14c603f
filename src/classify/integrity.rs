//! Rooted and jailbroken device detection.
//!
//! A device is flagged when any known modification artifact exists on the
//! filesystem. This has known false negatives: a modification that hides
//! its files (or uses paths not listed here) evades every check. The result
//! is advisory only.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collector::traits::FileSystem;

/// Android root artifacts: su binaries, Magisk, and root manager apps.
pub const ROOT_PATHS: &[&str] = &[
    "/system/bin/su",
    "/system/xbin/su",
    "/sbin/su",
    "/system/su",
    "/data/local/xbin/su",
    "/data/local/bin/su",
    "/system/app/Superuser.apk",
    "/data/adb/magisk",
    "/sbin/.magisk",
    "/data/data/com.topjohnwu.magisk",
    "/data/data/eu.chainfire.supersu",
];

/// iOS jailbreak artifacts: package manager, substrate, non-stock shell and sshd.
pub const JAILBREAK_PATHS: &[&str] = &[
    "/Applications/Cydia.app",
    "/Library/MobileSubstrate/MobileSubstrate.dylib",
    "/bin/bash",
    "/usr/sbin/sshd",
    "/etc/apt",
];

/// Returns the first artifact path that exists.
pub fn find_compromise_artifact<'a, F: FileSystem>(
    fs: &F,
    paths: &'a [PathBuf],
) -> Option<&'a Path> {
    paths
        .iter()
        .map(PathBuf::as_path)
        .find(|path| fs.exists(path))
}

/// True iff at least one artifact path exists at call time.
pub fn is_compromised<F: FileSystem>(fs: &F, paths: &[PathBuf]) -> bool {
    match find_compromise_artifact(fs, paths) {
        Some(path) => {
            debug!(path = %path.display(), "compromise artifact found");
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockFs;

    fn paths(list: &[&str]) -> Vec<PathBuf> {
        list.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_clean_device() {
        let fs = MockFs::ios_device();
        assert!(!is_compromised(&fs, &paths(JAILBREAK_PATHS)));

        let fs = MockFs::android_handset();
        assert!(!is_compromised(&fs, &paths(ROOT_PATHS)));
    }

    #[test]
    fn test_jailbroken_device() {
        let fs = MockFs::jailbroken_ios();
        let list = paths(JAILBREAK_PATHS);
        assert!(is_compromised(&fs, &list));
        assert_eq!(
            find_compromise_artifact(&fs, &list),
            Some(Path::new("/Applications/Cydia.app"))
        );
    }

    #[test]
    fn test_any_single_path_flags_device() {
        for path in JAILBREAK_PATHS {
            let mut fs = MockFs::ios_device();
            fs.add_file(path, "");
            assert!(is_compromised(&fs, &paths(JAILBREAK_PATHS)), "{path}");
        }
    }

    #[test]
    fn test_removing_all_artifacts_flips_result() {
        let mut fs = MockFs::rooted_android();
        let list = paths(ROOT_PATHS);
        assert!(is_compromised(&fs, &list));

        for path in &list {
            fs.remove(path);
        }
        assert!(!is_compromised(&fs, &list));
    }

    #[test]
    fn test_empty_path_list() {
        assert!(!is_compromised(&MockFs::jailbroken_ios(), &[]));
    }
}
