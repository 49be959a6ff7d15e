//! Release platform matrix.
//!
//! The matrix is a fixed cross-product of [`TargetOs`] and [`TargetArch`],
//! iterated OS-major so the generated task list reads platform by platform.

use std::fmt;

/// Operating system a release binary is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetOs {
    /// Linux.
    Linux,
    /// macOS.
    Darwin,
    /// Windows.
    Windows,
}

impl TargetOs {
    /// Every supported operating system, in release order.
    pub const ALL: [Self; 3] = [Self::Linux, Self::Darwin, Self::Windows];

    /// The `GOOS` value for this operating system.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
        }
    }

    /// File extension of executables built for this operating system.
    #[must_use]
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Self::Windows => ".exe",
            Self::Linux | Self::Darwin => "",
        }
    }

    /// Whether binaries must be signed and notarized before upload.
    #[must_use]
    pub fn requires_notarization(self) -> bool {
        matches!(self, Self::Darwin)
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture a release binary is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetArch {
    /// 64-bit x86.
    Amd64,
    /// 64-bit ARM.
    Arm64,
}

impl TargetArch {
    /// Every supported architecture, in release order.
    pub const ALL: [Self; 2] = [Self::Amd64, Self::Arm64];

    /// The Go toolchain name (`GOARCH`), also used in task keys.
    #[must_use]
    pub fn go_name(self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
        }
    }

    /// The name used in published release asset filenames.
    #[must_use]
    pub fn release_name(self) -> &'static str {
        match self {
            Self::Amd64 => "x86_64",
            Self::Arm64 => "aarch64",
        }
    }
}

impl fmt::Display for TargetArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.go_name())
    }
}

/// One (os, arch) combination of the release matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Platform {
    /// Target operating system.
    pub os: TargetOs,
    /// Target architecture.
    pub arch: TargetArch,
}

impl Platform {
    /// Creates a platform from its parts.
    #[must_use]
    pub fn new(os: TargetOs, arch: TargetArch) -> Self {
        Self { os, arch }
    }

    /// Iterates the full release matrix, OS-major and architecture-minor.
    pub fn matrix() -> impl Iterator<Item = Self> {
        TargetOs::ALL
            .into_iter()
            .flat_map(|os| TargetArch::ALL.into_iter().map(move |arch| Self::new(os, arch)))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.os, self.arch)
    }
}
