
//////
//
// Imports
//

// Standard library
use std::{env, fs, path::{Path, PathBuf}};

// Serde framework
use serde;
use serde_yaml_ng;



//////
//
// Constants
//

/// The environment variable through which an alternative toolchain configuration file can be supplied.
pub const CONFIG_ENV_VAR: &str = "MSHC_TOOLCHAIN";

// Default install locations of the Xcode Metal toolchain
const DEFAULT_TOOL_ROOT: &str =
	"/Applications/Xcode.app/Contents/Developer/Platforms/MacOSX.platform/usr/bin";
const DEFAULT_SDK_PATH: &str =
	"/Applications/Xcode.app/Contents/Developer/Platforms/MacOSX.platform/Developer/SDKs/MacOSX10.11.sdk";
const DEFAULT_MIN_OS_VERSION: &str = "10.9";



//////
//
// Structs
//

/// A struct storing the locations and settings of the external *Metal* toolchain that the
/// [driver](crate::toolchain::Toolchain) invokes. Injected at startup rather than compiled in, so the driver can be
/// pointed at a different Xcode install or a stand-in toolchain (e.g. for testing).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ToolchainConfig {
	/// The directory holding the `metal`, `metal-ar` and `metallib` executables.
	pub toolRoot: PathBuf,

	/// The macOS SDK the compile stage is pointed at via `-isysroot`.
	pub sdkPath: PathBuf,

	/// The macOS deployment target passed to the compile stage.
	pub minOSVersion: String
}
impl Default for ToolchainConfig {
	fn default () -> Self { Self {
		toolRoot: DEFAULT_TOOL_ROOT.into(), sdkPath: DEFAULT_SDK_PATH.into(),
		minOSVersion: DEFAULT_MIN_OS_VERSION.to_owned()
	}}
}
impl ToolchainConfig
{
	/// Obtain the configuration for the current run: if the environment variable named by [`CONFIG_ENV_VAR`] is set,
	/// the file it points to is loaded, otherwise the compiled-in Xcode defaults apply.
	pub fn fromEnvironment () -> anyhow::Result<Self> {
		match env::var_os(CONFIG_ENV_VAR) {
			Some(filename) => Self::fromFile(filename),
			None => Ok(Self::default())
		}
	}

	/// Load the configuration from the given YAML file.
	pub fn fromFile (filename: impl AsRef<Path>) -> anyhow::Result<Self> {
		Ok(Self::deserialize(fs::read(filename)?)?)
	}

	///
	pub fn serialize (&self) -> Vec<u8> {
		let mut bytes = Vec::new();
		serde_yaml_ng::to_writer(&mut bytes, self).expect(
			"INTERNAL LOGIC ERROR: failed to serialize an instance of mshc_shader::ToolchainConfig"
		);
		bytes
	}

	///
	pub fn serializeToFile (&self, filename: impl AsRef<Path>) -> anyhow::Result<()> {
		Ok(fs::write(filename, self.serialize())?)
	}

	///
	pub fn deserialize (bytes: impl AsRef<[u8]>) -> Result<Self, serde_yaml_ng::Error> {
		serde_yaml_ng::from_slice(bytes.as_ref())
	}

	/// Report the path of the `metal` compiler executable.
	#[inline]
	pub fn metal (&self) -> PathBuf {
		self.toolRoot.join("metal")
	}

	/// Report the path of the `metal-ar` archiver executable.
	#[inline]
	pub fn metalAr (&self) -> PathBuf {
		self.toolRoot.join("metal-ar")
	}

	/// Report the path of the `metallib` linker executable.
	#[inline]
	pub fn metallib (&self) -> PathBuf {
		self.toolRoot.join("metallib")
	}
}
