//! Plugin discovery
//!
//! Best-effort, once-per-process loading of provider plugins that live next
//! to the running executable. Nothing in here ever fails the caller: scan
//! and load errors are logged and dropped.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, instrument};

use crate::error::{DiscoveryError, Result};
use crate::module::{add_runtime_module, ProviderModule};

/// Substring (case-insensitive) identifying plugin libraries
pub const PLUGIN_NAME_MARKER: &str = "fixcore";

/// Symbol every plugin library exports, see `declare_plugin!`
pub const PLUGIN_ENTRY_SYMBOL: &[u8] = b"fixcore_plugin_module\0";

const PLUGIN_EXTENSIONS: [&str; 3] = ["so", "dylib", "dll"];

/// Loads one plugin file into a `ProviderModule`
pub trait PluginLoader: Send + Sync {
    /// # Errors
    /// Returns `DiscoveryError` if the file cannot be loaded
    fn load(&self, path: &Path) -> Result<ProviderModule>;
}

/// Returns true if the file name looks like a fixcore plugin library
pub fn is_plugin_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let name = name.to_ascii_lowercase();
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return false;
    };
    PLUGIN_EXTENSIONS.contains(&ext) && stem.contains(PLUGIN_NAME_MARKER)
}

/// Outcome of scanning one directory
#[derive(Debug, Default)]
pub struct DiscoveryReport {
    /// Modules loaded successfully, in file-name order
    pub modules: Vec<ProviderModule>,
    /// Every failure met while scanning or loading
    pub failures: Vec<DiscoveryError>,
}

/// Scan `dir` for plugin files and load each with `loader`
///
/// Does not register the loaded modules.
#[instrument(name = "discovery_scan_dir", skip(dir, loader), fields(dir = %dir.display()))]
pub fn discover_in_dir(dir: &Path, loader: &dyn PluginLoader) -> DiscoveryReport {
    let mut report = DiscoveryReport::default();

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(source) => {
            let err = DiscoveryError::ScanFailed {
                dir: dir.to_path_buf(),
                source,
            };
            error!(error = %err, "plugin directory scan failed");
            report.failures.push(err);
            return report;
        }
    };

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_plugin_file(path))
        .collect();
    candidates.sort();

    if candidates.is_empty() {
        debug!("no plugin files found");
        return report;
    }

    let results: Vec<Result<ProviderModule>> =
        candidates.iter().map(|path| loader.load(path)).collect();

    for (path, result) in candidates.iter().zip(results) {
        match result {
            Ok(module) => {
                debug!(
                    file = %path.display(),
                    module = module.name(),
                    "loaded plugin module"
                );
                observability::record_plugin_load(true);
                report.modules.push(module);
            }
            Err(err) => {
                error!(
                    file = %path.display(),
                    error = %err,
                    "found plugin library but failed to load it"
                );
                observability::record_plugin_load(false);
                report.failures.push(err);
            }
        }
    }

    report
}

/// One-shot latch
///
/// The first `run_once` caller runs its closure; every other caller, before,
/// during or after, returns immediately without waiting for it.
#[derive(Debug, Default)]
pub struct DiscoveryGuard {
    ran: AtomicBool,
}

impl DiscoveryGuard {
    pub const fn new() -> Self {
        Self {
            ran: AtomicBool::new(false),
        }
    }

    /// Run `discover` if nobody has yet; returns whether this call ran it
    pub fn run_once(&self, discover: impl FnOnce()) -> bool {
        if self
            .ran
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return false;
        }
        discover();
        true
    }

    pub fn has_run(&self) -> bool {
        self.ran.load(Ordering::Acquire)
    }
}

/// Process lifetime; never re-armed.
static PLUGIN_DISCOVERY: DiscoveryGuard = DiscoveryGuard::new();

/// Load plugins from the executable's directory, at most once per process
///
/// A factory built concurrently with the first discovery may not see the
/// plugins still being loaded.
pub fn discover_plugins(loader: &dyn PluginLoader) -> bool {
    PLUGIN_DISCOVERY.run_once(|| {
        let Some(dir) = executable_dir() else {
            debug!("cannot determine executable directory, skipping plugin discovery");
            return;
        };

        let report = discover_in_dir(&dir, loader);
        if !report.modules.is_empty() {
            info!(
                dir = %dir.display(),
                modules = report.modules.len(),
                failures = report.failures.len(),
                "plugin discovery finished"
            );
        }
        for module in report.modules {
            add_runtime_module(module);
        }
    })
}

fn executable_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    exe.parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
}

/// Declare the plugin entry point of a cdylib crate
///
/// Host and plugin must be built with the same compiler and `message_factory`
/// version; the entry point uses the Rust ABI.
#[macro_export]
macro_rules! declare_plugin {
    ($name:expr, [$($export:expr),* $(,)?]) => {
        #[no_mangle]
        pub fn fixcore_plugin_module() -> $crate::ProviderModule {
            $crate::ProviderModule::new($name, vec![$($export),*])
        }
    };
}

#[cfg(feature = "dynamic-plugins")]
mod library {
    use std::path::Path;
    use std::sync::{Mutex, PoisonError};

    use libloading::{Library, Symbol};

    use super::{PluginLoader, PLUGIN_ENTRY_SYMBOL};
    use crate::error::{DiscoveryError, Result};
    use crate::module::ProviderModule;

    /// Libraries stay mapped for the whole process: their modules hold
    /// function pointers into them.
    static LIBRARIES: Mutex<Vec<Library>> = Mutex::new(Vec::new());

    /// Loads plugin shared libraries with `libloading`
    #[derive(Debug, Default, Clone, Copy)]
    pub struct LibraryPluginLoader;

    impl PluginLoader for LibraryPluginLoader {
        fn load(&self, path: &Path) -> Result<ProviderModule> {
            // SAFETY: only files matching the plugin naming convention are
            // opened, and their initialisers are trusted like any linked crate.
            let library = unsafe { Library::new(path) }
                .map_err(|e| DiscoveryError::load_failed(path, e.to_string()))?;

            // SAFETY: the entry point signature is fixed by `declare_plugin!`.
            let module = unsafe {
                let entry: Symbol<fn() -> ProviderModule> = library
                    .get(PLUGIN_ENTRY_SYMBOL)
                    .map_err(|e| DiscoveryError::load_failed(path, e.to_string()))?;
                entry()
            };

            LIBRARIES
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(library);
            Ok(module)
        }
    }
}

#[cfg(feature = "dynamic-plugins")]
pub use library::LibraryPluginLoader;

/// Loader used when the crate is built without `dynamic-plugins`
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledPluginLoader;

impl PluginLoader for DisabledPluginLoader {
    fn load(&self, path: &Path) -> Result<ProviderModule> {
        Err(DiscoveryError::Unsupported {
            path: path.to_path_buf(),
        })
    }
}

/// The loader matching the enabled features
pub fn default_loader() -> Box<dyn PluginLoader> {
    #[cfg(feature = "dynamic-plugins")]
    {
        Box::new(LibraryPluginLoader)
    }
    #[cfg(not(feature = "dynamic-plugins"))]
    {
        Box::new(DisabledPluginLoader)
    }
}
