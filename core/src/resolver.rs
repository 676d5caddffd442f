use crate::types::{ImportedModules, ManifestIndex, ModuleResolution, Outcome, Resolution};
use std::collections::{BTreeMap, BTreeSet};

/// Import names whose distribution is published under a different name
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("cv2", "opencv-contrib-python"),
    ("PIL", "pillow"),
    ("whisper_timestamped", "openai-whisper"),
    ("sklearn", "scikit-learn"),
    ("bs4", "beautifulsoup4"),
    ("yaml", "PyYAML"),
    ("dateutil", "python-dateutil"),
    ("dotenv", "python-dotenv"),
    ("skimage", "scikit-image"),
    ("serial", "pyserial"),
    ("usb", "pyusb"),
    ("Crypto", "pycryptodome"),
];

/// Standard library modules that never map to a manifest entry
const BUILTIN_STDLIB: &[&str] = &[
    "__future__",
    "abc",
    "argparse",
    "ast",
    "asyncio",
    "base64",
    "bisect",
    "builtins",
    "calendar",
    "collections",
    "concurrent",
    "configparser",
    "contextlib",
    "copy",
    "csv",
    "ctypes",
    "datetime",
    "decimal",
    "difflib",
    "email",
    "enum",
    "errno",
    "fnmatch",
    "fractions",
    "functools",
    "gc",
    "getpass",
    "glob",
    "gzip",
    "hashlib",
    "heapq",
    "hmac",
    "html",
    "http",
    "importlib",
    "inspect",
    "io",
    "ipaddress",
    "itertools",
    "json",
    "logging",
    "math",
    "multiprocessing",
    "operator",
    "os",
    "pathlib",
    "pickle",
    "platform",
    "pprint",
    "queue",
    "random",
    "re",
    "secrets",
    "select",
    "shlex",
    "shutil",
    "signal",
    "socket",
    "sqlite3",
    "ssl",
    "statistics",
    "string",
    "struct",
    "subprocess",
    "sys",
    "tempfile",
    "textwrap",
    "threading",
    "time",
    "timeit",
    "tkinter",
    "traceback",
    "types",
    "typing",
    "unittest",
    "urllib",
    "uuid",
    "warnings",
    "weakref",
    "xml",
    "zipfile",
    "zlib",
];

/// Static data the resolver consults: alias table and stdlib exclusions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    aliases: BTreeMap<String, String>,
    stdlib: BTreeSet<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(import, dist)| ((*import).to_string(), (*dist).to_string()))
                .collect(),
            stdlib: BUILTIN_STDLIB.iter().map(|m| (*m).to_string()).collect(),
        }
    }
}

impl ResolverConfig {
    /// A configuration with no aliases and no stdlib exclusions
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
            stdlib: BTreeSet::new(),
        }
    }

    /// Add alias entries, replacing built-in ones with the same import name
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Add module names to the stdlib exclusion set
    pub fn with_stdlib<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stdlib.extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn is_stdlib(&self, module: &str) -> bool {
        self.stdlib.contains(module)
    }

    /// Distribution name for an import name, if it differs
    pub fn alias(&self, module: &str) -> Option<&str> {
        self.aliases.get(module).map(String::as_str)
    }
}

/// Reconciles imported module names against a manifest index
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a single module name
    pub fn resolve_module(&self, module: &str, index: &ManifestIndex) -> Outcome {
        if self.config.is_stdlib(module) {
            return Outcome::Stdlib;
        }

        let (package, aliased) = match self.config.alias(module) {
            Some(dist) => (dist, true),
            None => (module, false),
        };

        // An alias may not reintroduce a stdlib name
        if aliased && self.config.is_stdlib(package) {
            return Outcome::Stdlib;
        }

        match index.get(package) {
            Some(line) => Outcome::Matched {
                package: package.to_string(),
                line: line.to_string(),
                aliased,
            },
            None => Outcome::Unresolved {
                package: package.to_string(),
            },
        }
    }

    /// Resolve every imported module and collect the distinct manifest lines needed
    pub fn resolve(&self, modules: &ImportedModules, index: &ManifestIndex) -> Resolution {
        let mut resolution = Resolution::default();

        for module in modules {
            let outcome = self.resolve_module(module, index);
            if let Outcome::Matched { line, .. } = &outcome {
                resolution.requirements.insert(line.clone());
            }
            resolution.modules.push(ModuleResolution {
                module: module.clone(),
                outcome,
            });
        }

        resolution
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
