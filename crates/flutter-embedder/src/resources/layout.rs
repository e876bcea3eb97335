use std::path::PathBuf;

use super::error::ResourceError;

pub const DATA_DIR: &str = "data";
pub const ICU_DATA_FILE: &str = "icudtl.dat";
pub const ASSETS_DIR: &str = "flutter_assets";
pub const SYSTEM_ICU_DATA: &str = "/usr/share/flutter/icudtl.dat";

pub const LIB_DIR: &str = "lib";
pub const ENGINE_LIBRARY: &str = "libflutter_engine.so";

/// Where the locale data file was found.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum IcuDataSource {
    /// `<base>/data/icudtl.dat`.
    Bundled,
    /// The system-wide install.
    System,
    /// An explicitly configured path.
    Override,
}

/// Resolved runtime resource paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub icu_data: PathBuf,
    pub icu_source: IcuDataSource,
    pub assets: PathBuf,
}

/// On-disk layout of runtime resources around a base directory.
///
/// ```text
/// <base>/data/icudtl.dat        (fallback: /usr/share/flutter/icudtl.dat)
/// <base>/data/flutter_assets/   (no fallback)
/// <base>/lib/libflutter_engine.so
/// ```
#[derive(Debug, Clone)]
pub struct ResourceLayout {
    base: PathBuf,
    system_icu_data: PathBuf,
    icu_data_override: Option<PathBuf>,
    assets_override: Option<PathBuf>,
}

impl ResourceLayout {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            system_icu_data: PathBuf::from(SYSTEM_ICU_DATA),
            icu_data_override: None,
            assets_override: None,
        }
    }

    pub fn with_system_icu_data(mut self, path: impl Into<PathBuf>) -> Self {
        self.system_icu_data = path.into();
        self
    }

    /// Uses `path` as the only candidate for the locale data file.
    pub fn with_icu_data_override(mut self, path: Option<PathBuf>) -> Self {
        self.icu_data_override = path;
        self
    }

    /// Uses `path` instead of `<base>/data/flutter_assets`.
    pub fn with_assets_override(mut self, path: Option<PathBuf>) -> Self {
        self.assets_override = path;
        self
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base.join(DATA_DIR)
    }

    /// Probes the locale data file and the asset bundle.
    pub fn resolve(&self) -> Result<ResourcePaths, ResourceError> {
        let (icu_data, icu_source) = self.resolve_icu_data()?;
        let assets = self.resolve_assets()?;

        Ok(ResourcePaths {
            icu_data,
            icu_source,
            assets,
        })
    }

    /// Engine library to load: `<base>/lib/libflutter_engine.so` when present,
    /// otherwise the bare name for the dynamic loader's search path.
    pub fn engine_library(&self) -> PathBuf {
        let bundled = self.base.join(LIB_DIR).join(ENGINE_LIBRARY);
        if bundled.is_file() {
            bundled
        } else {
            PathBuf::from(ENGINE_LIBRARY)
        }
    }

    fn resolve_icu_data(&self) -> Result<(PathBuf, IcuDataSource), ResourceError> {
        let candidates = match &self.icu_data_override {
            Some(path) => vec![(path.clone(), IcuDataSource::Override)],
            None => vec![
                (self.data_dir().join(ICU_DATA_FILE), IcuDataSource::Bundled),
                (self.system_icu_data.clone(), IcuDataSource::System),
            ],
        };

        for (path, source) in &candidates {
            if path.is_file() {
                log::info!("using ICU data: {}", path.display());
                return Ok((path.clone(), *source));
            }
            log::debug!("no ICU data at {}", path.display());
        }

        let err = ResourceError::IcuDataNotFound {
            searched: candidates.into_iter().map(|(path, _)| path).collect(),
        };
        log::error!("{err}");
        Err(err)
    }

    fn resolve_assets(&self) -> Result<PathBuf, ResourceError> {
        let path = self
            .assets_override
            .clone()
            .unwrap_or_else(|| self.data_dir().join(ASSETS_DIR));

        if path.is_dir() {
            log::info!("using assets: {}", path.display());
            return Ok(path);
        }

        let err = ResourceError::AssetsNotFound { path };
        log::error!("{err}");
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Fixture {
        app: TempDir,
        system: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                app: TempDir::new().unwrap(),
                system: TempDir::new().unwrap(),
            }
        }

        fn bundle_icu(&self) -> &Self {
            fs::create_dir_all(self.app.path().join(DATA_DIR)).unwrap();
            fs::write(self.app.path().join(DATA_DIR).join(ICU_DATA_FILE), b"icu").unwrap();
            self
        }

        fn bundle_assets(&self) -> &Self {
            fs::create_dir_all(self.app.path().join(DATA_DIR).join(ASSETS_DIR)).unwrap();
            self
        }

        fn install_system_icu(&self) -> &Self {
            fs::write(self.system_icu(), b"icu").unwrap();
            self
        }

        fn system_icu(&self) -> PathBuf {
            self.system.path().join(ICU_DATA_FILE)
        }

        fn layout(&self) -> ResourceLayout {
            ResourceLayout::new(self.app.path()).with_system_icu_data(self.system_icu())
        }
    }

    #[test]
    fn bundled_resources_are_used() {
        let fx = Fixture::new();
        fx.bundle_icu().bundle_assets().install_system_icu();

        let paths = fx.layout().resolve().unwrap();
        assert_eq!(paths.icu_source, IcuDataSource::Bundled);
        assert_eq!(paths.icu_data, fx.app.path().join("data/icudtl.dat"));
        assert_eq!(paths.assets, fx.app.path().join("data/flutter_assets"));
    }

    #[test]
    fn system_icu_data_is_the_fallback() {
        let fx = Fixture::new();
        fx.bundle_assets().install_system_icu();

        let paths = fx.layout().resolve().unwrap();
        assert_eq!(paths.icu_source, IcuDataSource::System);
        assert_eq!(paths.icu_data, fx.system_icu());
    }

    #[test]
    fn missing_icu_data_is_fatal() {
        let fx = Fixture::new();
        fx.bundle_assets();

        let err = fx.layout().resolve().unwrap_err();
        assert!(matches!(err, ResourceError::IcuDataNotFound { ref searched } if searched.len() == 2));
        assert!(err.to_string().contains("icudtl.dat"));
    }

    #[test]
    fn missing_assets_are_fatal_even_with_icu_data() {
        let fx = Fixture::new();
        fx.bundle_icu().install_system_icu();

        let err = fx.layout().resolve().unwrap_err();
        assert_eq!(
            err,
            ResourceError::AssetsNotFound {
                path: fx.app.path().join("data/flutter_assets")
            }
        );
    }

    #[test]
    fn icu_data_directory_does_not_count_as_file() {
        let fx = Fixture::new();
        fx.bundle_assets();
        fs::create_dir_all(fx.app.path().join(DATA_DIR).join(ICU_DATA_FILE)).unwrap();

        assert!(fx.layout().resolve().is_err());
    }

    #[test]
    fn override_is_probed_without_fallback() {
        let fx = Fixture::new();
        fx.bundle_icu().bundle_assets();
        let custom = fx.system.path().join("custom.dat");

        let err = fx
            .layout()
            .with_icu_data_override(Some(custom.clone()))
            .resolve()
            .unwrap_err();
        assert_eq!(err, ResourceError::IcuDataNotFound { searched: vec![custom.clone()] });

        fs::write(&custom, b"icu").unwrap();
        let paths = fx
            .layout()
            .with_icu_data_override(Some(custom.clone()))
            .resolve()
            .unwrap();
        assert_eq!(paths.icu_source, IcuDataSource::Override);
        assert_eq!(paths.icu_data, custom);
    }

    #[test]
    fn assets_override_replaces_bundle_path() {
        let fx = Fixture::new();
        fx.bundle_icu();
        let assets = fx.system.path().join("bundle");
        fs::create_dir_all(&assets).unwrap();

        let paths = fx
            .layout()
            .with_assets_override(Some(assets.clone()))
            .resolve()
            .unwrap();
        assert_eq!(paths.assets, assets);
    }

    #[test]
    fn engine_library_prefers_bundled_copy() {
        let fx = Fixture::new();
        assert_eq!(fx.layout().engine_library(), PathBuf::from(ENGINE_LIBRARY));

        let lib_dir = fx.app.path().join(LIB_DIR);
        fs::create_dir_all(&lib_dir).unwrap();
        fs::write(lib_dir.join(ENGINE_LIBRARY), b"").unwrap();
        assert_eq!(fx.layout().engine_library(), lib_dir.join(ENGINE_LIBRARY));
    }
}
