use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use flutter_embedder::engine::{EngineLaunch, ProjectArgs};
use flutter_embedder::logging::{LoggingConfig, init_logging};
use flutter_embedder::resources::{ResourceLayout, base_directory};
use flutter_embedder::window::{Runtime, RuntimeConfig};

/// Runs a Flutter app bundle in a desktop window.
#[derive(Debug, Parser)]
#[command(name = "flutter-runner", version)]
struct Cli {
    /// Engine shared library. Defaults to `<exe_dir>/lib/libflutter_engine.so`,
    /// then the dynamic loader search path.
    #[arg(long, env = "FLUTTER_ENGINE_LIBRARY")]
    engine_library: Option<PathBuf>,

    /// Locale data file, used instead of the bundled/system `icudtl.dat`.
    #[arg(long, env = "FLUTTER_ICU_DATA")]
    icu_data: Option<PathBuf>,

    /// Asset bundle directory, used instead of `<exe_dir>/data/flutter_assets`.
    #[arg(long, env = "FLUTTER_ASSETS")]
    assets: Option<PathBuf>,

    /// Log filter in `env_logger` syntax; overrides RUST_LOG.
    #[arg(long)]
    log_filter: Option<String>,

    /// Switches forwarded to the engine (after `--`).
    #[arg(last = true)]
    engine_switches: Vec<OsString>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log_filter,
        ..LoggingConfig::default()
    });

    let layout = ResourceLayout::new(base_directory())
        .with_icu_data_override(cli.icu_data)
        .with_assets_override(cli.assets);

    let paths = layout.resolve()?;

    let command_line = engine_command_line(std::env::args_os().next(), cli.engine_switches);
    let project = ProjectArgs::new(&paths, command_line).context("invalid engine arguments")?;

    let launch = EngineLaunch {
        library: cli.engine_library.unwrap_or_else(|| layout.engine_library()),
        project,
    };

    Runtime::run(RuntimeConfig::default(), launch)
}

/// Engine argv: the program name as invoked (not necessarily UTF-8), then the
/// switches given after `--`.
fn engine_command_line(program: Option<OsString>, switches: Vec<OsString>) -> Vec<OsString> {
    let program = program.unwrap_or_else(|| OsString::from("flutter-runner"));
    std::iter::once(program).chain(switches).collect()
}

#[cfg(test)]
mod tests {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};

    use clap::CommandFactory;
    use flutter_embedder::resources::{IcuDataSource, ResourcePaths};

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn trailing_arguments_become_engine_switches() {
        let cli = Cli::parse_from([
            "flutter-runner",
            "--assets",
            "/tmp/bundle",
            "--",
            "--verbose-logging",
            "--enable-dart-profiling",
        ]);

        assert_eq!(cli.assets, Some(PathBuf::from("/tmp/bundle")));
        assert_eq!(
            cli.engine_switches,
            [
                OsString::from("--verbose-logging"),
                OsString::from("--enable-dart-profiling")
            ]
        );
    }

    #[test]
    fn non_utf8_program_name_reaches_engine_arguments() {
        let program = OsString::from_vec(b"/opt/app\xff/flutter-runner".to_vec());
        let command_line =
            engine_command_line(Some(program.clone()), vec![OsString::from("--verbose-logging")]);
        assert_eq!(command_line, [program, OsString::from("--verbose-logging")]);

        let paths = ResourcePaths {
            icu_data: PathBuf::from("/opt/app/data/icudtl.dat"),
            icu_source: IcuDataSource::Bundled,
            assets: PathBuf::from("/opt/app/data/flutter_assets"),
        };
        let project = ProjectArgs::new(&paths, &command_line).unwrap();
        let raw = project.as_raw();
        assert_eq!(raw.command_line_argc, 2);

        let argv0 = unsafe { std::ffi::CStr::from_ptr(*raw.command_line_argv) };
        assert_eq!(argv0.to_bytes(), command_line[0].as_bytes());
    }

    #[test]
    fn missing_program_name_falls_back_to_binary_name() {
        assert_eq!(engine_command_line(None, Vec::new()), [OsString::from("flutter-runner")]);
    }
}
