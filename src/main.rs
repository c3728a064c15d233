//! Native viewer: `dotfield [config.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::env;
    use std::path::PathBuf;
    use std::process::ExitCode;

    use dotfield::FieldConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => match FieldConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded config from {:?}", path);
                config
            }
            Err(e) => {
                log::error!("failed to load config from {:?}: {}", path, e);
                log::warn!("using default configuration");
                FieldConfig::default()
            }
        },
        None => FieldConfig::default(),
    };

    match dotfield::viewer::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
