use std::{fs, io::Write, path::PathBuf};

use glyph_engine::EditorOptions;
use once_cell::sync::Lazy;

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "glyph_draw";

/// Lazily initialized project directories (computed once on first access)
static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Editor options persisted in `settings.toml` inside the config directory.
pub struct Settings;

impl Settings {
    const FILE_NAME: &'static str = "settings.toml";

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }

    /// Reads the options file. A missing or broken file yields the defaults.
    pub fn load() -> EditorOptions {
        let Some(options_file) = Self::config_file() else {
            return EditorOptions::default();
        };
        if !options_file.exists() {
            return EditorOptions::default();
        }
        match fs::read_to_string(&options_file) {
            Ok(txt) => parse_options(&txt),
            Err(err) => {
                log::error!("Error reading options file: {}", err);
                EditorOptions::default()
            }
        }
    }

    /// Writes the options file, going through a temporary file.
    pub fn store(options: &EditorOptions) {
        let Some(config_dir) = Self::config_dir() else {
            return;
        };
        if let Err(err) = fs::create_dir_all(&config_dir) {
            log::error!("Can't create configuration directory {:?}: {}", config_dir, err);
            return;
        }

        let file_path = config_dir.join(Self::FILE_NAME);
        let temp_path = config_dir.join(format!(".{}.tmp", Self::FILE_NAME));
        match toml::to_string_pretty(options) {
            Ok(text) => {
                let write_result = (|| -> std::io::Result<()> {
                    let mut file = fs::File::create(&temp_path)?;
                    file.write_all(text.as_bytes())?;
                    file.sync_all()
                })();
                if let Err(err) = write_result.and_then(|()| fs::rename(&temp_path, &file_path)) {
                    log::error!("Error writing settings file: {}", err);
                    let _ = fs::remove_file(&temp_path);
                }
            }
            Err(err) => log::error!("Error serializing options: {}", err),
        }
    }
}

fn parse_options(txt: &str) -> EditorOptions {
    match toml::from_str::<EditorOptions>(txt) {
        Ok(options) if options.width > 0 && options.height > 0 => options,
        Ok(options) => {
            log::warn!("Ignoring invalid canvas size {}x{} in settings", options.width, options.height);
            EditorOptions {
                width: EditorOptions::default().width,
                height: EditorOptions::default().height,
                ..options
            }
        }
        Err(err) => {
            log::error!("Error parsing options file: {}", err);
            EditorOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings() {
        let options = parse_options("width = 40\nshow_grid = true\n");
        assert_eq!(40, options.width);
        assert_eq!(20, options.height);
        assert!(options.show_grid);
        assert_eq!(50, options.history_capacity);
    }

    #[test]
    fn test_broken_settings() {
        assert_eq!(EditorOptions::default(), parse_options("width = \"wide\""));
        let options = parse_options("width = 0\nglyph = \"*\"");
        assert_eq!(78, options.width);
        assert_eq!('*', options.glyph);
    }
}
