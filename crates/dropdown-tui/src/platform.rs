use std::path::PathBuf;

const APP_DIR: &str = "dropdown";

pub fn data_dir() -> PathBuf {
    // On macOS and Linux, use ~/.local/share/dropdown/ (XDG standard)
    // instead of macOS Application Support for consistency
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".local")
            .join("share")
            .join(APP_DIR)
    }
    #[cfg(windows)]
    {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn log_path() -> PathBuf {
    data_dir().join("demo.log")
}

pub fn session_path() -> PathBuf {
    data_dir().join("session.json")
}
