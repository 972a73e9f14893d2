use std::{env, path::PathBuf};

use crate::constants::{defaults, envvars};

/// G Hub data directory, `None` if `LOCALAPPDATA` is unset or empty
pub fn ghub_dir() -> Option<PathBuf> {
    match env::var_os(envvars::LOCAL_APP_DATA) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir).join(defaults::GHUB_DIR)),
        _ => None,
    }
}

pub fn settings_db_path() -> Option<PathBuf> {
    ghub_dir().map(|dir| dir.join(defaults::SETTINGS_DB_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn path_under_local_app_data() {
        temp_env::with_var(envvars::LOCAL_APP_DATA, Some("/somewhere/AppData/Local"), || {
            assert_eq!(
                settings_db_path().unwrap(),
                Path::new("/somewhere/AppData/Local/LGHUB/settings.db")
            );
        });
    }

    #[test]
    fn unset_variable_is_unresolved() {
        temp_env::with_var_unset(envvars::LOCAL_APP_DATA, || {
            assert!(settings_db_path().is_none());
        });
    }

    #[test]
    fn empty_variable_is_treated_as_unset() {
        temp_env::with_var(envvars::LOCAL_APP_DATA, Some(""), || {
            assert!(settings_db_path().is_none());
        });
    }
}
